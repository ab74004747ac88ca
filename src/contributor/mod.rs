// envsource: environment-variable aggregation for CI build hosts
//
// SPDX-FileCopyrightText: 2026 envsource contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment-contributor extension registry.
//!
//! ```text
//! ContributorRegistry (ordered, externally configured)
//!   register(Box<dyn Contributor>)
//!   iter() --> registration order
//! merge rule: later contributors override earlier ones
//! ```
//!
//! Contributors are an explicit registry, not runtime discovery: the host
//! decides what is registered and in which order.

use crate::host::{Build, HostContext};
use crate::vars::VarMap;

/// An extension supplying additional environment variables during build
/// execution.
///
/// A contributor may block on nested host lookups; any I/O or interruption
/// fault it returns aborts the whole aggregation (see `inject`).
pub trait Contributor {
    /// Name used in diagnostics and error wrapping.
    fn name(&self) -> &str;

    /// Produces this contributor's variables for the given build.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the underlying lookup fails or is
    /// interrupted (`ErrorKind::Interrupted`).
    fn contribute(&self, build: &Build, ctx: &HostContext) -> std::io::Result<VarMap>;
}

/// Ordered registry of environment contributors.
///
/// Iteration order is registration order; the aggregation applies each
/// contributor's output cumulatively, so later contributors win on key
/// collisions.
#[derive(Default)]
pub struct ContributorRegistry {
    contributors: Vec<Box<dyn Contributor>>,
}

impl ContributorRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a contributor at the end of the order.
    pub fn register(&mut self, contributor: Box<dyn Contributor>) {
        tracing::debug!(name = %contributor.name(), "Registering environment contributor");
        self.contributors.push(contributor);
    }

    /// Chaining variant of [`register`](Self::register).
    #[must_use]
    pub fn with(mut self, contributor: Box<dyn Contributor>) -> Self {
        self.register(contributor);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Contributor> {
        self.contributors.iter().map(|c| &**c)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contributors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.contributors.len()
    }
}

impl std::fmt::Debug for ContributorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.contributors.iter().map(|c| c.name()))
            .finish()
    }
}

/// A contributor backed by a fixed variable map, for hosts that configure
/// static contributions (and for tests).
#[derive(Debug, Clone)]
pub struct StaticContributor {
    name: String,
    vars: VarMap,
}

impl StaticContributor {
    #[must_use]
    pub fn new(name: impl Into<String>, vars: VarMap) -> Self {
        Self {
            name: name.into(),
            vars,
        }
    }
}

impl Contributor for StaticContributor {
    fn name(&self) -> &str {
        &self.name
    }

    fn contribute(&self, _build: &Build, _ctx: &HostContext) -> std::io::Result<VarMap> {
        Ok(self.vars.clone())
    }
}
