// envsource: environment-variable aggregation for CI build hosts
//
// SPDX-FileCopyrightText: 2026 envsource contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Toolchain lookup and per-node re-resolution.
//!
//! ```text
//! ToolchainResolver
//!   for_job(job)            --> configured toolchain, if any
//!   for_node(toolchain, n)  --> node-specific variant (may fail)
//! Toolchain: name + exported vars
//! ```

use crate::host::{Job, Node};
use crate::vars::VarMap;
use std::collections::BTreeMap;

/// A named toolchain with the variables it exports into a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    name: String,
    exports: VarMap,
}

impl Toolchain {
    #[must_use]
    pub fn new(name: impl Into<String>, exports: VarMap) -> Self {
        Self {
            name: name.into(),
            exports,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Variables this toolchain exports (e.g. a `*_HOME` and PATH entries).
    #[must_use]
    pub const fn exports(&self) -> &VarMap {
        &self.exports
    }
}

/// Resolves toolchains for jobs, with node-specific re-resolution.
pub trait ToolchainResolver {
    /// Looks up the toolchain configured for a job, if any.
    fn for_job(&self, job: &Job) -> Option<Toolchain>;

    /// Re-resolves a toolchain for a specific node; installations may
    /// differ per agent.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the node-specific lookup fails or is
    /// interrupted.
    fn for_node(&self, toolchain: &Toolchain, node: &Node) -> std::io::Result<Toolchain>;
}

/// Map-backed resolver with optional per-node export overrides.
#[derive(Debug, Clone, Default)]
pub struct StaticToolchains {
    toolchains: BTreeMap<String, Toolchain>,
    // (toolchain name, node name) -> node-specific variant
    node_overrides: BTreeMap<(String, String), Toolchain>,
}

impl StaticToolchains {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a toolchain under its own name.
    #[must_use]
    pub fn with_toolchain(mut self, toolchain: Toolchain) -> Self {
        self.toolchains.insert(toolchain.name().to_string(), toolchain);
        self
    }

    /// Registers a node-specific variant of a toolchain.
    #[must_use]
    pub fn with_node_override(
        mut self,
        toolchain_name: impl Into<String>,
        node_name: impl Into<String>,
        variant: Toolchain,
    ) -> Self {
        self.node_overrides
            .insert((toolchain_name.into(), node_name.into()), variant);
        self
    }
}

impl ToolchainResolver for StaticToolchains {
    fn for_job(&self, job: &Job) -> Option<Toolchain> {
        job.toolchain()
            .and_then(|name| self.toolchains.get(name))
            .cloned()
    }

    fn for_node(&self, toolchain: &Toolchain, node: &Node) -> std::io::Result<Toolchain> {
        let key = (toolchain.name().to_string(), node.name().to_string());
        Ok(self
            .node_overrides
            .get(&key)
            .cloned()
            .unwrap_or_else(|| toolchain.clone()))
    }
}
