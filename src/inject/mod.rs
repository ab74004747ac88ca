// envsource: environment-variable aggregation for CI build hosts
//
// SPDX-FileCopyrightText: 2026 envsource contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The aggregation core.
//!
//! # Architecture
//!
//! ```text
//! VariableGetter (facade over &HostContext)
//!   system_variables(force_on_controller)   -> VarMap
//!   build_variables(build)                  -> EnvResult<VarMap>
//!   injection_property(build?)              -> EnvResult<Option<&prop>>
//!   env_vars_previous_steps(build)          -> EnvResult<VarMap>
//!
//! merge order (fixed):
//!   system -> build -> prior-steps/injection -> cause
//! injection artifact present => short-circuit, no recomputation
//! ```
//!
//! Later sources intentionally override earlier ones (legacy URL twins,
//! `NODE_NAME`); callers must not reorder the merges.

mod build_vars;
mod previous;
mod property;
mod system;

use crate::error::EnvResult;
use crate::host::{Build, HostContext, InjectionProperty};
use crate::vars::VarMap;

/// `NODE_NAME` value exported when the resolved node is the controller,
/// kept for backward-compatible naming.
pub const CONTROLLER_NODE_NAME: &str = "master";

/// Retrieves and merges environment-variable state for a build.
///
/// A thin facade over a borrowed [`HostContext`]; all operations are
/// synchronous and bounded.
#[derive(Debug, Clone, Copy)]
pub struct VariableGetter<'a> {
    ctx: &'a HostContext,
}

impl<'a> VariableGetter<'a> {
    #[must_use]
    pub const fn new(ctx: &'a HostContext) -> Self {
        Self { ctx }
    }

    /// System-level variables: node name and labels, root URL and home
    /// directory exports.
    ///
    /// With `force_on_controller` the controller computer is used; otherwise
    /// whatever computer the calling thread is executing on (possibly none).
    /// Absent optional state simply omits the corresponding keys.
    #[must_use]
    pub fn system_variables(&self, force_on_controller: bool) -> VarMap {
        system::system_variables(self.ctx, force_on_controller)
    }

    /// Build-level variables: characteristic vars, contributor vars,
    /// toolchain exports, executor number, build/job URLs, declared vars
    /// and trigger-cause vars, merged in that order.
    ///
    /// # Errors
    ///
    /// Returns [`InjectionError`](crate::error::InjectionError) wrapping the
    /// first I/O or interruption fault from a contributor or toolchain
    /// lookup; no partial result is returned.
    pub fn build_variables(&self, build: &Build) -> EnvResult<VarMap> {
        build_vars::build_variables(self.ctx, build)
    }

    /// The job-level injection property, if it is *active*: a configuration
    /// payload exists AND the property is enabled.
    ///
    /// # Errors
    ///
    /// Returns [`EnvSourceError::InvalidArgument`](crate::error::EnvSourceError::InvalidArgument)
    /// when `build` is absent.
    pub fn injection_property(
        &self,
        build: Option<&'a Build>,
    ) -> EnvResult<Option<&'a InjectionProperty>> {
        property::injection_property(build)
    }

    /// The "environment so far" snapshot: prior environment records, then
    /// either the attached injection artifact (short-circuit) or freshly
    /// computed system and build variables.
    ///
    /// # Errors
    ///
    /// Propagates faults from the fallback recomputation path; denied
    /// record access is logged and degraded to an empty sequence instead.
    pub fn env_vars_previous_steps(&self, build: &Build) -> EnvResult<VarMap> {
        previous::env_vars_previous_steps(self.ctx, build)
    }
}
