// envsource: environment-variable aggregation for CI build hosts
//
// SPDX-FileCopyrightText: 2026 envsource contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trigger-cause resolution.
//!
//! ```text
//! CauseResolver::triggered_cause(build) --> VarMap
//! DefaultCauseResolver:
//!   BUILD_CAUSE = "SCMTRIGGER,MANUALTRIGGER"
//!   BUILD_CAUSE_SCMTRIGGER = "true"
//!   BUILD_CAUSE_MANUALTRIGGER = "true"
//! ```
//!
//! The causation subsystem itself is an external collaborator; this module
//! only defines the contract plus the conventional export format.

use crate::host::Build;
use crate::vars::VarMap;

/// Resolves trigger-cause variables for a build.
pub trait CauseResolver {
    fn triggered_cause(&self, build: &Build) -> VarMap;
}

/// Exports the conventional `BUILD_CAUSE` variables from the build's
/// recorded cause names.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCauseResolver;

impl CauseResolver for DefaultCauseResolver {
    fn triggered_cause(&self, build: &Build) -> VarMap {
        let mut vars = VarMap::new();
        let names: Vec<String> = build
            .causes()
            .iter()
            .map(|c| sanitize_cause_name(c))
            .collect();

        if names.is_empty() {
            return vars;
        }

        vars.set("BUILD_CAUSE", names.join(","));
        for name in names {
            vars.set(format!("BUILD_CAUSE_{name}"), "true");
        }
        vars
    }
}

/// Resolver that contributes nothing; for hosts without a causation
/// subsystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCauses;

impl CauseResolver for NoCauses {
    fn triggered_cause(&self, _build: &Build) -> VarMap {
        VarMap::new()
    }
}

/// Uppercases a cause name and strips anything that is not a valid
/// variable-name character.
fn sanitize_cause_name(cause: &str) -> String {
    cause
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
