// envsource: environment-variable aggregation for CI build hosts
//
// SPDX-FileCopyrightText: 2026 envsource contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! "Environment so far" replay from prior steps.

use std::borrow::Cow;

use crate::error::EnvResult;
use crate::host::{Build, EnvironmentRecord, EnvironmentRecords, HostContext};
use crate::vars::VarMap;

use super::{build_vars, system};

pub(super) fn env_vars_previous_steps(ctx: &HostContext, build: &Build) -> EnvResult<VarMap> {
    let mut result = VarMap::new();

    for record in records_for(ctx, build).iter() {
        record.contribute_to(&mut result);
    }

    if let Some(injected) = build.injected() {
        // The artifact short-circuits recomputation: its snapshot stands in
        // for system and build variables entirely.
        result.merge_owned(injected.vars_or_empty());
        if build.is_matrix_cell() {
            // Axis variables are not part of the cached snapshot.
            result.merge_owned(build.build_variables());
        }
    } else {
        result.merge_owned(system::system_variables(ctx, false));
        result.merge_owned(build_vars::build_variables(ctx, build)?);
    }

    Ok(result)
}

/// The record sequence to fold: live only when the calling thread's active
/// executor is running this exact build, a defensive snapshot otherwise.
/// Denied access degrades to an empty sequence.
fn records_for<'a>(ctx: &HostContext, build: &'a Build) -> Cow<'a, [EnvironmentRecord]> {
    match build.records() {
        EnvironmentRecords::Granted(records) => {
            if ctx.is_current_build(build) {
                Cow::Borrowed(records.as_slice())
            } else {
                // Another thread may still be appending records.
                Cow::Owned(records.clone())
            }
        }
        EnvironmentRecords::Denied(reason) => {
            tracing::warn!(
                build = %build.id(),
                %reason,
                "Environment records unavailable, continuing with an empty sequence"
            );
            Cow::Owned(Vec::new())
        }
    }
}
