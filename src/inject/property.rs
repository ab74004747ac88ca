// envsource: environment-variable aggregation for CI build hosts
//
// SPDX-FileCopyrightText: 2026 envsource contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Job-level injection-property lookup.

use crate::error::{EnvResult, invalid_argument};
use crate::host::{Build, InjectionProperty};

/// Returns the owning job's injection property only when it is active:
/// a configuration payload exists AND the property is enabled.
pub(super) fn injection_property(
    build: Option<&Build>,
) -> EnvResult<Option<&InjectionProperty>> {
    let build = build.ok_or_else(|| invalid_argument("a build reference must be set"))?;

    // Matrix cells resolve through the parent build's job.
    let job = build.owning_job();

    Ok(job
        .injection_property()
        .filter(|property| property.info().is_some() && property.is_enabled()))
}
