// envsource: environment-variable aggregation for CI build hosts
//
// SPDX-FileCopyrightText: 2026 envsource contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Build-level variable snapshot.

use crate::error::{EnvResult, InjectionError};
use crate::host::{Build, HostContext};
use crate::vars::VarMap;

pub(super) fn build_variables(ctx: &HostContext, build: &Build) -> EnvResult<VarMap> {
    let mut result = build.characteristic_vars().clone();

    for contributor in ctx.contributors().iter() {
        let contributed =
            contributor
                .contribute(build, ctx)
                .map_err(|source| InjectionError::Contributor {
                    name: contributor.name().to_string(),
                    source,
                })?;
        tracing::trace!(
            contributor = %contributor.name(),
            count = contributed.len(),
            "Applying contributor variables"
        );
        result.merge_owned(contributed);
    }

    if let Some(toolchain) = ctx.toolchains().for_job(build.job()) {
        let resolved = match build.built_on().and_then(|name| ctx.node_by_name(name)) {
            Some(node) => ctx.toolchains().for_node(&toolchain, node).map_err(
                |source| InjectionError::Toolchain {
                    name: toolchain.name().to_string(),
                    node: node.name().to_string(),
                    source,
                },
            )?,
            None => toolchain,
        };
        result.merge(resolved.exports());
    }

    if let Some(executor) = ctx.executor_of(build) {
        result.set("EXECUTOR_NUMBER", executor.number().to_string());
    }

    if let Some(root_url) = ctx.root_url() {
        result.set("BUILD_URL", format!("{root_url}{}", build.url()));
        result.set("JOB_URL", format!("{root_url}{}", build.job().url()));
    }

    // Parameters and other declared contributions, axis vars included.
    result.merge_owned(build.build_variables());

    result.merge_owned(ctx.causes().triggered_cause(build));

    Ok(result)
}
