// envsource: environment-variable aggregation for CI build hosts
//
// SPDX-FileCopyrightText: 2026 envsource contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! System-level variable snapshot.

use crate::host::HostContext;
use crate::vars::VarMap;

use super::CONTROLLER_NODE_NAME;

pub(super) fn system_variables(ctx: &HostContext, force_on_controller: bool) -> VarMap {
    let mut result = VarMap::new();

    let computer = if force_on_controller {
        ctx.controller()
    } else {
        ctx.current_computer()
    };

    if let Some(computer) = computer {
        // Base layer; NODE_NAME/NODE_LABELS below override anything the
        // agent process happens to carry under those names.
        result.merge(computer.environment());

        if computer.is_controller() {
            result.set("NODE_NAME", CONTROLLER_NODE_NAME);
        } else {
            result.set("NODE_NAME", computer.name());
        }

        if let Some(node) = computer.node() {
            result.set("NODE_LABELS", node.labels_joined());
        }
    }

    if let Some(root_url) = ctx.root_url() {
        result.set("JENKINS_URL", root_url);
        result.set("HUDSON_URL", root_url); // legacy compatibility
    }

    let home = ctx.settings().home().to_string_lossy().into_owned();
    result.set("JENKINS_HOME", home.clone());
    result.set("HUDSON_HOME", home); // legacy compatibility

    result
}
