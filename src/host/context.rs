// envsource: environment-variable aggregation for CI build hosts
//
// SPDX-FileCopyrightText: 2026 envsource contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Explicit host execution context.
//!
//! ```text
//! HostContext
//!   settings      root URL, home dir
//!   computers     controller + agents
//!   current       where the calling thread is executing
//!   contributors  ordered extension registry
//!   toolchains    ToolchainResolver
//!   causes        CauseResolver
//! ```
//!
//! Every aggregation operation takes this context as a parameter; there are
//! no process-wide singleton lookups anywhere in the crate.

use crate::cause::{CauseResolver, NoCauses};
use crate::config::HostSettings;
use crate::contributor::ContributorRegistry;
use crate::toolchain::{StaticToolchains, ToolchainResolver};

use super::build::Build;
use super::node::{Computer, Executor, Node};

/// Where the calling thread is currently executing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentExecution {
    computer: String,
    executor: Option<u32>,
}

impl CurrentExecution {
    /// Execution on a computer outside any executor slot (e.g. a flyweight
    /// management thread).
    #[must_use]
    pub fn on_computer(computer: impl Into<String>) -> Self {
        Self {
            computer: computer.into(),
            executor: None,
        }
    }

    /// Execution inside a numbered executor slot.
    #[must_use]
    pub fn on_executor(computer: impl Into<String>, executor: u32) -> Self {
        Self {
            computer: computer.into(),
            executor: Some(executor),
        }
    }

    #[must_use]
    pub fn computer(&self) -> &str {
        &self.computer
    }

    #[must_use]
    pub const fn executor(&self) -> Option<u32> {
        self.executor
    }
}

/// Explicit execution context passed to every aggregation operation.
pub struct HostContext {
    settings: HostSettings,
    computers: Vec<Computer>,
    current: Option<CurrentExecution>,
    contributors: ContributorRegistry,
    toolchains: Box<dyn ToolchainResolver>,
    causes: Box<dyn CauseResolver>,
}

impl HostContext {
    #[must_use]
    pub fn new(settings: HostSettings) -> Self {
        Self {
            settings,
            computers: Vec::new(),
            current: None,
            contributors: ContributorRegistry::new(),
            toolchains: Box::new(StaticToolchains::new()),
            causes: Box::new(NoCauses),
        }
    }

    /// Adds a computer to the registry. The controller is whichever
    /// computer was built with [`Computer::controller`].
    #[must_use]
    pub fn with_computer(mut self, computer: Computer) -> Self {
        self.computers.push(computer);
        self
    }

    /// Sets where the calling thread is executing.
    #[must_use]
    pub fn with_current(mut self, current: CurrentExecution) -> Self {
        self.current = Some(current);
        self
    }

    #[must_use]
    pub fn with_contributors(mut self, contributors: ContributorRegistry) -> Self {
        self.contributors = contributors;
        self
    }

    #[must_use]
    pub fn with_toolchains(mut self, toolchains: impl ToolchainResolver + 'static) -> Self {
        self.toolchains = Box::new(toolchains);
        self
    }

    #[must_use]
    pub fn with_cause_resolver(mut self, causes: impl CauseResolver + 'static) -> Self {
        self.causes = Box::new(causes);
        self
    }

    #[must_use]
    pub const fn settings(&self) -> &HostSettings {
        &self.settings
    }

    /// The configured root URL, if any; normalized with a trailing slash.
    #[must_use]
    pub fn root_url(&self) -> Option<&str> {
        self.settings.root_url()
    }

    #[must_use]
    pub fn computers(&self) -> &[Computer] {
        &self.computers
    }

    /// The controller computer, if registered.
    #[must_use]
    pub fn controller(&self) -> Option<&Computer> {
        self.computers.iter().find(|c| c.is_controller())
    }

    /// The computer the calling thread is executing on, if any.
    #[must_use]
    pub fn current_computer(&self) -> Option<&Computer> {
        let current = self.current.as_ref()?;
        self.computer_by_name(current.computer())
    }

    #[must_use]
    pub fn computer_by_name(&self, name: &str) -> Option<&Computer> {
        self.computers.iter().find(|c| c.name() == name)
    }

    /// The node definition backing the named computer, if both exist.
    #[must_use]
    pub fn node_by_name(&self, name: &str) -> Option<&Node> {
        self.computer_by_name(name).and_then(Computer::node)
    }

    /// The executor currently associated with the build, if any.
    #[must_use]
    pub fn executor_of(&self, build: &Build) -> Option<&Executor> {
        self.computers
            .iter()
            .flat_map(|c| c.executors().iter())
            .find(|e| e.current_build() == Some(build.id()))
    }

    /// Whether the calling thread's active executor is running this exact
    /// build. Only then is the build's record sequence safe to read live.
    #[must_use]
    pub fn is_current_build(&self, build: &Build) -> bool {
        let Some(current) = &self.current else {
            return false;
        };
        let Some(number) = current.executor() else {
            return false;
        };
        self.computer_by_name(current.computer())
            .and_then(|c| c.executors().iter().find(|e| e.number() == number))
            .is_some_and(|e| e.current_build() == Some(build.id()))
    }

    #[must_use]
    pub fn contributors(&self) -> &ContributorRegistry {
        &self.contributors
    }

    #[must_use]
    pub fn toolchains(&self) -> &dyn ToolchainResolver {
        self.toolchains.as_ref()
    }

    #[must_use]
    pub fn causes(&self) -> &dyn CauseResolver {
        self.causes.as_ref()
    }
}

impl std::fmt::Debug for HostContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostContext")
            .field("settings", &self.settings)
            .field("computers", &self.computers)
            .field("current", &self.current)
            .field("contributors", &self.contributors)
            .finish_non_exhaustive()
    }
}
