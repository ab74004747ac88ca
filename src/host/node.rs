// envsource: environment-variable aggregation for CI build hosts
//
// SPDX-FileCopyrightText: 2026 envsource contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Nodes, computers and executors.
//!
//! ```text
//! Computer (live agent)
//!   name, is_controller, base environment
//!   node: Option<Node>   -- absent when the agent definition is gone
//!   executors: [Executor]
//! ```

use crate::vars::VarMap;

/// A host-managed execution agent definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    labels: Vec<String>,
}

impl Node {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            labels: Vec::new(),
        }
    }

    /// Adds assigned labels, preserving order.
    #[must_use]
    pub fn with_labels(mut self, labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.labels.extend(labels.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Space-joined assigned labels, as exported in `NODE_LABELS`.
    #[must_use]
    pub fn labels_joined(&self) -> String {
        self.labels.join(" ")
    }
}

/// A host-managed execution slot, running at most one build at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Executor {
    number: u32,
    current_build: Option<String>,
}

impl Executor {
    #[must_use]
    pub const fn idle(number: u32) -> Self {
        Self {
            number,
            current_build: None,
        }
    }

    #[must_use]
    pub fn running(number: u32, build_id: impl Into<String>) -> Self {
        Self {
            number,
            current_build: Some(build_id.into()),
        }
    }

    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Id of the build this executor is currently running, if any.
    #[must_use]
    pub fn current_build(&self) -> Option<&str> {
        self.current_build.as_deref()
    }
}

/// The live counterpart of a node: the agent as currently connected.
#[derive(Debug, Clone)]
pub struct Computer {
    name: String,
    is_controller: bool,
    environment: VarMap,
    node: Option<Node>,
    executors: Vec<Executor>,
}

impl Computer {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_controller: false,
            environment: VarMap::new(),
            node: None,
            executors: Vec::new(),
        }
    }

    /// Marks this computer as the controller.
    #[must_use]
    pub const fn controller(mut self) -> Self {
        self.is_controller = true;
        self
    }

    /// Sets the base environment captured from the agent process.
    #[must_use]
    pub fn with_environment(mut self, environment: VarMap) -> Self {
        self.environment = environment;
        self
    }

    /// Attaches the node definition backing this computer.
    #[must_use]
    pub fn with_node(mut self, node: Node) -> Self {
        self.node = Some(node);
        self
    }

    #[must_use]
    pub fn with_executor(mut self, executor: Executor) -> Self {
        self.executors.push(executor);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn is_controller(&self) -> bool {
        self.is_controller
    }

    #[must_use]
    pub const fn environment(&self) -> &VarMap {
        &self.environment
    }

    /// The backing node definition; absent when it was removed from the
    /// host configuration while the agent stayed connected.
    #[must_use]
    pub const fn node(&self) -> Option<&Node> {
        self.node.as_ref()
    }

    #[must_use]
    pub fn executors(&self) -> &[Executor] {
        &self.executors
    }
}
