// envsource: environment-variable aggregation for CI build hosts
//
// SPDX-FileCopyrightText: 2026 envsource contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Host object model: nodes, computers, jobs, builds and the explicit
//! execution context.
//!
//! # Architecture
//!
//! ```text
//! HostContext -- settings + computers + current execution
//!      |
//!      +-- Computer { node?, environment, executors }
//!      |
//!      +-- Build { job, vars, matrix?, records, injected? }
//!                        |
//!                        +-- EnvironmentRecords: Granted | Denied
//! ```
//!
//! These types mirror the contracts the aggregation core consumes from the
//! surrounding automation host; the host's own scheduling and storage stay
//! out of scope.

pub mod build;
pub mod context;
pub mod node;

pub use build::{
    Build, EnvironmentRecord, EnvironmentRecords, InjectedEnvironment, InjectionInfo,
    InjectionProperty, Job, MatrixCell,
};
pub use context::{CurrentExecution, HostContext};
pub use node::{Computer, Executor, Node};
