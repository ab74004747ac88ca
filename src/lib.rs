// envsource: environment-variable aggregation for CI build hosts
//
// SPDX-FileCopyrightText: 2026 envsource contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                 VariableGetter (inject)
//!       system / build / previous-steps / property
//!                          |
//!                          v
//!                     HostContext
//!         settings, computers, current execution
//!              |           |          |
//!              v           v          v
//!        contributor   toolchain    cause
//!         registry      resolver   resolver
//!              \           |          /
//!               '----> VarMap <-----'
//!            merge order: system -> build
//!              -> prior/injection -> cause
//!
//!   +-----------------------------------------+
//!   |  host    Node, Computer, Job, Build     |
//!   +-----------------------------------------+
//!   |  foundation   error, logging, config    |
//!   +-----------------------------------------+
//! ```
//!
//! The crate owns no scheduling, storage, or wire protocol: every operation
//! is a bounded, synchronous computation over an explicit
//! [`host::HostContext`] passed in by the caller.

pub mod cause;
pub mod config;
pub mod contributor;
pub mod error;
pub mod host;
pub mod inject;
pub mod logging;
pub mod toolchain;
pub mod vars;
