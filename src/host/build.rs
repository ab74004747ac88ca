// envsource: environment-variable aggregation for CI build hosts
//
// SPDX-FileCopyrightText: 2026 envsource contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Jobs, builds and their attached environment state.
//!
//! ```text
//! Job: url, toolchain?, injection property?
//! Build
//!   characteristic vars + declared vars (params)
//!   matrix: Option<MatrixCell { parent job, axis vars }>
//!   records: EnvironmentRecords::Granted | Denied   (capability)
//!   injected: Option<InjectedEnvironment>           (artifact)
//! ```
//!
//! The environment-record sequence is an explicit capability the host
//! grants, not a back door: `Denied` carries the refusal reason and the
//! aggregation degrades to an empty sequence.

use crate::vars::VarMap;

/// A configured project on the host.
#[derive(Debug, Clone)]
pub struct Job {
    name: String,
    url: String,
    toolchain: Option<String>,
    injection_property: Option<InjectionProperty>,
}

impl Job {
    /// Creates a job. `url` is the job's path relative to the host root
    /// and is expected to carry a trailing slash (e.g. `job/foo/`).
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            toolchain: None,
            injection_property: None,
        }
    }

    /// Sets the name of the toolchain configured for this job.
    #[must_use]
    pub fn with_toolchain(mut self, toolchain: impl Into<String>) -> Self {
        self.toolchain = Some(toolchain.into());
        self
    }

    #[must_use]
    pub fn with_injection_property(mut self, property: InjectionProperty) -> Self {
        self.injection_property = Some(property);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn toolchain(&self) -> Option<&str> {
        self.toolchain.as_deref()
    }

    #[must_use]
    pub const fn injection_property(&self) -> Option<&InjectionProperty> {
        self.injection_property.as_ref()
    }
}

/// Job-level injection configuration.
///
/// Consumers only act on it when it is *active*: a configuration payload is
/// present AND the property is explicitly enabled.
#[derive(Debug, Clone)]
pub struct InjectionProperty {
    enabled: bool,
    info: Option<InjectionInfo>,
}

impl InjectionProperty {
    #[must_use]
    pub const fn new(enabled: bool, info: Option<InjectionInfo>) -> Self {
        Self { enabled, info }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub const fn info(&self) -> Option<&InjectionInfo> {
        self.info.as_ref()
    }
}

/// The configuration payload of an [`InjectionProperty`].
#[derive(Debug, Clone, Default)]
pub struct InjectionInfo {
    properties_content: Option<String>,
    properties_file_path: Option<String>,
}

impl InjectionInfo {
    #[must_use]
    pub fn with_properties_content(mut self, content: impl Into<String>) -> Self {
        self.properties_content = Some(content.into());
        self
    }

    #[must_use]
    pub fn with_properties_file_path(mut self, path: impl Into<String>) -> Self {
        self.properties_file_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn properties_content(&self) -> Option<&str> {
        self.properties_content.as_deref()
    }

    #[must_use]
    pub fn properties_file_path(&self) -> Option<&str> {
        self.properties_file_path.as_deref()
    }
}

/// One prior environment contribution attached to a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentRecord {
    source: String,
    vars: VarMap,
}

impl EnvironmentRecord {
    #[must_use]
    pub fn new(source: impl Into<String>, vars: VarMap) -> Self {
        Self {
            source: source.into(),
            vars,
        }
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Folds this record's variables into the target map.
    pub fn contribute_to(&self, target: &mut VarMap) {
        target.merge(&self.vars);
    }
}

/// Capability over a build's accumulated environment-record sequence.
#[derive(Debug, Clone)]
pub enum EnvironmentRecords {
    /// The host granted access to the sequence.
    Granted(Vec<EnvironmentRecord>),
    /// The host refused or failed internal access; carries the reason.
    Denied(String),
}

impl Default for EnvironmentRecords {
    fn default() -> Self {
        Self::Granted(Vec::new())
    }
}

/// Injection artifact attached by an earlier pipeline step.
///
/// The variable map may be absent on a half-written artifact; consumers
/// treat that as empty.
#[derive(Debug, Clone, Default)]
pub struct InjectedEnvironment {
    vars: Option<VarMap>,
}

impl InjectedEnvironment {
    #[must_use]
    pub const fn new(vars: VarMap) -> Self {
        Self { vars: Some(vars) }
    }

    /// An artifact whose map was never written.
    #[must_use]
    pub const fn absent() -> Self {
        Self { vars: None }
    }

    #[must_use]
    pub fn vars_or_empty(&self) -> VarMap {
        self.vars.clone().unwrap_or_default()
    }
}

/// Matrix-cell information for a build representing one axis combination.
#[derive(Debug, Clone)]
pub struct MatrixCell {
    parent_job: Job,
    axis_vars: VarMap,
}

impl MatrixCell {
    #[must_use]
    pub const fn new(parent_job: Job, axis_vars: VarMap) -> Self {
        Self {
            parent_job,
            axis_vars,
        }
    }

    #[must_use]
    pub const fn parent_job(&self) -> &Job {
        &self.parent_job
    }

    #[must_use]
    pub const fn axis_vars(&self) -> &VarMap {
        &self.axis_vars
    }
}

/// One execution instance of a configured job.
#[derive(Debug, Clone)]
pub struct Build {
    id: String,
    number: u32,
    url: String,
    job: Job,
    characteristic_vars: VarMap,
    declared_vars: VarMap,
    matrix: Option<MatrixCell>,
    built_on: Option<String>,
    causes: Vec<String>,
    records: EnvironmentRecords,
    injected: Option<InjectedEnvironment>,
}

impl Build {
    /// Creates a build. `url` is the build's path relative to the host
    /// root, with a trailing slash (e.g. `job/foo/3/`).
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        number: u32,
        url: impl Into<String>,
        job: Job,
    ) -> Self {
        Self {
            id: id.into(),
            number,
            url: url.into(),
            job,
            characteristic_vars: VarMap::new(),
            declared_vars: VarMap::new(),
            matrix: None,
            built_on: None,
            causes: Vec::new(),
            records: EnvironmentRecords::default(),
            injected: None,
        }
    }

    /// Sets the host-provided characteristic variables (JOB_NAME,
    /// BUILD_NUMBER and friends).
    #[must_use]
    pub fn with_characteristic_vars(mut self, vars: VarMap) -> Self {
        self.characteristic_vars = vars;
        self
    }

    /// Sets the declared variables: parameters and other contributions.
    #[must_use]
    pub fn with_declared_vars(mut self, vars: VarMap) -> Self {
        self.declared_vars = vars;
        self
    }

    /// Marks this build as a matrix cell of the given parent.
    #[must_use]
    pub fn with_matrix_cell(mut self, cell: MatrixCell) -> Self {
        self.matrix = Some(cell);
        self
    }

    /// Records the node the build ran on.
    #[must_use]
    pub fn with_built_on(mut self, node_name: impl Into<String>) -> Self {
        self.built_on = Some(node_name.into());
        self
    }

    #[must_use]
    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.causes.push(cause.into());
        self
    }

    #[must_use]
    pub fn with_records(mut self, records: EnvironmentRecords) -> Self {
        self.records = records;
        self
    }

    /// Attaches an injection artifact from an earlier pipeline step.
    #[must_use]
    pub fn with_injected(mut self, injected: InjectedEnvironment) -> Self {
        self.injected = Some(injected);
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The job this build belongs to directly.
    #[must_use]
    pub const fn job(&self) -> &Job {
        &self.job
    }

    /// The job that owns this build for property lookups: the parent
    /// build's job for a matrix cell, the build's own job otherwise.
    #[must_use]
    pub const fn owning_job(&self) -> &Job {
        match &self.matrix {
            Some(cell) => cell.parent_job(),
            None => &self.job,
        }
    }

    #[must_use]
    pub const fn is_matrix_cell(&self) -> bool {
        self.matrix.is_some()
    }

    #[must_use]
    pub const fn characteristic_vars(&self) -> &VarMap {
        &self.characteristic_vars
    }

    /// The build's declared variables; for a matrix cell the axis
    /// variables are included and override parameters on collision.
    #[must_use]
    pub fn build_variables(&self) -> VarMap {
        let mut vars = self.declared_vars.clone();
        if let Some(cell) = &self.matrix {
            vars.merge(cell.axis_vars());
        }
        vars
    }

    #[must_use]
    pub fn built_on(&self) -> Option<&str> {
        self.built_on.as_deref()
    }

    #[must_use]
    pub fn causes(&self) -> &[String] {
        &self.causes
    }

    #[must_use]
    pub const fn records(&self) -> &EnvironmentRecords {
        &self.records
    }

    #[must_use]
    pub const fn injected(&self) -> Option<&InjectedEnvironment> {
        self.injected.as_ref()
    }
}
