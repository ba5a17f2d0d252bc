// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Overview template loading and compilation.
//!
//! A template is compiled once, when the [`OverviewTemplate`] is constructed, and is
//! immutable afterwards. Syntax errors and unreadable files therefore surface as
//! [`OverviewError::TemplateLoad`] at startup and never from a render call.
//!
//! All string values are HTML-escaped on output regardless of the template name.

use crate::config::consts::{DEFAULT_STRICT_UNDEFINED, DEFAULT_TEMPLATE_NAME};
use crate::config::TemplateConfig;
use crate::errors::{OverviewError, OverviewResult};
use crate::observability::messages::{template::TemplateLoaded, StructuredLog};
use crate::overview::record::SoftwareRecord;
use minijinja::{context, AutoEscape, Environment, UndefinedBehavior};
use std::io::Write;
use std::path::Path;

/// The overview page shipped with the crate.
const EMBEDDED_TEMPLATE: &str = include_str!("../../templates/overview.html");

/// A compiled, read-only overview template.
///
/// Safe to share between threads; rendering never mutates it.
///
/// # Example
/// ```
/// use codemeta_overview::overview::{OverviewTemplate, SoftwareRecord};
///
/// let template = OverviewTemplate::from_source(
///     "list.html",
///     "{% for s in software %}[{{ s.slug }}]{% endfor %}",
/// ).unwrap();
///
/// let records = vec![SoftwareRecord { slug: "rsd".into(), ..Default::default() }];
/// let mut out = Vec::new();
/// template.render_records(&records, &mut out).unwrap();
/// assert_eq!(out, b"[rsd]");
/// ```
pub struct OverviewTemplate {
    env: Environment<'static>,
    name: String,
}

impl OverviewTemplate {
    /// Load and compile a template file. The file name becomes the template name.
    pub fn from_file<P: AsRef<Path>>(path: P) -> OverviewResult<Self> {
        Self::load_file(path.as_ref(), DEFAULT_STRICT_UNDEFINED)
    }

    /// Compile a template from an in-memory source.
    pub fn from_source(name: impl Into<String>, source: impl Into<String>) -> OverviewResult<Self> {
        Self::compile(name.into(), source.into(), DEFAULT_STRICT_UNDEFINED, "inline")
    }

    /// Compile the overview page shipped with the crate.
    pub fn embedded() -> OverviewResult<Self> {
        Self::compile(
            DEFAULT_TEMPLATE_NAME.to_string(),
            EMBEDDED_TEMPLATE.to_string(),
            DEFAULT_STRICT_UNDEFINED,
            "embedded",
        )
    }

    /// Load the configured template file, or the embedded one when no path is set.
    pub fn from_config(cfg: &TemplateConfig) -> OverviewResult<Self> {
        match &cfg.path {
            Some(path) => Self::load_file(path, cfg.strict_undefined),
            None => Self::compile(
                DEFAULT_TEMPLATE_NAME.to_string(),
                EMBEDDED_TEMPLATE.to_string(),
                cfg.strict_undefined,
                "embedded",
            ),
        }
    }

    /// Name the template was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render already-decoded records into `output`.
    ///
    /// The records are exposed to the template as `software`.
    pub fn render_records(
        &self,
        records: &[SoftwareRecord],
        output: &mut dyn Write,
    ) -> OverviewResult<()> {
        let template = self.env.get_template(&self.name)?;
        template.render_captured_to(context! { software => records }, output)?;
        Ok(())
    }

    fn load_file(path: &Path, strict_undefined: bool) -> OverviewResult<Self> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| OverviewError::template_load(&path.to_string_lossy(), e))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_TEMPLATE_NAME.to_string());

        Self::compile(name, source, strict_undefined, "file")
    }

    fn compile(
        name: String,
        source: String,
        strict_undefined: bool,
        source_kind: &str,
    ) -> OverviewResult<Self> {
        let size_bytes = source.len();

        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.set_undefined_behavior(if strict_undefined {
            UndefinedBehavior::Strict
        } else {
            UndefinedBehavior::Lenient
        });
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_template_owned(name.clone(), source)
            .map_err(|e| OverviewError::template_load(&name, e))?;

        TemplateLoaded {
            template_name: &name,
            source_kind,
            size_bytes,
        }
        .log();

        Ok(Self { env, name })
    }
}

impl std::fmt::Debug for OverviewTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverviewTemplate")
            .field("name", &self.name)
            .finish()
    }
}
