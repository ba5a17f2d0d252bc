// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for template loading.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Template compiled and ready for rendering.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use codemeta_overview::observability::messages::template::TemplateLoaded;
///
/// let msg = TemplateLoaded {
///     template_name: "overview.html",
///     source_kind: "file",
///     size_bytes: 812,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct TemplateLoaded<'a> {
    pub template_name: &'a str,
    /// One of `file`, `embedded` or `inline`
    pub source_kind: &'a str,
    pub size_bytes: usize,
}

impl Display for TemplateLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Template '{}' loaded from {} source: {} bytes",
            self.template_name, self.source_kind, self.size_bytes
        )
    }
}

impl StructuredLog for TemplateLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            template_name = self.template_name,
            source_kind = self.source_kind,
            size_bytes = self.size_bytes,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "template",
            span_name = name,
            template_name = self.template_name,
            source_kind = self.source_kind,
        )
    }
}
