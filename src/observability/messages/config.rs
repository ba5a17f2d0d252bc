// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration loading.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::path::Path;
use tracing::Span;

/// Configuration file loaded and parsed.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use codemeta_overview::observability::messages::config::ConfigLoaded;
/// use std::path::Path;
///
/// let msg = ConfigLoaded {
///     path: "configs/overview.yaml",
///     template_path: Some(Path::new("templates/overview.html")),
///     log_level: "info",
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ConfigLoaded<'a> {
    pub path: &'a str,
    pub template_path: Option<&'a Path>,
    pub log_level: &'a str,
}

impl ConfigLoaded<'_> {
    fn template_display(&self) -> String {
        self.template_path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<embedded>".to_string())
    }
}

impl Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded config '{}': template={}, log_level={}",
            self.path,
            self.template_display(),
            self.log_level
        )
    }
}

impl StructuredLog for ConfigLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = self.path,
            template = %self.template_display(),
            log_level = self.log_level,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "config",
            span_name = name,
            path = self.path,
            template = %self.template_display(),
        )
    }
}
