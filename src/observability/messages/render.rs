// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the overview render lifecycle.
//!
//! The renderer emits `RenderStarted` and `RenderCompleted` only. Failures are
//! returned to the caller, which decides whether to log `RenderFailed`.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// Render call started.
///
/// # Log Level
/// `debug!` - Per-call detail
///
/// # Example
/// ```
/// use codemeta_overview::observability::messages::render::RenderStarted;
///
/// let msg = RenderStarted {
///     template_name: "overview.html",
///     input_size: 2048,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct RenderStarted<'a> {
    pub template_name: &'a str,
    pub input_size: usize,
}

impl Display for RenderStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Rendering overview with template '{}': input_size={} bytes",
            self.template_name, self.input_size
        )
    }
}

impl StructuredLog for RenderStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            template_name = self.template_name,
            input_size = self.input_size,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "render",
            span_name = name,
            template_name = self.template_name,
            input_size = self.input_size,
        )
    }
}

/// Render call completed successfully.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use codemeta_overview::observability::messages::render::RenderCompleted;
/// use std::time::Duration;
///
/// let msg = RenderCompleted {
///     template_name: "overview.html",
///     record_count: 3,
///     input_size: 2048,
///     output_size: 4096,
///     duration: Duration::from_millis(2),
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct RenderCompleted<'a> {
    pub template_name: &'a str,
    pub record_count: usize,
    pub input_size: usize,
    pub output_size: usize,
    pub duration: Duration,
}

impl Display for RenderCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Rendered {} records with template '{}': input={} bytes, output={} bytes, duration={:?}",
            self.record_count, self.template_name, self.input_size, self.output_size, self.duration
        )
    }
}

impl StructuredLog for RenderCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            template_name = self.template_name,
            record_count = self.record_count,
            input_size = self.input_size,
            output_size = self.output_size,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "render",
            span_name = name,
            template_name = self.template_name,
            record_count = self.record_count,
        )
    }
}

/// Render call failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use codemeta_overview::observability::messages::render::RenderFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "sink closed");
/// let msg = RenderFailed {
///     template_name: "overview.html",
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct RenderFailed<'a> {
    pub template_name: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for RenderFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Rendering with template '{}' failed: {}",
            self.template_name, self.error
        )
    }
}

impl StructuredLog for RenderFailed<'_> {
    fn log(&self) {
        tracing::error!(
            template_name = self.template_name,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "render",
            span_name = name,
            template_name = self.template_name,
            error = %self.error,
        )
    }
}
