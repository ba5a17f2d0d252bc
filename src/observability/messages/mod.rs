// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Messages are organized by subsystem:
//!
//! * `config` - Configuration file loading
//! * `render` - Overview render lifecycle
//! * `template` - Template loading and compilation
//!
//! # Usage Pattern
//!
//! ```rust
//! use codemeta_overview::observability::messages::{template::TemplateLoaded, StructuredLog};
//!
//! let msg = TemplateLoaded {
//!     template_name: "overview.html",
//!     source_kind: "embedded",
//!     size_bytes: 1024,
//! };
//!
//! msg.log();
//! ```

use tracing::Span;

pub mod config;
pub mod render;
pub mod template;

/// Emits a message with its structured fields at the message's own level.
pub trait StructuredLog {
    /// Log the message as a single event.
    fn log(&self);

    /// Create a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
