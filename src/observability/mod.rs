// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Every diagnostic and operational log line in the crate goes through a message
//! type in [`messages`]. Each message implements `Display` for the human-readable
//! text and [`messages::StructuredLog`] for emitting it with structured fields.
//!
//! # Usage
//!
//! ```rust
//! use codemeta_overview::observability::messages::render::RenderStarted;
//!
//! let msg = RenderStarted {
//!     template_name: "overview.html",
//!     input_size: 512,
//! };
//!
//! tracing::debug!("{}", msg);
//! ```

pub mod messages;
