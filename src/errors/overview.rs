// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for template loading and overview rendering.
//!
//! `TemplateLoad` only surfaces while an [`OverviewTemplate`](crate::overview::OverviewTemplate)
//! is being constructed. `Decode` and `Render` are per-call failures of a render and leave
//! other calls unaffected.

use thiserror::Error;

/// Error type for every stage of producing an overview page.
#[derive(Error, Debug)]
pub enum OverviewError {
    /// The template resource could not be read or compiled.
    #[error("Failed to load template '{name}': {source}")]
    TemplateLoad {
        name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    /// The input buffer is not a JSON array of software records.
    #[error("Invalid software input: {0}")]
    Decode(#[from] serde_json::Error),

    /// Template execution failed, including failures writing to the sink.
    #[error("Failed to render overview: {0}")]
    Render(#[from] minijinja::Error),
}

impl OverviewError {
    pub(crate) fn template_load<E>(name: &str, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    {
        OverviewError::TemplateLoad {
            name: name.to_string(),
            source: source.into(),
        }
    }
}

/// Result type alias for overview operations.
pub type OverviewResult<T> = Result<T, OverviewError>;
