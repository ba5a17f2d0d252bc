// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io::Write;

use crate::errors::OverviewResult;

/// Turns a JSON array of software records into an overview document.
pub trait OverviewRenderer: Send + Sync {
    /// Decode `input` and write the rendered document to `output`.
    ///
    /// Nothing is written when `input` fails to decode.
    fn render(&self, input: &[u8], output: &mut dyn Write) -> OverviewResult<()>;

    fn name(&self) -> &str;

    /// Render into an in-memory string.
    fn render_to_string(&self, input: &[u8]) -> OverviewResult<String> {
        let mut buffer = Vec::new();
        self.render(input, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
