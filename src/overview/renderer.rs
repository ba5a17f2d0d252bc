// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io::{self, Write};
use std::time::Instant;

use minijinja::ErrorKind;

use crate::errors::{OverviewError, OverviewResult};
use crate::observability::messages::{render::*, StructuredLog};
use crate::overview::record::decode_records;
use crate::overview::template::OverviewTemplate;
use crate::traits::OverviewRenderer;

/// Overview renderer backed by an injected, precompiled template.
///
/// Each call decodes the input, renders it and forgets it; the renderer keeps no
/// per-call state, so one instance can serve concurrent callers.
///
/// # Example
/// ```
/// use codemeta_overview::overview::{OverviewTemplate, TemplateRenderer};
/// use codemeta_overview::traits::OverviewRenderer;
///
/// let renderer = TemplateRenderer::new(OverviewTemplate::embedded().unwrap());
/// let html = renderer
///     .render_to_string(br#"[{"slug":"rsd","brand_name":"RSD","short_statement":"Directory"}]"#)
///     .unwrap();
///
/// assert!(html.contains(r#"<a href="rsd">RSD</a>"#));
/// ```
#[derive(Debug)]
pub struct TemplateRenderer {
    template: OverviewTemplate,
}

impl TemplateRenderer {
    pub fn new(template: OverviewTemplate) -> Self {
        Self { template }
    }

    pub fn template(&self) -> &OverviewTemplate {
        &self.template
    }
}

impl OverviewRenderer for TemplateRenderer {
    fn render(&self, input: &[u8], output: &mut dyn Write) -> OverviewResult<()> {
        let start_msg = RenderStarted {
            template_name: self.name(),
            input_size: input.len(),
        };

        let span = start_msg.span("overview_render");
        let _guard = span.enter();
        start_msg.log();

        let start_time = Instant::now();

        // Decode fully before touching the sink
        let records = decode_records(input)?;

        let mut sink = CountingWriter::new(output);
        self.template.render_records(&records, &mut sink)?;
        sink.flush().map_err(|e| {
            OverviewError::Render(
                minijinja::Error::new(ErrorKind::WriteFailure, "failed to flush output")
                    .with_source(e),
            )
        })?;

        RenderCompleted {
            template_name: self.name(),
            record_count: records.len(),
            input_size: input.len(),
            output_size: sink.written,
            duration: start_time.elapsed(),
        }
        .log();

        Ok(())
    }

    fn name(&self) -> &str {
        self.template.name()
    }
}

/// Counts bytes accepted by the wrapped sink.
struct CountingWriter<'a> {
    inner: &'a mut dyn Write,
    written: usize,
}

impl<'a> CountingWriter<'a> {
    fn new(inner: &'a mut dyn Write) -> Self {
        Self { inner, written: 0 }
    }
}

impl Write for CountingWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.written += n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
