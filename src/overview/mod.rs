// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod record;
mod renderer;
mod template;


pub use record::{decode_records, SoftwareRecord};
pub use renderer::TemplateRenderer;
pub use template::OverviewTemplate;
