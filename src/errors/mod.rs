// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod overview;

pub use config::ConfigError;
pub use overview::{OverviewError, OverviewResult};
