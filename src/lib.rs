// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;     // config file loading
pub mod errors;     // error handling
pub mod observability;
pub mod overview;   // record decoding + template rendering
pub mod traits;     // renderer abstraction
