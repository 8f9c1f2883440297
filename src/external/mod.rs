// ABOUTME: External service clients consumed over HTTP
// ABOUTME: Currently the headless Chromium rendering service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

/// Headless Chromium rendering service client
pub mod chromium;

pub use chromium::{ChromiumRenderer, ChromiumRendererConfig};
