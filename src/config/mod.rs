// ABOUTME: Configuration layer: immutable scientific constant tables and env-driven runtime settings
// ABOUTME: No mutable global state; configs are built once and passed by reference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

/// Environment-based runtime configuration for the server binary
pub mod environment;

/// Nutrition constant tables: BMR coefficients, activity factors, goal table, macro ratios
pub mod nutrition;

pub use environment::ServerConfig;
pub use nutrition::{ExportConfig, NutritionConfig};
