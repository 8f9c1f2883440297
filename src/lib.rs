// ABOUTME: Main library entry point for the nutriplan calculation and export engine
// ABOUTME: Derives energy/macro targets from biometrics and exports plan documents as PDF/HTML
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

#![deny(unsafe_code)]

//! # Nutriplan Engine
//!
//! Calculation and document-export engine behind a nutrition coaching platform.
//! The library has four layers, each a leaf built on the last:
//!
//! - **Metabolic calculator**: biometric inputs to BMR/TDEE and a fixed menu of
//!   calorie targets per goal (`intelligence::energy`)
//! - **Macro allocator**: calorie target + goal to gram-level protein/carb/fat
//!   targets under two distinct ratio policies (`intelligence::macros`)
//! - **Plan document model**: the validated in-memory nutrition plan with
//!   ordered meals (`models::plan`)
//! - **Export pipeline**: deterministic HTML assembly, timeout-bounded PDF
//!   rendering with an HTML fallback, and synthetic progress reporting
//!   (`export`)
//!
//! Persistence and client profiles are external collaborators consumed through
//! the traits in [`storage`]; the headless renderer is consumed through
//! [`export::PdfRenderer`].
//!
//! ## Example
//!
//! ```rust
//! use nutriplan::config::nutrition::NutritionConfig;
//! use nutriplan::intelligence::energy::{compute_energy_profile, BiometricInput};
//! use nutriplan::models::profile::{ActivityLevel, Gender};
//!
//! # fn main() -> nutriplan::errors::AppResult<()> {
//! let config = NutritionConfig::default();
//! let profile = compute_energy_profile(
//!     &BiometricInput {
//!         gender: Gender::Male,
//!         age_years: 30,
//!         weight_kg: 80.0,
//!         height_cm: 180.0,
//!         activity_level: ActivityLevel::ModeratelyActive,
//!     },
//!     &config,
//! )?;
//! assert_eq!(profile.calorie_options.len(), 8);
//! # Ok(())
//! # }
//! ```

/// Immutable configuration: scientific constant tables and environment settings
pub mod config;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Export pipeline: HTML assembly, PDF rendering seam, progress simulation
pub mod export;

/// External service clients (headless Chromium rendering service)
pub mod external;

/// Energy and macronutrient calculation algorithms
pub mod intelligence;

/// Production logging and structured output
pub mod logging;

/// Common data models: client profiles and plan documents
pub mod models;

/// HTTP routes exposing the calculator and export endpoints
pub mod routes;

/// Plan and client-profile storage contracts with in-memory implementations
pub mod storage;
