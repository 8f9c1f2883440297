// ABOUTME: Calculation algorithms: metabolic energy profiles and macronutrient allocation
// ABOUTME: Pure, synchronous, side-effect-free; callable from any task without coordination
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

/// Metabolic calculator: BMR, TDEE, and the calorie-option menu
pub mod energy;

/// Macro allocator: calories + goal to gram-level targets
pub mod macros;

pub use energy::{compute_energy_profile, BiometricInput, CalorieOption, EnergyProfile};
pub use macros::{allocate_macros, MacroPolicy};
