// ABOUTME: Client profile model with the biometric and demographic fields the calculator consumes
// ABOUTME: Gender and ActivityLevel enums with lossy parsing for wire input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Gender for BMR calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male (higher BMR baseline)
    Male,
    /// Female (lower BMR baseline)
    Female,
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise or a physical job
    ExtremelyActive,
}

impl ActivityLevel {
    /// Parse an activity level from wire input.
    ///
    /// Unrecognized values degrade to `ModeratelyActive` rather than failing;
    /// this keeps the calculator total over arbitrary stored profiles. Callers
    /// that care log the degradation.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "sedentary" => Self::Sedentary,
            "lightly_active" => Self::LightlyActive,
            "moderately_active" => Self::ModeratelyActive,
            "very_active" => Self::VeryActive,
            "extremely_active" => Self::ExtremelyActive,
            _ => Self::ModeratelyActive,
        }
    }

    /// Stable wire name for this level
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::LightlyActive => "lightly_active",
            Self::ModeratelyActive => "moderately_active",
            Self::VeryActive => "very_active",
            Self::ExtremelyActive => "extremely_active",
        }
    }
}

/// Client profile as provided by the external profile store.
///
/// Ownership and consent handling live with the collaborator; this subsystem
/// only reads the biometric fields and the display name for document headers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientProfile {
    /// Unique client identifier
    pub id: Uuid,
    /// Display name used in document headers
    pub full_name: String,
    /// Contact email, when the client shared one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Biological gender for BMR calculation
    pub gender: Gender,
    /// Age in years
    pub age_years: u32,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Activity level for TDEE multiplier
    pub activity_level: ActivityLevel,
    /// Profile creation timestamp
    pub created_at: DateTime<Utc>,
}
