// ABOUTME: Plan document model: validated nutrition plans with goal, targets, and ordered meals
// ABOUTME: Lenient meal construction, daily totals, and meal mutation operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

//! Nutrition plan documents.
//!
//! A [`PlanDocument`] is built once through [`PlanDocument::build`] (which
//! enforces every field invariant) and then mutated through the meal
//! operations. Calorie and macro targets follow last-writer-wins semantics:
//! they may come from manual entry, a selected calorie option, or a fresh
//! allocator run, and nothing re-derives them on read.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lowest daily calorie target a plan may carry
pub const DAILY_CALORIES_MIN: f64 = 800.0;
/// Highest daily calorie target a plan may carry
pub const DAILY_CALORIES_MAX: f64 = 5000.0;

/// The plan's nutritional objective, driving macro ratio selection
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GoalCategory {
    /// Caloric deficit with muscle preservation
    WeightLoss,
    /// Caloric surplus for hypertrophy
    MuscleGain,
    /// Caloric balance
    Maintenance,
    /// Fueling for training and competition
    Performance,
}

impl GoalCategory {
    /// Parse a goal category from wire input.
    ///
    /// Unrecognized values degrade to `Maintenance`, which keeps the macro
    /// allocator total over arbitrary stored plans.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "weight_loss" => Self::WeightLoss,
            "muscle_gain" => Self::MuscleGain,
            "maintenance" => Self::Maintenance,
            "performance" => Self::Performance,
            _ => Self::Maintenance,
        }
    }
}

/// Gram-level macronutrient targets
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroTargets {
    /// Daily protein target (grams)
    pub protein_g: u32,
    /// Daily carbohydrate target (grams)
    pub carbs_g: u32,
    /// Daily fat target (grams)
    pub fat_g: u32,
}

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// Display label for document rendering
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snack => "Snack",
        }
    }
}

/// Incoming meal fields as entered by the plan author.
///
/// Numeric fields are optional on purpose: the authoring surface has always
/// accepted meals with missing nutrition numbers, and stored plans rely on
/// that leniency. [`Meal::from_draft`] fills the gaps with zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealDraft {
    /// Meal slot this entry belongs to
    pub meal_type: MealType,
    /// Meal name (required)
    pub name: String,
    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Calories, defaulting to 0 when absent
    #[serde(default)]
    pub calories: Option<f64>,
    /// Protein grams, defaulting to 0 when absent
    #[serde(default)]
    pub protein_g: Option<f64>,
    /// Carbohydrate grams, defaulting to 0 when absent
    #[serde(default)]
    pub carbs_g: Option<f64>,
    /// Fat grams, defaulting to 0 when absent
    #[serde(default)]
    pub fat_g: Option<f64>,
    /// Ingredient list as free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,
    /// Preparation instructions as free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

/// A single meal inside a plan document.
///
/// Owned exclusively by the containing [`PlanDocument`]; removal from the
/// meal list is deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    /// Meal slot this entry belongs to
    pub meal_type: MealType,
    /// Meal name
    pub name: String,
    /// Free-text description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Calories
    pub calories: f64,
    /// Protein grams
    pub protein_g: f64,
    /// Carbohydrate grams
    pub carbs_g: f64,
    /// Fat grams
    pub fat_g: f64,
    /// Ingredient list as free text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,
    /// Preparation instructions as free text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl Meal {
    /// Validate a draft and fill missing numeric fields with zero.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the name is empty or any provided
    /// numeric field is negative.
    pub fn from_draft(draft: MealDraft) -> AppResult<Self> {
        if draft.name.trim().is_empty() {
            return Err(AppError::missing_field("name"));
        }
        let calories = non_negative("calories", draft.calories)?;
        let protein_g = non_negative("protein_g", draft.protein_g)?;
        let carbs_g = non_negative("carbs_g", draft.carbs_g)?;
        let fat_g = non_negative("fat_g", draft.fat_g)?;

        Ok(Self {
            meal_type: draft.meal_type,
            name: draft.name,
            description: draft.description,
            calories,
            protein_g,
            carbs_g,
            fat_g,
            ingredients: draft.ingredients,
            instructions: draft.instructions,
        })
    }
}

fn non_negative(field: &str, value: Option<f64>) -> AppResult<f64> {
    match value {
        None => Ok(0.0),
        Some(v) if v >= 0.0 && v.is_finite() => Ok(v),
        Some(v) => Err(AppError::out_of_range(
            field,
            format!("{field} must be a non-negative number, got {v}"),
        )),
    }
}

/// Sum of all meal nutrition in a plan
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct DailyTotals {
    /// Total calories across meals
    pub calories: f64,
    /// Total protein grams across meals
    pub protein_g: f64,
    /// Total carbohydrate grams across meals
    pub carbs_g: f64,
    /// Total fat grams across meals
    pub fat_g: f64,
}

/// Fields a trainer submits when finalizing plan creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanDraft {
    /// Client the plan targets
    pub client_id: Uuid,
    /// Trainer who owns the plan
    pub owner_id: Uuid,
    /// Plan name (required)
    pub name: String,
    /// Nutritional objective
    pub goal: GoalCategory,
    /// Daily calorie target, in [800, 5000]
    pub daily_calories: f64,
    /// Gram-level macro targets
    pub macro_targets: MacroTargets,
    /// Meals in serving order
    #[serde(default)]
    pub meals: Vec<MealDraft>,
    /// Dietary restrictions as free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<String>,
    /// Supplement notes as free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplements: Option<String>,
    /// Hydration notes as free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hydration_notes: Option<String>,
    /// Whether the plan is currently active
    #[serde(default = "default_active")]
    pub is_active: bool,
}

const fn default_active() -> bool {
    true
}

/// A validated nutrition plan document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanDocument {
    /// Unique plan identifier
    pub id: Uuid,
    /// Client the plan targets
    pub client_id: Uuid,
    /// Trainer who owns the plan
    pub owner_id: Uuid,
    /// Plan name
    pub name: String,
    /// Nutritional objective
    pub goal: GoalCategory,
    /// Daily calorie target, in [800, 5000]
    pub daily_calories: f64,
    /// Gram-level macro targets
    pub macro_targets: MacroTargets,
    /// Meals in serving order
    pub meals: Vec<Meal>,
    /// Dietary restrictions as free text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<String>,
    /// Supplement notes as free text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplements: Option<String>,
    /// Hydration notes as free text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hydration_notes: Option<String>,
    /// Whether the plan is currently active
    pub is_active: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp
    pub updated_at: DateTime<Utc>,
}

impl PlanDocument {
    /// Validate a draft and construct the plan document.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the name is empty, the calorie target
    /// is outside [800, 5000], or any meal draft is invalid. Validation never
    /// partially applies: the first violation aborts construction.
    pub fn build(draft: PlanDraft) -> AppResult<Self> {
        if draft.name.trim().is_empty() {
            return Err(AppError::missing_field("name"));
        }
        validate_daily_calories(draft.daily_calories)?;

        let meals = draft
            .meals
            .into_iter()
            .map(Meal::from_draft)
            .collect::<AppResult<Vec<_>>>()?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            client_id: draft.client_id,
            owner_id: draft.owner_id,
            name: draft.name,
            goal: draft.goal,
            daily_calories: draft.daily_calories,
            macro_targets: draft.macro_targets,
            meals,
            restrictions: draft.restrictions,
            supplements: draft.supplements,
            hydration_notes: draft.hydration_notes,
            is_active: draft.is_active,
            created_at: now,
            updated_at: now,
        })
    }

    /// Sum calories and macros across all meals.
    ///
    /// An empty meal list yields all-zero totals.
    #[must_use]
    pub fn daily_totals(&self) -> DailyTotals {
        self.meals.iter().fold(DailyTotals::default(), |acc, meal| {
            DailyTotals {
                calories: acc.calories + meal.calories,
                protein_g: acc.protein_g + meal.protein_g,
                carbs_g: acc.carbs_g + meal.carbs_g,
                fat_g: acc.fat_g + meal.fat_g,
            }
        })
    }

    /// Append a meal to the plan.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the draft is invalid.
    pub fn add_meal(&mut self, draft: MealDraft) -> AppResult<()> {
        let meal = Meal::from_draft(draft)?;
        self.meals.push(meal);
        self.touch();
        Ok(())
    }

    /// Remove the meal at `index`, returning it.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when `index` is out of bounds.
    pub fn remove_meal(&mut self, index: usize) -> AppResult<Meal> {
        if index >= self.meals.len() {
            return Err(AppError::not_found(format!("meal at index {index}")));
        }
        let meal = self.meals.remove(index);
        self.touch();
        Ok(meal)
    }

    /// Replace the meal at `index` with a validated draft.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when `index` is out of bounds, or a
    /// validation error when the draft is invalid.
    pub fn update_meal(&mut self, index: usize, draft: MealDraft) -> AppResult<()> {
        if index >= self.meals.len() {
            return Err(AppError::not_found(format!("meal at index {index}")));
        }
        self.meals[index] = Meal::from_draft(draft)?;
        self.touch();
        Ok(())
    }

    /// Overwrite the calorie and macro targets (last writer wins).
    ///
    /// Targets may come from manual entry, a selected calorie option, or a
    /// fresh allocator run; the document stores whichever snapshot was written
    /// last and never re-derives.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the calorie target is outside
    /// [800, 5000].
    pub fn set_energy_targets(&mut self, daily_calories: f64, macros: MacroTargets) -> AppResult<()> {
        validate_daily_calories(daily_calories)?;
        self.daily_calories = daily_calories;
        self.macro_targets = macros;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

fn validate_daily_calories(value: f64) -> AppResult<()> {
    if !value.is_finite() || !(DAILY_CALORIES_MIN..=DAILY_CALORIES_MAX).contains(&value) {
        return Err(AppError::out_of_range(
            "daily_calories",
            format!(
                "daily_calories must be between {DAILY_CALORIES_MIN} and {DAILY_CALORIES_MAX}, got {value}"
            ),
        ));
    }
    Ok(())
}
