// ABOUTME: HTML assembly tests: determinism, escaping, macro percentages, optional sections
// ABOUTME: The markup is both renderer input and fallback artifact, so its shape is a contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

//! HTML document assembly tests.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{TimeZone, Utc};
use nutriplan::export::html::render_plan_html;
use nutriplan::models::plan::{
    GoalCategory, MacroTargets, MealDraft, MealType, PlanDocument, PlanDraft,
};
use nutriplan::models::profile::{ActivityLevel, ClientProfile, Gender};
use uuid::Uuid;

fn client() -> ClientProfile {
    ClientProfile {
        id: Uuid::new_v4(),
        full_name: "Sam Kowalski".to_owned(),
        email: None,
        gender: Gender::Male,
        age_years: 41,
        weight_kg: 88.0,
        height_cm: 182.0,
        activity_level: ActivityLevel::LightlyActive,
        created_at: Utc::now(),
    }
}

fn plan(client_id: Uuid, name: &str) -> PlanDocument {
    PlanDocument::build(PlanDraft {
        client_id,
        owner_id: Uuid::new_v4(),
        name: name.to_owned(),
        goal: GoalCategory::Maintenance,
        daily_calories: 2500.0,
        macro_targets: MacroTargets {
            protein_g: 156,
            carbs_g: 281,
            fat_g: 83,
        },
        meals: vec![MealDraft {
            meal_type: MealType::Dinner,
            name: "Pasta al forno".to_owned(),
            description: Some("Sunday batch cook".to_owned()),
            calories: Some(760.0),
            protein_g: Some(38.0),
            carbs_g: Some(92.0),
            fat_g: Some(24.0),
            ingredients: None,
            instructions: Some("Reheat at 180C".to_owned()),
        }],
        restrictions: None,
        supplements: Some("Creatine 5g".to_owned()),
        hydration_notes: None,
        is_active: true,
    })
    .unwrap()
}

#[test]
fn test_same_inputs_produce_identical_markup() {
    let client = client();
    let plan = plan(client.id, "Steady State");
    let at = Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap();

    let first = render_plan_html(&plan, &client, at).unwrap();
    let second = render_plan_html(&plan, &client, at).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_macro_percentages_derive_from_macro_calories() {
    let client = client();
    let plan = plan(client.id, "Steady State");
    let html = render_plan_html(&plan, &client, Utc::now()).unwrap();

    // protein 156g*4 = 624 kcal, carbs 281g*4 = 1124, fat 83g*9 = 747,
    // total 2495 kcal -> 25% / 45% / 30%
    assert!(html.contains("156 g (25%)"));
    assert!(html.contains("281 g (45%)"));
    assert!(html.contains("83 g (30%)"));
}

#[test]
fn test_user_text_is_escaped() {
    let client = client();
    let plan = plan(client.id, "Bulk <script>alert(1)</script>");
    let html = render_plan_html(&plan, &client, Utc::now()).unwrap();

    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn test_optional_sections_render_only_when_present() {
    let client = client();
    let plan = plan(client.id, "Steady State");
    let html = render_plan_html(&plan, &client, Utc::now()).unwrap();

    assert!(html.contains("Supplements"));
    assert!(html.contains("Creatine 5g"));
    assert!(!html.contains("Dietary Restrictions"));
    assert!(!html.contains("Hydration"));
}

#[test]
fn test_meal_sections_carry_details() {
    let client = client();
    let plan = plan(client.id, "Steady State");
    let html = render_plan_html(&plan, &client, Utc::now()).unwrap();

    assert!(html.contains("Dinner: Pasta al forno"));
    assert!(html.contains("Sunday batch cook"));
    assert!(html.contains("Reheat at 180C"));
}

#[test]
fn test_unnamed_plan_fails_assembly() {
    let client = client();
    let mut plan = plan(client.id, "Steady State");
    plan.name = "  ".to_owned();

    assert!(render_plan_html(&plan, &client, Utc::now()).is_err());
}
