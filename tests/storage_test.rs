// ABOUTME: In-memory store tests: ownership scoping and round-trip persistence
// ABOUTME: The owner id is passed through unchanged; the store enforces the scope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

//! Storage boundary tests.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::Utc;
use nutriplan::errors::ErrorCode;
use nutriplan::models::plan::{GoalCategory, MacroTargets, PlanDocument, PlanDraft};
use nutriplan::models::profile::{ActivityLevel, ClientProfile, Gender};
use nutriplan::storage::{ClientProfileStore, InMemoryClientStore, InMemoryPlanStore, PlanStore};
use uuid::Uuid;

fn plan(owner_id: Uuid) -> PlanDocument {
    PlanDocument::build(PlanDraft {
        client_id: Uuid::new_v4(),
        owner_id,
        name: "Base Plan".to_owned(),
        goal: GoalCategory::Maintenance,
        daily_calories: 2400.0,
        macro_targets: MacroTargets::default(),
        meals: vec![],
        restrictions: None,
        supplements: None,
        hydration_notes: None,
        is_active: true,
    })
    .unwrap()
}

#[tokio::test]
async fn test_plan_round_trip_scoped_to_owner() {
    let store = InMemoryPlanStore::new();
    let owner = Uuid::new_v4();
    let saved = store.save_plan(plan(owner)).await.unwrap();

    let fetched = store.get_plan(saved.id, owner).await.unwrap();
    assert_eq!(fetched.id, saved.id);
    assert_eq!(fetched.name, "Base Plan");
}

#[tokio::test]
async fn test_foreign_owner_sees_not_found() {
    let store = InMemoryPlanStore::new();
    let owner = Uuid::new_v4();
    let saved = store.save_plan(plan(owner)).await.unwrap();

    let err = store.get_plan(saved.id, Uuid::new_v4()).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_missing_plan_is_not_found() {
    let store = InMemoryPlanStore::new();
    let err = store
        .get_plan(Uuid::new_v4(), Uuid::new_v4())
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_client_profile_round_trip() {
    let store = InMemoryClientStore::new();
    let profile = ClientProfile {
        id: Uuid::new_v4(),
        full_name: "Priya Natarajan".to_owned(),
        email: None,
        gender: Gender::Female,
        age_years: 35,
        weight_kg: 58.0,
        height_cm: 162.0,
        activity_level: ActivityLevel::VeryActive,
        created_at: Utc::now(),
    };
    let saved = store.save_profile(profile.clone()).await.unwrap();
    let fetched = store.get_profile(saved.id).await.unwrap();
    assert_eq!(fetched.full_name, profile.full_name);

    let err = store.get_profile(Uuid::new_v4()).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}
