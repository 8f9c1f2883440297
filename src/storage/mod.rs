// ABOUTME: Storage contracts for the plan and client-profile collaborators
// ABOUTME: Trait seams plus DashMap-backed in-memory implementations for the server and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

//! Persistence boundaries.
//!
//! Plans and client profiles live in external stores; this subsystem consumes
//! them through the traits below and passes the authenticated owner id
//! through unchanged. The ownership check itself belongs to the store.

use crate::errors::{AppError, AppResult};
use crate::models::plan::PlanDocument;
use crate::models::profile::ClientProfile;
use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

/// Plan persistence boundary
#[async_trait]
pub trait PlanStore: Send + Sync {
    /// Fetch a plan by id, scoped to its owning user.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when the plan does not exist or is not owned
    /// by `owner_id`.
    async fn get_plan(&self, id: Uuid, owner_id: Uuid) -> AppResult<PlanDocument>;

    /// Persist a plan, returning the stored document.
    ///
    /// # Errors
    ///
    /// Returns a store-specific error when persistence fails.
    async fn save_plan(&self, plan: PlanDocument) -> AppResult<PlanDocument>;
}

/// Client profile boundary
#[async_trait]
pub trait ClientProfileStore: Send + Sync {
    /// Fetch a client profile by client id.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when no profile exists for the id.
    async fn get_profile(&self, client_id: Uuid) -> AppResult<ClientProfile>;

    /// Persist a profile, returning the stored copy.
    ///
    /// # Errors
    ///
    /// Returns a store-specific error when persistence fails.
    async fn save_profile(&self, profile: ClientProfile) -> AppResult<ClientProfile>;
}

/// In-memory plan store
#[derive(Debug, Default)]
pub struct InMemoryPlanStore {
    plans: DashMap<Uuid, PlanDocument>,
}

impl InMemoryPlanStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlanStore for InMemoryPlanStore {
    async fn get_plan(&self, id: Uuid, owner_id: Uuid) -> AppResult<PlanDocument> {
        // A plan owned by someone else is indistinguishable from a missing one.
        self.plans
            .get(&id)
            .filter(|plan| plan.owner_id == owner_id)
            .map(|plan| plan.clone())
            .ok_or_else(|| AppError::not_found(format!("plan {id}")).with_resource_id(id.to_string()))
    }

    async fn save_plan(&self, plan: PlanDocument) -> AppResult<PlanDocument> {
        self.plans.insert(plan.id, plan.clone());
        Ok(plan)
    }
}

/// In-memory client profile store
#[derive(Debug, Default)]
pub struct InMemoryClientStore {
    profiles: DashMap<Uuid, ClientProfile>,
}

impl InMemoryClientStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClientProfileStore for InMemoryClientStore {
    async fn get_profile(&self, client_id: Uuid) -> AppResult<ClientProfile> {
        self.profiles
            .get(&client_id)
            .map(|profile| profile.clone())
            .ok_or_else(|| {
                AppError::not_found(format!("client profile {client_id}"))
                    .with_resource_id(client_id.to_string())
            })
    }

    async fn save_profile(&self, profile: ClientProfile) -> AppResult<ClientProfile> {
        self.profiles.insert(profile.id, profile.clone());
        Ok(profile)
    }
}
