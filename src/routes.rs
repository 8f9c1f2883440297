// ABOUTME: HTTP routes for the calculator and export endpoints plus a health probe
// ABOUTME: Owner identity arrives via the x-owner-id header and passes through to the plan store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

//! HTTP surface.
//!
//! Authentication happens upstream; this layer receives the authenticated
//! owner id in the `x-owner-id` header and forwards it to the plan store
//! unchanged. The export endpoint streams back whichever artifact the
//! pipeline produced; callers must inspect `Content-Type` rather than assume
//! PDF, and may read `x-export-degraded` to warn about fallback delivery.

use crate::config::nutrition::{ExportConfig, NutritionConfig};
use crate::errors::{AppError, AppResult};
use crate::export::pipeline::export_plan;
use crate::export::progress::progress_channel;
use crate::export::PdfRenderer;
use crate::intelligence::energy::{compute_energy_profile, BiometricInput, EnergyProfile};
use crate::models::profile::{ActivityLevel, Gender};
use crate::storage::{ClientProfileStore, PlanStore};
use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};
use uuid::Uuid;

/// Shared state behind every route
pub struct ApiContext {
    /// Plan persistence collaborator
    pub plans: Arc<dyn PlanStore>,
    /// Client profile collaborator
    pub clients: Arc<dyn ClientProfileStore>,
    /// Headless rendering engine
    pub renderer: Arc<dyn PdfRenderer>,
    /// Nutrition constant tables
    pub nutrition: NutritionConfig,
    /// Export pipeline tuning
    pub export: ExportConfig,
}

/// Build the application router
pub fn router(context: Arc<ApiContext>) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/api/nutrition/calculate", post(handle_calculate))
        .route("/api/plans/:id/export", get(handle_export))
        .layer(TraceLayer::new_for_http())
        .with_state(context)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    service: &'static str,
    version: &'static str,
    status: &'static str,
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        service: "nutriplan",
        version: env!("CARGO_PKG_VERSION"),
        status: "ok",
    })
}

/// Calculator request body. The activity level arrives as a free string so
/// stored profiles with legacy values still calculate; unrecognized levels
/// degrade to moderately active.
#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    /// Biological gender
    pub gender: Gender,
    /// Age in years
    pub age_years: u32,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Activity level name
    pub activity_level: String,
}

async fn handle_calculate(
    State(context): State<Arc<ApiContext>>,
    Json(request): Json<CalculateRequest>,
) -> AppResult<Json<EnergyProfile>> {
    let activity_level = ActivityLevel::from_str_lossy(&request.activity_level);
    if activity_level.as_str() != request.activity_level.to_lowercase() {
        warn!(
            requested = %request.activity_level,
            "unrecognized activity level, using moderately_active multiplier"
        );
    }

    let input = BiometricInput {
        gender: request.gender,
        age_years: request.age_years,
        weight_kg: request.weight_kg,
        height_cm: request.height_cm,
        activity_level,
    };
    let profile = compute_energy_profile(&input, &context.nutrition)?;
    Ok(Json(profile))
}

async fn handle_export(
    State(context): State<Arc<ApiContext>>,
    Path(plan_id): Path<Uuid>,
    headers: HeaderMap,
) -> AppResult<Response> {
    let owner_id = owner_from_headers(&headers)?;
    let plan = context.plans.get_plan(plan_id, owner_id).await?;
    let client = context.clients.get_profile(plan.client_id).await?;

    let (progress_tx, mut progress_rx) = progress_channel();
    let drain = tokio::spawn(async move {
        while let Some(event) = progress_rx.recv().await {
            debug!(plan_id = %plan_id, percent = event.percent, "export progress");
        }
    });

    let result = export_plan(
        &plan,
        &client,
        context.renderer.as_ref(),
        &progress_tx,
        &context.export,
    )
    .await;
    drop(progress_tx);
    let _ = drain.await;
    let result = result?;

    let filename = attachment_filename(&plan.name, result.format.extension());
    let mut response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, result.format.content_type())
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        );
    if result.degraded {
        response = response.header("x-export-degraded", "true");
    }
    response
        .body(Body::from(result.bytes))
        .map_err(|e| AppError::internal(format!("failed to build export response: {e}")))
}

fn owner_from_headers(headers: &HeaderMap) -> AppResult<Uuid> {
    let raw = headers
        .get("x-owner-id")
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::missing_field("x-owner-id"))?;
    raw.parse::<Uuid>()
        .map_err(|_| AppError::validation("x-owner-id", format!("not a valid UUID: {raw}")))
}

/// Derive an attachment filename from a plan name, replacing every
/// non-alphanumeric character with an underscore.
fn attachment_filename(plan_name: &str, extension: &str) -> String {
    let stem: String = plan_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    let stem = if stem.chars().all(|c| c == '_') {
        "nutrition_plan".to_owned()
    } else {
        stem
    };
    format!("{stem}.{extension}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_filename_replaces_non_alphanumerics() {
        assert_eq!(
            attachment_filename("Cut Phase: Week 1!", "pdf"),
            "Cut_Phase__Week_1_.pdf"
        );
    }

    #[test]
    fn test_attachment_filename_empty_name_falls_back() {
        assert_eq!(attachment_filename("???", "html"), "nutrition_plan.html");
    }
}
