// ABOUTME: Export orchestration: explicit state machine with dual render timeouts and HTML fallback
// ABOUTME: PDF failure degrades to an HTML artifact; only HTML assembly failure is a hard error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

//! The export pipeline.
//!
//! State machine: `Pending -> Rendering -> Succeeded(Pdf) | Succeeded(Html) |
//! Failed`. The fallback to HTML is an ordinary transition, not
//! exception-driven control flow, so a stub renderer can drive it in tests
//! without a real timeout.
//!
//! Two timeout mechanisms bound the render independently: the caller-side
//! `tokio::time::timeout` here, and the renderer implementation's own
//! transport timeout. Whichever fires first wins.
//!
//! Cancellation: dropping the future returned by [`export_plan`] aborts the
//! in-flight render call and, through [`ProgressSimulator`]'s drop guard, the
//! progress task. A cancelled export never delivers a partial artifact
//! because the artifact is the return value.

use crate::config::nutrition::ExportConfig;
use crate::errors::AppResult;
use crate::export::html::render_plan_html;
use crate::export::progress::{ProgressEvent, ProgressSender, ProgressSimulator};
use crate::export::{PdfRenderer, RenderError};
use crate::models::plan::PlanDocument;
use crate::models::profile::ClientProfile;
use bytes::Bytes;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Delivered artifact format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactFormat {
    /// Paginated PDF bytes from the renderer
    Pdf,
    /// UTF-8 HTML bytes, served when PDF rendering degraded
    Html,
}

impl ArtifactFormat {
    /// Content type for the export endpoint. Callers must inspect this
    /// rather than assume PDF.
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Html => "text/html; charset=utf-8",
        }
    }

    /// Attachment filename extension
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Html => "html",
        }
    }
}

/// Export job state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExportStatus {
    /// Created, nothing started
    Pending,
    /// HTML assembly and rendering in flight
    Rendering,
    /// Artifact produced in the given format
    Succeeded(ArtifactFormat),
    /// HTML assembly failed; no artifact
    Failed,
}

/// Ephemeral record of one export request. Created at export entry, discarded
/// once the artifact is delivered; never persisted.
#[derive(Debug)]
pub struct ExportJob {
    /// Plan being exported
    pub plan_id: Uuid,
    status: ExportStatus,
    history: Vec<ExportStatus>,
}

impl ExportJob {
    /// New job in `Pending`
    #[must_use]
    pub fn new(plan_id: Uuid) -> Self {
        Self {
            plan_id,
            status: ExportStatus::Pending,
            history: vec![ExportStatus::Pending],
        }
    }

    /// Current state
    #[must_use]
    pub const fn status(&self) -> ExportStatus {
        self.status
    }

    /// Every state this job has been in, in order
    #[must_use]
    pub fn history(&self) -> &[ExportStatus] {
        &self.history
    }

    fn transition(&mut self, next: ExportStatus) {
        debug!(plan_id = %self.plan_id, from = ?self.status, to = ?next, "export transition");
        self.status = next;
        self.history.push(next);
    }
}

/// A finished export
#[derive(Debug, Clone)]
pub struct ExportResult {
    /// Format actually delivered
    pub format: ArtifactFormat,
    /// Artifact bytes
    pub bytes: Bytes,
    /// True when PDF rendering degraded to the HTML fallback, so callers can
    /// warn the user
    pub degraded: bool,
}

/// Export a plan document to PDF, degrading to HTML on renderer trouble.
///
/// Emits `percent: 0` on entry, simulated progress while the render is in
/// flight, and exactly one terminal `percent: 100` after the pipeline
/// settles, on success and failure alike. Send errors on the progress channel
/// are ignored; a caller that stopped listening does not stop the export.
///
/// # Errors
///
/// Fails only when HTML assembly fails. Renderer timeouts and failures are
/// absorbed by the fallback and reported through `degraded` instead.
pub async fn export_plan(
    plan: &PlanDocument,
    client: &ClientProfile,
    renderer: &dyn PdfRenderer,
    progress: &ProgressSender,
    config: &ExportConfig,
) -> AppResult<ExportResult> {
    let mut job = ExportJob::new(plan.id);
    let _ = progress.send(ProgressEvent { percent: 0 });
    job.transition(ExportStatus::Rendering);

    let simulator = ProgressSimulator::spawn(progress.clone(), config);

    let html = match render_plan_html(plan, client, Utc::now()) {
        Ok(html) => html,
        Err(err) => {
            warn!(plan_id = %plan.id, error = %err, "html assembly failed, export aborted");
            simulator.cancel().await;
            let _ = progress.send(ProgressEvent { percent: 100 });
            job.transition(ExportStatus::Failed);
            return Err(err);
        }
    };

    let rendered = tokio::time::timeout(config.timeout(), renderer.render_pdf(&html)).await;

    let result = match rendered {
        Ok(Ok(bytes)) => {
            job.transition(ExportStatus::Succeeded(ArtifactFormat::Pdf));
            info!(plan_id = %plan.id, bytes = bytes.len(), "plan exported as pdf");
            ExportResult {
                format: ArtifactFormat::Pdf,
                bytes,
                degraded: false,
            }
        }
        Ok(Err(err)) => {
            warn!(plan_id = %plan.id, error = %err, "pdf rendering failed, serving html fallback");
            fallback(html, &mut job)
        }
        Err(_elapsed) => {
            let err = RenderError::Timeout(config.timeout());
            warn!(plan_id = %plan.id, error = %err, "pdf rendering timed out, serving html fallback");
            fallback(html, &mut job)
        }
    };

    simulator.cancel().await;
    let _ = progress.send(ProgressEvent { percent: 100 });
    Ok(result)
}

/// The fallback never fails: the HTML already exists, so delivery is a byte
/// conversion. It is not retried and nothing retries around it.
fn fallback(html: String, job: &mut ExportJob) -> ExportResult {
    job.transition(ExportStatus::Succeeded(ArtifactFormat::Html));
    ExportResult {
        format: ArtifactFormat::Html,
        bytes: Bytes::from(html.into_bytes()),
        degraded: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_records_transitions_in_order() {
        let mut job = ExportJob::new(Uuid::new_v4());
        assert_eq!(job.status(), ExportStatus::Pending);

        job.transition(ExportStatus::Rendering);
        job.transition(ExportStatus::Succeeded(ArtifactFormat::Html));

        assert_eq!(
            job.history(),
            &[
                ExportStatus::Pending,
                ExportStatus::Rendering,
                ExportStatus::Succeeded(ArtifactFormat::Html),
            ]
        );
    }

    #[test]
    fn test_content_types() {
        assert_eq!(ArtifactFormat::Pdf.content_type(), "application/pdf");
        assert!(ArtifactFormat::Html.content_type().starts_with("text/html"));
    }
}
