// ABOUTME: Export pipeline public surface: renderer seam, render errors, pipeline, progress, HTML
// ABOUTME: PDF rendering is consumed through the PdfRenderer trait so stubs can drive every path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

//! Plan document export.
//!
//! The pipeline assembles a deterministic HTML rendition of a plan, asks a
//! [`PdfRenderer`] for paginated bytes under a bounded timeout, and falls back
//! to serving the HTML itself when rendering times out or fails. Renderer
//! errors are absorbed here; only HTML assembly failure surfaces to callers.

/// Deterministic HTML assembly for plan documents
pub mod html;

/// The export orchestration state machine
pub mod pipeline;

/// Synthetic progress reporting decoupled from render completion
pub mod progress;

use async_trait::async_trait;
use bytes::Bytes;
use std::time::Duration;
use thiserror::Error;

/// Errors a renderer can produce. All of them are absorbed by the pipeline's
/// HTML fallback and never surface to export callers directly.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The render did not complete within the transport timeout
    #[error("renderer timed out after {0:?}")]
    Timeout(Duration),
    /// The renderer answered with a non-success status
    #[error("renderer returned HTTP {status}: {body}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Response body, truncated
        body: String,
    },
    /// Transport-level failure (connection refused, crashed process, ...)
    #[error("renderer transport error: {0}")]
    Transport(String),
}

/// Headless rendering engine seam.
///
/// Implementations own their transport-level timeout and must release any
/// renderer resource they acquire on every exit path, including errors and
/// cancellation; the pipeline additionally bounds each call with a
/// caller-side timeout.
#[async_trait]
pub trait PdfRenderer: Send + Sync {
    /// Render an HTML document into paginated PDF bytes.
    async fn render_pdf(&self, html: &str) -> Result<Bytes, RenderError>;
}

pub use html::render_plan_html;
pub use pipeline::{export_plan, ArtifactFormat, ExportJob, ExportResult, ExportStatus};
pub use progress::{progress_channel, ProgressEvent, ProgressSender, ProgressSimulator};
