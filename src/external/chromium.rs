// ABOUTME: Headless Chromium rendering service client implementing the PdfRenderer seam
// ABOUTME: Posts HTML to the service's /pdf endpoint with a transport-level timeout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

//! Headless Chromium rendering client.
//!
//! The rendering service accepts `POST /pdf` with a JSON body containing the
//! HTML document and answers with paginated PDF bytes. The reqwest client is
//! built with a request timeout equal to the configured render timeout; this
//! is the transport-level half of the pipeline's dual timeout enforcement.
//! Connections are released by drop on every exit path.

use crate::config::environment::RendererConfig;
use crate::export::{PdfRenderer, RenderError};
use async_trait::async_trait;
use bytes::Bytes;
use serde::Serialize;
use std::time::Duration;

/// Chromium rendering service configuration
#[derive(Debug, Clone)]
pub struct ChromiumRendererConfig {
    /// Base URL of the rendering service
    pub base_url: String,
    /// Transport-level request timeout
    pub timeout: Duration,
}

impl Default for ChromiumRendererConfig {
    fn default() -> Self {
        let env = RendererConfig::default();
        Self {
            base_url: env.base_url,
            timeout: Duration::from_millis(env.timeout_ms),
        }
    }
}

impl From<&RendererConfig> for ChromiumRendererConfig {
    fn from(config: &RendererConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout: Duration::from_millis(config.timeout_ms),
        }
    }
}

#[derive(Serialize)]
struct RenderRequest<'a> {
    html: &'a str,
    options: RenderOptions,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RenderOptions {
    format: &'static str,
    print_background: bool,
}

/// Client for the headless Chromium rendering service
pub struct ChromiumRenderer {
    config: ChromiumRendererConfig,
    http_client: reqwest::Client,
}

impl ChromiumRenderer {
    /// Create a new renderer client.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(config: ChromiumRendererConfig) -> Result<Self, RenderError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RenderError::Transport(e.to_string()))?;
        Ok(Self {
            config,
            http_client,
        })
    }
}

#[async_trait]
impl PdfRenderer for ChromiumRenderer {
    async fn render_pdf(&self, html: &str) -> Result<Bytes, RenderError> {
        let url = format!("{}/pdf", self.config.base_url.trim_end_matches('/'));
        let response = self
            .http_client
            .post(&url)
            .json(&RenderRequest {
                html,
                options: RenderOptions {
                    format: "A4",
                    print_background: true,
                },
            })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RenderError::Timeout(self.config.timeout)
                } else {
                    RenderError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body = body.chars().take(512).collect::<String>();
            return Err(RenderError::Http {
                status: status.as_u16(),
                body,
            });
        }

        response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                RenderError::Timeout(self.config.timeout)
            } else {
                RenderError::Transport(e.to_string())
            }
        })
    }
}
