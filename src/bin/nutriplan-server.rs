// ABOUTME: Server binary wiring configuration, logging, stores, renderer, and HTTP routes
// ABOUTME: Environment-driven configuration with graceful shutdown on ctrl-c
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

//! # Nutriplan Server Binary
//!
//! Serves the calculator and export endpoints over HTTP. Plans and client
//! profiles are held in in-memory stores; swap the [`ApiContext`] wiring to
//! attach real collaborators.

use anyhow::Result;
use clap::Parser;
use nutriplan::{
    config::environment::ServerConfig,
    external::chromium::{ChromiumRenderer, ChromiumRendererConfig},
    logging,
    routes::{router, ApiContext},
    storage::{InMemoryClientStore, InMemoryPlanStore},
};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "nutriplan-server")]
#[command(about = "Nutrition plan calculation and document export engine")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Container environments sometimes pass unexpected arguments; fall back
    // to environment-only configuration rather than refusing to start.
    let args = Args::try_parse().unwrap_or(Args { http_port: None });

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;
    info!("Starting Nutriplan engine");
    info!("{}", config.summary());

    let renderer = ChromiumRenderer::new(ChromiumRendererConfig::from(&config.renderer))?;
    let context = Arc::new(ApiContext {
        plans: Arc::new(InMemoryPlanStore::new()),
        clients: Arc::new(InMemoryClientStore::new()),
        renderer: Arc::new(renderer),
        nutrition: nutriplan::config::nutrition::NutritionConfig::default(),
        export: config.export.clone(),
    });

    let app = router(context);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.http_port)).await?;
    info!(port = config.http_port, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to install ctrl-c handler");
    }
}
