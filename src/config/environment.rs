// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables and runtime configuration parsing for the server binary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

//! Environment-based configuration management.
//!
//! The server is configured through environment variables only; there is no
//! configuration file. Unset variables fall back to development defaults.

use crate::config::nutrition::ExportConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Renderer service connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RendererConfig {
    /// Base URL of the headless Chromium rendering service
    pub base_url: String,
    /// Transport-level request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3100".to_owned(),
            timeout_ms: 30_000,
        }
    }
}

/// Complete server configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Renderer service settings
    pub renderer: RendererConfig,
    /// Export pipeline tuning
    pub export: ExportConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Recognized variables:
    /// - `NUTRIPLAN_HTTP_PORT` (default 8081)
    /// - `NUTRIPLAN_ENV` (development / production / testing)
    /// - `NUTRIPLAN_LOG_LEVEL` (error / warn / info / debug / trace)
    /// - `RENDERER_BASE_URL` (default `http://localhost:3100`)
    /// - `RENDERER_TIMEOUT_MS` (default 30000; bounds both the transport and
    ///   the caller-side render timeout)
    ///
    /// # Errors
    ///
    /// Returns an error when a set variable fails to parse.
    pub fn from_env() -> Result<Self> {
        let http_port = parse_var("NUTRIPLAN_HTTP_PORT", 8081)?;
        let environment = Environment::from_str_or_default(
            &env::var("NUTRIPLAN_ENV").unwrap_or_default(),
        );
        let log_level = LogLevel::from_str_or_default(
            &env::var("NUTRIPLAN_LOG_LEVEL").unwrap_or_default(),
        );
        let timeout_ms = parse_var("RENDERER_TIMEOUT_MS", 30_000_u64)?;
        let renderer = RendererConfig {
            base_url: env::var("RENDERER_BASE_URL")
                .unwrap_or_else(|_| RendererConfig::default().base_url),
            timeout_ms,
        };
        let export = ExportConfig {
            timeout_ms,
            ..ExportConfig::default()
        };

        Ok(Self {
            http_port,
            environment,
            log_level,
            renderer,
            export,
        })
    }

    /// One-line configuration summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "env={:?} port={} renderer={} render_timeout_ms={}",
            self.environment, self.http_port, self.renderer.base_url, self.export.timeout_ms
        )
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("invalid value for {name}: {raw}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("prod"),
            Environment::Production
        );
        assert_eq!(
            Environment::from_str_or_default("nonsense"),
            Environment::Development
        );
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str_or_default("DEBUG"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default(""), LogLevel::Info);
    }
}
