// ABOUTME: Structured logging setup for hosts embedding the engine
// ABOUTME: EnvFilter-driven levels with json, pretty, or compact output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Wellness

//! Logging configuration
//!
//! The engine itself only emits `tracing` events; hosts call [`init`] once at
//! startup to install a subscriber. `RUST_LOG` overrides the configured level.

use anyhow::Result;
use std::env;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON lines for production collection
    Json,
    /// Human-readable multi-line output for development
    Pretty,
    /// Single-line output for space-constrained environments
    Compact,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is unset (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Compact,
        }
    }
}

impl LoggingConfig {
    /// Build a config from `LOG_LEVEL` and `LOG_FORMAT` environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_owned());
        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("pretty") => LogFormat::Pretty,
            _ => LogFormat::Compact,
        };
        Self { level, format }
    }
}

/// Install the global tracing subscriber
///
/// Safe to call once per process; a second call returns an error from the
/// subscriber registry.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    match config.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .try_init()?,
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().pretty())
            .try_init()?,
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact())
            .try_init()?,
    }
    Ok(())
}
