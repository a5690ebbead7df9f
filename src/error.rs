// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error types for remediationbot

use thiserror::Error;

/// Main error type for remediationbot
#[derive(Error, Debug)]
pub enum RemediationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tip lookup failed: {0}")]
    TipLookup(String),
}

pub type Result<T> = std::result::Result<T, RemediationError>;
