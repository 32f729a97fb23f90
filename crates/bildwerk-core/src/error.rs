// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Bildwerk.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for all Bildwerk operations.
#[derive(Debug, Error)]
pub enum ImagingError {
    // -- Input --
    /// The path does not resolve to a decodable image (missing, unreadable,
    /// or an unsupported format).
    #[error("failed to load the image from {}: {reason}", path.display())]
    Load { path: PathBuf, reason: String },

    // -- Operation --
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    // -- Output --
    #[error("failed to save image: {0}")]
    Save(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ImagingError {
    /// Build a [`ImagingError::Load`] from any displayable cause.
    pub fn load(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        Self::Load {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// `true` when the failure happened before any transformation ran.
    pub fn is_load_failure(&self) -> bool {
        matches!(self, Self::Load { .. })
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ImagingError>;
