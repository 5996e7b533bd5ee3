//! Error types for scene construction and rendering.

use thiserror::Error;

use crate::api::types::RegionName;

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Errors raised while loading, validating or generating a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("no asteroid template for index {index} (table holds {available})")]
    UnsupportedAsteroidIndex { index: usize, available: usize },

    #[error("unknown region: {0}")]
    UnknownRegion(String),

    #[error("unknown planet: {0}")]
    UnknownPlanet(String),

    #[error("invalid region {region}: {reason}")]
    InvalidRegion { region: RegionName, reason: String },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SceneError {
    pub(crate) fn invalid_region(region: RegionName, reason: impl Into<String>) -> Self {
        Self::InvalidRegion {
            region,
            reason: reason.into(),
        }
    }
}
