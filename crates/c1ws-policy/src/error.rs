use thiserror::Error;

use crate::model::{PolicyId, PolicyPath};

#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("Failed to list policies: {body}")]
    ListFailed { status: u16, body: String },

    #[error("Failed to get policy details: {body}")]
    DetailsFailed { status: u16, body: String },

    #[error("Failed to update policy: {body}")]
    UpdateFailed { status: u16, body: String },

    #[error("Policy '{0}' not found.")]
    NotFound(String),

    #[error("Policy path not found: {0}")]
    PathNotFound(PolicyPath),

    #[error("Policy '{0}' has no ID")]
    MissingId(String),

    #[error("Source and target are the same policy (ID {0})")]
    SameSourceAndTarget(PolicyId),

    #[error("Config file '{0}' not found. Please run c1ws-get-policy --save first or create the config file.")]
    SnapshotNotFound(String),

    #[error("Input closed before {0} was entered")]
    InputClosed(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PolicyError {
    /// HTTP status carried by a rejected API call, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            PolicyError::ListFailed { status, .. }
            | PolicyError::DetailsFailed { status, .. }
            | PolicyError::UpdateFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PolicyError>;
