use thiserror::Error;

use crate::parsers::error::LoadError;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Failed to load instances: {0}")]
    Load(#[from] LoadError),

    #[error("Instance {id} not found, the collection holds {available} instances")]
    InstanceNotFound { id: usize, available: usize },

    #[error("Demand multipliers must not be empty")]
    EmptyMultipliers,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
