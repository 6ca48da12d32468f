//! Error types and handling for the travel advisor

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::engine::EngineError;

/// Main error type for the travel advisor
#[derive(Error, Debug)]
pub enum AdvisorError {
    /// The knowledge base file does not exist
    #[error("Knowledge base '{}' not found", path.display())]
    KnowledgeBaseMissing { path: PathBuf },

    /// The knowledge base exists but the rule engine could not load it
    #[error("Knowledge base '{}' could not be loaded: {source}", path.display())]
    KnowledgeBaseInvalid {
        path: PathBuf,
        #[source]
        source: EngineError,
    },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },
}

impl AdvisorError {
    /// Create a new missing knowledge base error
    pub fn knowledge_base_missing<P: AsRef<Path>>(path: P) -> Self {
        Self::KnowledgeBaseMissing {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a new invalid knowledge base error
    pub fn knowledge_base_invalid<P: AsRef<Path>>(path: P, source: EngineError) -> Self {
        Self::KnowledgeBaseInvalid {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Whether this error must stop the application before any form is shown
    #[must_use]
    pub fn is_fatal_startup(&self) -> bool {
        matches!(
            self,
            AdvisorError::KnowledgeBaseMissing { .. } | AdvisorError::KnowledgeBaseInvalid { .. }
        )
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            AdvisorError::KnowledgeBaseMissing { path } => format!(
                "Knowledge base '{}' not found!\nPlease create the knowledge base file first.",
                path.display()
            ),
            AdvisorError::KnowledgeBaseInvalid { path, source } => format!(
                "Error loading knowledge base '{}': {source}",
                path.display()
            ),
            AdvisorError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            AdvisorError::Validation { message } => {
                format!("Invalid input: {message}")
            }
        }
    }
}
