use std::path::PathBuf;

use thiserror::Error;

/// Faults raised by a rule engine while consulting or querying
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Syntax error: {0}")]
    Syntax(String),

    #[error("Consult failed: {0}")]
    Consult(String),

    #[error("Unknown procedure: {name}/{arity}")]
    UnknownProcedure { name: String, arity: usize },

    #[error("Query raised an exception: {0}")]
    Exception(String),

    #[error("Engine not loaded: {0}")]
    NotLoaded(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
