//! Application startup
//!
//! Consulting the knowledge base is the only step that can stop the advisor:
//! a missing or unreadable file is fatal and must be reported before any form
//! is shown.

use std::path::Path;

use tracing::info;

use crate::config::AdvisorConfig;
use crate::controller::SelectionController;
use crate::engine::{EngineError, PrologEngine, RuleEngine};
use crate::gateway::RecommendationGateway;
use crate::{AdvisorError, Result};

/// Controller wired to the embedded Prolog engine
pub type Advisor = SelectionController<RecommendationGateway<PrologEngine>>;

/// Consult `path` into `engine`, classifying failures as fatal startup errors
pub fn consult_knowledge_base<E: RuleEngine>(engine: &mut E, path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(AdvisorError::knowledge_base_missing(path));
    }
    engine.consult(path).map_err(|e| match e {
        EngineError::FileNotFound(missing) => AdvisorError::knowledge_base_missing(missing),
        other => AdvisorError::knowledge_base_invalid(path, other),
    })?;
    info!("Knowledge base ready: {}", path.display());
    Ok(())
}

/// Load the configured knowledge base and build a controller on top of it
pub fn start(config: &AdvisorConfig) -> Result<Advisor> {
    let mut engine = PrologEngine::new();
    consult_knowledge_base(&mut engine, &config.knowledge_base.path)?;
    let gateway = RecommendationGateway::new(engine);
    Ok(SelectionController::with_state(
        gateway,
        config.defaults.selection(),
    ))
}
