//! Travel Advisor - travel and visa recommendations from a rule-based knowledge base
//!
//! This library provides the recommendation gateway that queries the rule
//! engine, the selection controller behind the search form, and the bundled
//! fact-table engine that answers `destination_info/7` goals.

pub mod app;
pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod gateway;
pub mod interactive;
pub mod logging;
pub mod models;
pub mod render;

// Re-export core types for public API
pub use app::{Advisor, consult_knowledge_base, start};
pub use config::AdvisorConfig;
pub use controller::{ObserverId, SearchOutcome, SelectionController, SelectionObserver};
pub use engine::{EngineError, PrologEngine, RuleEngine, Solution, Term};
pub use error::AdvisorError;
pub use gateway::{RecommendationGateway, RecommendationSource, build_query};
pub use models::{BudgetTier, InterestCategory, RecommendationRecord, SelectionState, VisaStatus};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, AdvisorError>;
