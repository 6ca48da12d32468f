//! Data models for the travel advisor
//!
//! This module contains the core domain models organized by concern:
//! - Selection: the budget and interest options a traveller picks from
//! - Recommendation: destination records produced by the knowledge base

pub mod recommendation;
pub mod selection;

// Re-export all public types for convenient access
pub use recommendation::{RecommendationRecord, VisaStatus};
pub use selection::{BudgetTier, InterestCategory, SelectionState};
