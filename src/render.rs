//! Plain-text rendering of the search form and its results

use std::fmt::Write;

use crate::controller::SearchOutcome;
use crate::models::{
    BudgetTier, InterestCategory, RecommendationRecord, SelectionState, VisaStatus,
};

fn marker(selected: bool) -> &'static str {
    if selected { "(*)" } else { "( )" }
}

/// Paperwork gauge, one filled dot per difficulty step
fn paperwork(status: VisaStatus) -> String {
    let filled = usize::from(status.difficulty());
    let total = usize::from(VisaStatus::VisaRequired.difficulty());
    format!("{}{}", "●".repeat(filled), "○".repeat(total - filled))
}

/// Budget group with the selected option highlighted
#[must_use]
pub fn budget_options(state: &SelectionState) -> String {
    let mut out = String::from("💰 Select Your Budget\n");
    for tier in BudgetTier::ALL {
        let _ = writeln!(
            out,
            "   {} {:<14} {:<14} [{}]",
            marker(state.is_budget_selected(tier)),
            tier.title(),
            tier.hint(),
            tier.atom()
        );
    }
    out
}

/// Interest group with the selected option highlighted
#[must_use]
pub fn interest_options(state: &SelectionState) -> String {
    let mut out = String::from("📍 What Interests You?\n");
    for category in InterestCategory::ALL {
        let _ = writeln!(
            out,
            "   {} {:<20} [{}]",
            marker(state.is_interest_selected(category)),
            category.title(),
            category.atom()
        );
    }
    out
}

/// One destination card
#[must_use]
pub fn card(record: &RecommendationRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "📍 {}", record.destination.to_uppercase());
    let _ = writeln!(out, "   💰 Minimum Budget:     {}", record.budget_label());
    let _ = writeln!(
        out,
        "   🎫 Visa Status:        {} [paperwork {}]",
        record.visa_status,
        paperwork(record.visa_status)
    );
    let _ = writeln!(out, "   📅 Best Season:        {}", record.best_season);
    let _ = writeln!(out, "   📋 Required Documents: {}", record.required_documents);
    out
}

/// Results list, or the empty state when nothing matched
#[must_use]
pub fn outcome(outcome: &SearchOutcome) -> String {
    if outcome.is_empty() {
        return format!(
            "⚠ {}\n   Try adjusting your budget or interests\n",
            outcome.headline()
        );
    }

    let mut out = format!("✓ {}\n\n", outcome.headline());
    for record in outcome.records() {
        out.push_str(&card(record));
        out.push('\n');
    }
    out
}
