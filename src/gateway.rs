//! Recommendation gateway
//!
//! Turns a (budget, interest) pair into a `destination_info/7` goal, runs it
//! on the rule engine and maps every solution row into a
//! [`RecommendationRecord`]. Engine faults never reach the caller: they are
//! logged and reported as an empty list, the same as a query with no
//! solutions.

use tracing::{debug, error, info, instrument, warn};

use crate::engine::{RuleEngine, Solution, Term};
use crate::models::{BudgetTier, InterestCategory, RecommendationRecord, VisaStatus};

/// Predicate the knowledge base answers recommendation queries with
pub const DESTINATION_PREDICATE: &str = "destination_info";

const DEST_VAR: &str = "Dest";
const VISA_VAR: &str = "Visa";
const DOCS_VAR: &str = "Docs";
const SEASON_VAR: &str = "Season";
const MIN_BUDGET_VAR: &str = "MinBudget";

/// Build the goal text for a budget and interest
#[must_use]
pub fn build_query(budget: BudgetTier, interest: InterestCategory) -> String {
    format!(
        "{DESTINATION_PREDICATE}({DEST_VAR}, {}, {}, {VISA_VAR}, {DOCS_VAR}, {SEASON_VAR}, {MIN_BUDGET_VAR})",
        Term::atom(budget.atom()),
        Term::atom(interest.atom()),
    )
}

/// Something that can produce recommendations for a selection
pub trait RecommendationSource {
    fn fetch(&self, budget: BudgetTier, interest: InterestCategory) -> Vec<RecommendationRecord>;
}

/// Stateless adapter between the search form and the rule engine
#[derive(Debug)]
pub struct RecommendationGateway<E> {
    engine: E,
}

impl<E: RuleEngine> RecommendationGateway<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Query the engine for every destination matching the selection
    #[instrument(level = "debug", skip(self))]
    pub fn fetch(&self, budget: BudgetTier, interest: InterestCategory) -> Vec<RecommendationRecord> {
        let query = build_query(budget, interest);
        debug!("Running query: {}", query);

        let solutions = match self.engine.query(&query) {
            Ok(solutions) => solutions,
            Err(e) => {
                error!("Knowledge base query error: {}", e);
                return Vec::new();
            }
        };

        let total = solutions.len();
        let records: Vec<RecommendationRecord> = solutions
            .iter()
            .enumerate()
            .filter_map(|(index, solution)| match record_from_solution(solution) {
                Ok(record) => Some(record),
                Err(reason) => {
                    warn!("Dropping solution {} for {}/{}: {}", index, budget, interest, reason);
                    None
                }
            })
            .collect();

        info!(
            "Found {} destinations for {}/{} ({} solutions)",
            records.len(),
            budget,
            interest,
            total
        );
        records
    }
}

impl<E: RuleEngine> RecommendationSource for RecommendationGateway<E> {
    fn fetch(&self, budget: BudgetTier, interest: InterestCategory) -> Vec<RecommendationRecord> {
        RecommendationGateway::fetch(self, budget, interest)
    }
}

fn bound<'a>(solution: &'a Solution, name: &str) -> Result<&'a Term, String> {
    match solution.get(name) {
        None => Err(format!("{name} is missing")),
        Some(term) if !term.is_ground() => Err(format!("{name} is unbound")),
        Some(term) => Ok(term),
    }
}

fn text(solution: &Solution, name: &str) -> Result<String, String> {
    let term = bound(solution, name)?;
    term.as_text()
        .ok_or_else(|| format!("{name} is not text: {term}"))
}

/// Map one solution row into a record, or explain why the row is malformed
pub fn record_from_solution(solution: &Solution) -> Result<RecommendationRecord, String> {
    let destination = text(solution, DEST_VAR)?;
    if destination.trim().is_empty() {
        return Err(format!("{DEST_VAR} is empty"));
    }

    let visa = bound(solution, VISA_VAR)?;
    let visa_status = visa
        .as_atom()
        .and_then(VisaStatus::from_atom)
        .ok_or_else(|| format!("{VISA_VAR} is not a known visa status: {visa}"))?;

    let required_documents = text(solution, DOCS_VAR)?;
    let best_season = text(solution, SEASON_VAR)?;

    let min_budget = bound(solution, MIN_BUDGET_VAR)?;
    let minimum_budget = min_budget
        .as_number()
        .ok_or_else(|| format!("{MIN_BUDGET_VAR} is not a number: {min_budget}"))?;

    Ok(RecommendationRecord {
        destination,
        visa_status,
        required_documents,
        best_season,
        minimum_budget,
    })
}
