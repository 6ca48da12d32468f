//! Selection controller
//!
//! Owns the form's (budget, interest) selection, tells observers which
//! options need restyling when it changes, and runs searches on demand.

use tracing::{debug, info};

use crate::gateway::RecommendationSource;
use crate::models::{BudgetTier, InterestCategory, RecommendationRecord, SelectionState};

/// Result of a search as the presentation layer sees it
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// At least one destination, in knowledge-base order
    Found(Vec<RecommendationRecord>),
    NoResults,
}

impl SearchOutcome {
    #[must_use]
    pub fn from_records(records: Vec<RecommendationRecord>) -> Self {
        if records.is_empty() {
            SearchOutcome::NoResults
        } else {
            SearchOutcome::Found(records)
        }
    }

    #[must_use]
    pub fn records(&self) -> &[RecommendationRecord] {
        match self {
            SearchOutcome::Found(records) => records,
            SearchOutcome::NoResults => &[],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }

    /// Heading shown above the results
    #[must_use]
    pub fn headline(&self) -> String {
        match self.len() {
            0 => "No Destinations Found".to_string(),
            1 => "Found 1 Perfect Destination for You".to_string(),
            n => format!("Found {n} Perfect Destinations for You"),
        }
    }
}

/// Receives selection changes so the matching controls can be restyled
///
/// Both the previously selected and the newly selected option are passed, so
/// an observer only has to touch those two controls.
pub trait SelectionObserver {
    fn budget_changed(&mut self, _previous: BudgetTier, _current: BudgetTier) {}

    fn interest_changed(&mut self, _previous: InterestCategory, _current: InterestCategory) {}
}

/// Handle returned by [`SelectionController::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObserverId(usize);

pub struct SelectionController<S> {
    source: S,
    state: SelectionState,
    observers: Vec<(ObserverId, Box<dyn SelectionObserver>)>,
    next_observer: usize,
}

impl<S: RecommendationSource> SelectionController<S> {
    /// Controller starting from the default selection
    pub fn new(source: S) -> Self {
        Self::with_state(source, SelectionState::default())
    }

    pub fn with_state(source: S, state: SelectionState) -> Self {
        Self {
            source,
            state,
            observers: Vec::new(),
            next_observer: 0,
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn SelectionObserver>) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, observer));
        id
    }

    /// Stop notifying an observer, handing it back if it was still subscribed
    pub fn unsubscribe(&mut self, id: ObserverId) -> Option<Box<dyn SelectionObserver>> {
        let index = self.observers.iter().position(|(other, _)| *other == id)?;
        Some(self.observers.remove(index).1)
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Make `tier` the selected budget; re-selecting the current one changes nothing
    pub fn select_budget(&mut self, tier: BudgetTier) -> SelectionState {
        let previous = self.state.budget;
        if previous != tier {
            self.state.budget = tier;
            debug!("Budget changed from {} to {}", previous, tier);
            for (_, observer) in &mut self.observers {
                observer.budget_changed(previous, tier);
            }
        }
        self.state
    }

    /// Make `category` the selected interest; re-selecting the current one changes nothing
    pub fn select_interest(&mut self, category: InterestCategory) -> SelectionState {
        let previous = self.state.interest;
        if previous != category {
            self.state.interest = category;
            debug!("Interest changed from {} to {}", previous, category);
            for (_, observer) in &mut self.observers {
                observer.interest_changed(previous, category);
            }
        }
        self.state
    }

    /// Search for the current selection, blocking until the source answers
    pub fn search(&self) -> SearchOutcome {
        let SelectionState { budget, interest } = self.state;
        info!("Searching destinations for {}/{}", budget, interest);
        SearchOutcome::from_records(self.source.fetch(budget, interest))
    }
}
