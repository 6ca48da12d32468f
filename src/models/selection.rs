//! Selection model for the two option groups of the search form

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::AdvisorError;

/// Budget tier a traveller is planning for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Low,
    #[default]
    Medium,
    High,
}

impl BudgetTier {
    /// All tiers in the order they are offered
    pub const ALL: [BudgetTier; 3] = [BudgetTier::Low, BudgetTier::Medium, BudgetTier::High];

    /// Atom naming this tier in the knowledge base
    #[must_use]
    pub fn atom(self) -> &'static str {
        match self {
            BudgetTier::Low => "low",
            BudgetTier::Medium => "medium",
            BudgetTier::High => "high",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            BudgetTier::Low => "Low Budget",
            BudgetTier::Medium => "Medium Budget",
            BudgetTier::High => "High Budget",
        }
    }

    /// Spending range the tier stands for
    #[must_use]
    pub fn hint(self) -> &'static str {
        match self {
            BudgetTier::Low => "Under $800",
            BudgetTier::Medium => "$1000 - $1500",
            BudgetTier::High => "$2000+",
        }
    }
}

impl Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.atom())
    }
}

impl FromStr for BudgetTier {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        BudgetTier::ALL
            .into_iter()
            .find(|tier| tier.atom() == wanted)
            .ok_or_else(|| {
                AdvisorError::validation(format!(
                    "unknown budget '{s}', expected one of: low, medium, high"
                ))
            })
    }
}

/// Kind of trip a traveller is interested in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestCategory {
    #[default]
    Beach,
    Nature,
    History,
    Shopping,
    City,
}

impl InterestCategory {
    /// All categories in the order they are offered
    pub const ALL: [InterestCategory; 5] = [
        InterestCategory::Beach,
        InterestCategory::Nature,
        InterestCategory::History,
        InterestCategory::Shopping,
        InterestCategory::City,
    ];

    /// Atom naming this category in the knowledge base
    #[must_use]
    pub fn atom(self) -> &'static str {
        match self {
            InterestCategory::Beach => "beach",
            InterestCategory::Nature => "nature",
            InterestCategory::History => "history",
            InterestCategory::Shopping => "shopping",
            InterestCategory::City => "city",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            InterestCategory::Beach => "Beach Paradise",
            InterestCategory::Nature => "Nature & Adventure",
            InterestCategory::History => "History",
            InterestCategory::Shopping => "Shopping & Leisure",
            InterestCategory::City => "City Exploration",
        }
    }
}

impl Display for InterestCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.atom())
    }
}

impl FromStr for InterestCategory {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        InterestCategory::ALL
            .into_iter()
            .find(|category| category.atom() == wanted)
            .ok_or_else(|| {
                AdvisorError::validation(format!(
                    "unknown interest '{s}', expected one of: beach, nature, history, shopping, city"
                ))
            })
    }
}

/// The pair of choices currently active on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionState {
    pub budget: BudgetTier,
    pub interest: InterestCategory,
}

impl SelectionState {
    #[must_use]
    pub fn new(budget: BudgetTier, interest: InterestCategory) -> Self {
        Self { budget, interest }
    }

    #[must_use]
    pub fn is_budget_selected(&self, tier: BudgetTier) -> bool {
        self.budget == tier
    }

    #[must_use]
    pub fn is_interest_selected(&self, category: InterestCategory) -> bool {
        self.interest == category
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_selection_is_medium_beach() {
        let state = SelectionState::default();
        assert_eq!(state.budget, BudgetTier::Medium);
        assert_eq!(state.interest, InterestCategory::Beach);
    }

    #[rstest]
    #[case("low", BudgetTier::Low)]
    #[case("Medium", BudgetTier::Medium)]
    #[case(" HIGH ", BudgetTier::High)]
    fn test_parse_budget(#[case] input: &str, #[case] expected: BudgetTier) {
        assert_eq!(input.parse::<BudgetTier>().unwrap(), expected);
    }

    #[rstest]
    #[case("beach", InterestCategory::Beach)]
    #[case("Nature", InterestCategory::Nature)]
    #[case("history", InterestCategory::History)]
    #[case("shopping", InterestCategory::Shopping)]
    #[case("CITY", InterestCategory::City)]
    fn test_parse_interest(#[case] input: &str, #[case] expected: InterestCategory) {
        assert_eq!(input.parse::<InterestCategory>().unwrap(), expected);
    }

    #[test]
    fn test_parse_rejects_unknown_values() {
        let err = "luxury".parse::<BudgetTier>().unwrap_err();
        assert!(err.to_string().contains("unknown budget 'luxury'"));

        let err = "skiing".parse::<InterestCategory>().unwrap_err();
        assert!(matches!(err, AdvisorError::Validation { .. }));
    }

    #[test]
    fn test_exactly_one_option_selected_per_group() {
        let state = SelectionState::new(BudgetTier::High, InterestCategory::History);
        let budgets = BudgetTier::ALL
            .iter()
            .filter(|t| state.is_budget_selected(**t))
            .count();
        let interests = InterestCategory::ALL
            .iter()
            .filter(|c| state.is_interest_selected(**c))
            .count();
        assert_eq!(budgets, 1);
        assert_eq!(interests, 1);
    }

    #[test]
    fn test_serde_uses_atoms() {
        let json = serde_json::to_string(&SelectionState::default()).unwrap();
        assert_eq!(json, r#"{"budget":"medium","interest":"beach"}"#);
    }
}
