//! Recommendation model for destinations returned by the knowledge base

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Entry requirement for travellers visiting a destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisaStatus {
    VisaFree,
    VisaOnArrival,
    EVisa,
    VisaRequired,
}

impl VisaStatus {
    pub const ALL: [VisaStatus; 4] = [
        VisaStatus::VisaFree,
        VisaStatus::VisaOnArrival,
        VisaStatus::EVisa,
        VisaStatus::VisaRequired,
    ];

    /// Atom naming this status in the knowledge base
    #[must_use]
    pub fn atom(self) -> &'static str {
        match self {
            VisaStatus::VisaFree => "visa_free",
            VisaStatus::VisaOnArrival => "visa_on_arrival",
            VisaStatus::EVisa => "e_visa",
            VisaStatus::VisaRequired => "visa_required",
        }
    }

    #[must_use]
    pub fn from_atom(atom: &str) -> Option<Self> {
        VisaStatus::ALL.into_iter().find(|status| status.atom() == atom)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            VisaStatus::VisaFree => "Visa Free",
            VisaStatus::VisaOnArrival => "Visa On Arrival",
            VisaStatus::EVisa => "E Visa",
            VisaStatus::VisaRequired => "Visa Required",
        }
    }

    /// How much paperwork the status involves, 0 being none
    #[must_use]
    pub fn difficulty(self) -> u8 {
        match self {
            VisaStatus::VisaFree => 0,
            VisaStatus::VisaOnArrival => 1,
            VisaStatus::EVisa => 2,
            VisaStatus::VisaRequired => 3,
        }
    }
}

impl Display for VisaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One destination recommended for a budget and interest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRecord {
    /// Destination name, never empty
    pub destination: String,
    pub visa_status: VisaStatus,
    /// Documents to carry, as free text
    pub required_documents: String,
    /// Best time of year to travel, as free text
    pub best_season: String,
    /// Minimum trip budget in the currency the knowledge base uses
    pub minimum_budget: f64,
}

impl RecommendationRecord {
    /// Minimum budget formatted for display
    #[must_use]
    pub fn budget_label(&self) -> String {
        if self.minimum_budget.fract() == 0.0 {
            format!("${:.0} USD", self.minimum_budget)
        } else {
            format!("${:.2} USD", self.minimum_budget)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phuket() -> RecommendationRecord {
        RecommendationRecord {
            destination: "Phuket".to_string(),
            visa_status: VisaStatus::VisaOnArrival,
            required_documents: "Passport, Return Ticket".to_string(),
            best_season: "Nov-Feb".to_string(),
            minimum_budget: 1200.0,
        }
    }

    #[test]
    fn test_visa_atoms_round_trip() {
        for status in VisaStatus::ALL {
            assert_eq!(VisaStatus::from_atom(status.atom()), Some(status));
        }
        assert_eq!(VisaStatus::from_atom("visa_maybe"), None);
    }

    #[test]
    fn test_visa_labels_are_title_case() {
        assert_eq!(VisaStatus::VisaOnArrival.to_string(), "Visa On Arrival");
        assert_eq!(VisaStatus::EVisa.label(), "E Visa");
    }

    #[test]
    fn test_visa_difficulty_ordering() {
        assert!(VisaStatus::VisaFree.difficulty() < VisaStatus::VisaOnArrival.difficulty());
        assert!(VisaStatus::EVisa.difficulty() < VisaStatus::VisaRequired.difficulty());
    }

    #[test]
    fn test_budget_label() {
        let mut record = phuket();
        assert_eq!(record.budget_label(), "$1200 USD");
        record.minimum_budget = 899.5;
        assert_eq!(record.budget_label(), "$899.50 USD");
    }

    #[test]
    fn test_record_json_shape() {
        let value = serde_json::to_value(phuket()).unwrap();
        assert_eq!(value["destination"], "Phuket");
        assert_eq!(value["visa_status"], "visa_on_arrival");
        assert_eq!(value["minimum_budget"], 1200.0);
    }
}
