//! Service categories offered by homeFix.lk.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of bookable service categories.
///
/// The display strings are the exact option labels the booking form
/// submits, so `FromStr` accepts those labels and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceCategory {
    #[serde(rename = "General Maid Service")]
    GeneralMaid,
    #[serde(rename = "Deep Cleaning")]
    DeepCleaning,
    #[serde(rename = "Sofa/Carpet Cleaning")]
    SofaCarpet,
    #[serde(rename = "Move-In/Out")]
    MoveInOut,
    #[serde(rename = "Other")]
    Other,
}

impl ServiceCategory {
    /// All categories, in the order the booking form offers them
    pub const ALL: [ServiceCategory; 5] = [
        ServiceCategory::GeneralMaid,
        ServiceCategory::DeepCleaning,
        ServiceCategory::SofaCarpet,
        ServiceCategory::MoveInOut,
        ServiceCategory::Other,
    ];

    /// The option label shown on the booking form
    pub fn label(&self) -> &'static str {
        match self {
            ServiceCategory::GeneralMaid => "General Maid Service",
            ServiceCategory::DeepCleaning => "Deep Cleaning",
            ServiceCategory::SofaCarpet => "Sofa/Carpet Cleaning",
            ServiceCategory::MoveInOut => "Move-In/Out",
            ServiceCategory::Other => "Other",
        }
    }

    /// Whether this category occupies the entire service day
    pub fn is_full_day(&self) -> bool {
        matches!(self, ServiceCategory::DeepCleaning)
    }

    /// Stable identifier for persistence
    pub fn as_db_str(&self) -> &'static str {
        match self {
            ServiceCategory::GeneralMaid => "general_maid",
            ServiceCategory::DeepCleaning => "deep_cleaning",
            ServiceCategory::SofaCarpet => "sofa_carpet",
            ServiceCategory::MoveInOut => "move_in_out",
            ServiceCategory::Other => "other",
        }
    }

    /// Parse the persistence identifier written by [`as_db_str`](Self::as_db_str)
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "general_maid" => Some(ServiceCategory::GeneralMaid),
            "deep_cleaning" => Some(ServiceCategory::DeepCleaning),
            "sofa_carpet" => Some(ServiceCategory::SofaCarpet),
            "move_in_out" => Some(ServiceCategory::MoveInOut),
            "other" => Some(ServiceCategory::Other),
            _ => None,
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ServiceCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|c| c.label() == s)
            .copied()
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        for category in ServiceCategory::ALL {
            assert_eq!(category.label().parse::<ServiceCategory>(), Ok(category));
        }
    }

    #[test]
    fn test_rejects_unknown_label() {
        assert!("Window Cleaning".parse::<ServiceCategory>().is_err());
        assert!("deep cleaning".parse::<ServiceCategory>().is_err()); // Case matters
        assert!("".parse::<ServiceCategory>().is_err());
    }

    #[test]
    fn test_full_day_flag() {
        assert!(ServiceCategory::DeepCleaning.is_full_day());
        assert!(!ServiceCategory::GeneralMaid.is_full_day());
        assert!(!ServiceCategory::Other.is_full_day());
    }

    #[test]
    fn test_db_str_round_trip() {
        for category in ServiceCategory::ALL {
            assert_eq!(
                ServiceCategory::from_db_str(category.as_db_str()),
                Some(category)
            );
        }
        assert_eq!(ServiceCategory::from_db_str("unknown"), None);
    }
}
