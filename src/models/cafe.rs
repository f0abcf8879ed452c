use serde::{Deserialize, Serialize};

use crate::constants::{COFFEE_CHOICES, POWER_CHOICES, WIFI_CHOICES};

/// One café row as persisted in the "Cafe Data" table
///
/// `cafe_name` and `location` are each unique across the table. There is no
/// surrogate key: the name is what deletion is keyed on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CafeRecord {
    pub cafe_name: String,
    pub location: String,
    pub open_time: String,
    pub close_time: String,
    pub coffee_rating: String,
    pub wifi_rating: String,
    pub power_rating: String,
}

/// A closed set of symbolic rating values
#[derive(Debug, Clone, Copy)]
pub struct RatingScale {
    pub label: &'static str,
    pub choices: &'static [&'static str],
}

impl RatingScale {
    pub const COFFEE: RatingScale = RatingScale {
        label: "Coffee Rating",
        choices: &COFFEE_CHOICES,
    };

    pub const WIFI: RatingScale = RatingScale {
        label: "Wi-Fi Rating",
        choices: &WIFI_CHOICES,
    };

    pub const POWER: RatingScale = RatingScale {
        label: "Power Outlet Rating",
        choices: &POWER_CHOICES,
    };

    /// Exact match only; no trimming or normalisation of emoji sequences.
    pub fn contains(&self, value: &str) -> bool {
        self.choices.contains(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_cardinalities() {
        assert_eq!(RatingScale::COFFEE.choices.len(), 5);
        assert_eq!(RatingScale::WIFI.choices.len(), 6);
        assert_eq!(RatingScale::POWER.choices.len(), 5);
    }

    #[test]
    fn test_contains_is_exact() {
        assert!(RatingScale::COFFEE.contains("☕️☕️☕️"));
        assert!(RatingScale::WIFI.contains("✘"));
        assert!(RatingScale::POWER.contains("🔌"));

        // Bare U+2615 without the variation selector is not a listed choice
        assert!(!RatingScale::COFFEE.contains("\u{2615}"));
        assert!(!RatingScale::WIFI.contains(" 💪"));
        assert!(!RatingScale::POWER.contains("🔌🔌🔌🔌🔌🔌"));
        assert!(!RatingScale::POWER.contains(""));
    }

    #[test]
    fn test_choices_are_ordered_by_level() {
        for scale in [RatingScale::COFFEE, RatingScale::POWER] {
            for (level, choice) in scale.choices.iter().enumerate() {
                let unit = scale.choices[0];
                assert_eq!(*choice, unit.repeat(level + 1));
            }
        }
    }
}
