//! Rule-based improvement suggestions
//!
//! Deterministic fallback advice derived from the breakdown. A rule fires
//! when its category sub-total exceeds the category threshold AND its own
//! trigger condition holds against the survey. Rules are evaluated in table
//! order (category order, then listed order) and the output is truncated to
//! `MAX_SUGGESTIONS` without reordering.

use crate::categories::{Category, CategoryBreakdown};
use crate::survey::{CarType, LifestyleSurvey};

pub const MAX_SUGGESTIONS: usize = 5;

/// A single suggestion rule
#[derive(Debug)]
pub struct SuggestionRule {
    /// Stable identifier, e.g. `reduce_driving`
    pub code: &'static str,
    pub category: Category,
    pub message: &'static str,
    trigger: fn(&LifestyleSurvey) -> bool,
}

impl SuggestionRule {
    pub fn applies(&self, survey: &LifestyleSurvey, breakdown: &CategoryBreakdown) -> bool {
        breakdown.exceeds_threshold(self.category) && (self.trigger)(survey)
    }
}

pub static SUGGESTION_RULES: &[SuggestionRule] = &[
    SuggestionRule {
        code: "reduce_driving",
        category: Category::Transportation,
        message: "Reduce how much you drive: combine errands, carpool, or replace short car trips with walking, cycling, or public transport.",
        trigger: |s| s.transportation.car_miles_per_week > 100.0,
    },
    SuggestionRule {
        code: "switch_to_ev",
        category: Category::Transportation,
        message: "Consider an electric or hybrid vehicle for your next car to cut per-mile emissions substantially.",
        trigger: |s| matches!(s.transportation.car_type, CarType::Gasoline | CarType::Diesel),
    },
    SuggestionRule {
        code: "switch_to_renewables",
        category: Category::Energy,
        message: "Switch to a renewable electricity tariff or install solar panels to cut the emissions from your home energy.",
        trigger: |s| !s.energy.uses_renewable_energy,
    },
    SuggestionRule {
        code: "reduce_meat",
        category: Category::Food,
        message: "Try replacing a few meat meals each week with plant-based alternatives.",
        trigger: |s| s.food.meat_meals_per_week > 10.0,
    },
    SuggestionRule {
        code: "buy_local",
        category: Category::Food,
        message: "Buy more locally produced, seasonal food to reduce transport and storage emissions.",
        trigger: |s| s.food.local_food_percent < 30.0,
    },
    SuggestionRule {
        code: "buy_second_hand",
        category: Category::Shopping,
        message: "Choose second-hand clothing and refurbished electronics to avoid the emissions of new production.",
        trigger: |s| s.shopping.second_hand_percent < 30.0,
    },
    SuggestionRule {
        code: "recycle_more",
        category: Category::Waste,
        message: "Recycle more of your household waste. Aim for at least 70% of recyclable materials.",
        trigger: |s| s.waste.recycling_percent < 70.0,
    },
    SuggestionRule {
        code: "start_composting",
        category: Category::Waste,
        message: "Start composting food and garden scraps to keep organic waste out of landfill.",
        trigger: |s| !s.waste.composts,
    },
];

/// Matching rules, in evaluation order, at most `MAX_SUGGESTIONS`
pub fn derive_suggestion_rules(
    survey: &LifestyleSurvey,
    breakdown: &CategoryBreakdown,
) -> Vec<&'static SuggestionRule> {
    SUGGESTION_RULES
        .iter()
        .filter(|rule| rule.applies(survey, breakdown))
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Suggestion messages for a calculated breakdown
pub fn derive_suggestions(survey: &LifestyleSurvey, breakdown: &CategoryBreakdown) -> Vec<String> {
    derive_suggestion_rules(survey, breakdown)
        .into_iter()
        .map(|rule| rule.message.to_string())
        .collect()
}

/// Look up a rule by its code
pub fn rule_by_code(code: &str) -> Option<&'static SuggestionRule> {
    SUGGESTION_RULES.iter().find(|rule| rule.code == code)
}

/// Look up the rule that produced a suggestion message
pub fn rule_for_message(message: &str) -> Option<&'static SuggestionRule> {
    SUGGESTION_RULES.iter().find(|rule| rule.message == message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn high_everything() -> CategoryBreakdown {
        CategoryBreakdown {
            transportation: 5.0,
            energy: 5.0,
            food: 5.0,
            shopping: 5.0,
            waste: 1.0,
        }
    }

    fn triggering_survey() -> LifestyleSurvey {
        let mut survey = LifestyleSurvey::default();
        survey.transportation.car_miles_per_week = 250.0;
        survey.transportation.car_type = CarType::Diesel;
        survey.food.meat_meals_per_week = 14.0;
        survey
    }

    #[test]
    fn test_rules_are_in_category_order() {
        let mut last = 0;
        for rule in SUGGESTION_RULES {
            let idx = Category::ALL.iter().position(|c| *c == rule.category).unwrap();
            assert!(idx >= last, "{} out of order", rule.code);
            last = idx;
        }
    }

    #[test]
    fn test_cap_truncates_in_order() {
        let rules = derive_suggestion_rules(&triggering_survey(), &high_everything());
        let codes: Vec<&str> = rules.iter().map(|r| r.code).collect();

        // All 8 rules trigger; the first five survive
        assert_eq!(
            codes,
            vec!["reduce_driving", "switch_to_ev", "switch_to_renewables", "reduce_meat", "buy_local"]
        );
    }

    #[test]
    fn test_below_thresholds_gives_nothing() {
        let breakdown = CategoryBreakdown {
            transportation: 2.0,
            energy: 1.9,
            food: 0.5,
            shopping: 1.0,
            waste: 0.0,
        };
        assert!(derive_suggestions(&triggering_survey(), &breakdown).is_empty());
    }

    #[test]
    fn test_triggers_checked_against_survey() {
        let mut survey = LifestyleSurvey::default();
        survey.transportation.car_miles_per_week = 100.0; // not > 100
        survey.transportation.car_type = CarType::Electric;
        survey.energy.uses_renewable_energy = true;
        survey.food.local_food_percent = 30.0; // not < 30
        survey.shopping.second_hand_percent = 30.0;
        survey.waste.recycling_percent = 70.0;
        survey.waste.composts = true;

        assert!(derive_suggestions(&survey, &high_everything()).is_empty());
    }

    #[test]
    fn test_unrecognized_car_does_not_suggest_ev() {
        let mut survey = LifestyleSurvey::default();
        survey.transportation.car_type = CarType::Unrecognized;
        let breakdown = CategoryBreakdown {
            transportation: 3.0,
            ..Default::default()
        };

        let rules = derive_suggestion_rules(&survey, &breakdown);
        assert!(rules.iter().all(|r| r.code != "switch_to_ev"));
    }

    #[test]
    fn test_lookup_helpers() {
        let rule = rule_by_code("start_composting").unwrap();
        assert_eq!(rule.category, Category::Waste);
        assert_eq!(rule_for_message(rule.message).unwrap().code, "start_composting");
        assert!(rule_by_code("plant_trees").is_none());
    }
}
