//! FOOD & DIET
//!
//! Starts from the diet-type annual baseline (already in tons), scaled by
//! reported meat intake relative to a 10 meals/week reference, then
//! composes three multipliers in order: local, organic, food waste.

use crate::emission_model::EmissionModel;
use crate::survey::FoodSurvey;
use serde::{Deserialize, Serialize};

/// Result of the food calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodResult {
    pub baseline_tons: f64,
    pub meat_ratio: f64,
    pub local_multiplier: f64,
    pub organic_multiplier: f64,
    pub waste_multiplier: f64,
    /// Sub-total, tons CO2/year
    pub tons: f64,
}

/// Calculate food emissions
pub fn calculate_food(survey: &FoodSurvey, model: &EmissionModel) -> FoodResult {
    let factors = &model.food;

    let baseline_tons = model.diet_baseline(survey.diet_type);
    let meat_ratio = survey.meat_meals_per_week / factors.reference_meat_meals_per_week;
    let local_multiplier = 1.0 - survey.local_food_percent / 100.0 * factors.max_local_reduction;
    let organic_multiplier = 1.0 - survey.organic_percent / 100.0 * factors.max_organic_reduction;
    let waste_multiplier = 1.0 + survey.food_waste_percent / 100.0 * factors.max_waste_increase;

    let tons = baseline_tons * meat_ratio * local_multiplier * organic_multiplier * waste_multiplier;

    FoodResult {
        baseline_tons,
        meat_ratio,
        local_multiplier,
        organic_multiplier,
        waste_multiplier,
        tons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::DietType;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_omnivore() {
        let input = FoodSurvey {
            diet_type: DietType::Omnivore,
            meat_meals_per_week: 10.0,
            ..Default::default()
        };
        let result = calculate_food(&input, &EmissionModel::STANDARD);
        assert_relative_eq!(result.tons, 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_meat_meals_zeroes_baseline() {
        let input = FoodSurvey {
            diet_type: DietType::Vegan,
            meat_meals_per_week: 0.0,
            ..Default::default()
        };
        let result = calculate_food(&input, &EmissionModel::STANDARD);
        assert_eq!(result.baseline_tons, 1.5);
        assert_eq!(result.meat_ratio, 0.0);
        assert_eq!(result.tons, 0.0);
    }

    #[test]
    fn test_multipliers_at_extremes() {
        let input = FoodSurvey {
            diet_type: DietType::HighMeat,
            meat_meals_per_week: 20.0,
            local_food_percent: 100.0,
            food_waste_percent: 100.0,
            organic_percent: 100.0,
        };
        let result = calculate_food(&input, &EmissionModel::STANDARD);

        assert_relative_eq!(result.local_multiplier, 0.85, epsilon = 1e-12);
        assert_relative_eq!(result.organic_multiplier, 0.95, epsilon = 1e-12);
        assert_relative_eq!(result.waste_multiplier, 1.3, epsilon = 1e-12);
        // 3.3 × 2 × 0.85 × 0.95 × 1.3
        assert_relative_eq!(result.tons, 6.92835, epsilon = 1e-9);
    }

    #[test]
    fn test_unrecognized_diet_uses_omnivore() {
        let input = FoodSurvey {
            diet_type: DietType::Unrecognized,
            meat_meals_per_week: 10.0,
            ..Default::default()
        };
        let result = calculate_food(&input, &EmissionModel::STANDARD);
        assert_eq!(result.baseline_tons, 2.5);
    }
}
