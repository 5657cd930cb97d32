//! SHOPPING: CLOTHING AND ELECTRONICS
//!
//! Clothing purchases are split into new and second-hand garments by the
//! second-hand share; electronics are costed per device. The kg total is
//! converted to tons and then reduced by the sustainable-choice multiplier.

use crate::emission_model::{EmissionModel, KG_PER_TON};
use crate::survey::ShoppingSurvey;
use serde::{Deserialize, Serialize};

/// Result of the shopping calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingResult {
    pub clothing_items: f64,
    pub new_clothing_items: f64,
    pub second_hand_items: f64,
    pub electronics_items: f64,
    /// kg before the sustainable-choice reduction
    pub purchases_kg: f64,
    pub sustainable_multiplier: f64,
    /// Sub-total, tons CO2/year
    pub tons: f64,
}

/// Calculate shopping emissions
pub fn calculate_shopping(survey: &ShoppingSurvey, model: &EmissionModel) -> ShoppingResult {
    let factors = &model.shopping;

    let clothing_items = model.clothing_items_per_year(survey.clothing_purchase_frequency);
    let second_hand_share = survey.second_hand_percent / 100.0;
    let new_clothing_items = clothing_items * (1.0 - second_hand_share);
    let second_hand_items = clothing_items * second_hand_share;
    let electronics_items = model.electronics_items_per_year(survey.electronics_replacement_frequency);

    let purchases_kg = new_clothing_items * factors.new_garment
        + second_hand_items * factors.second_hand_garment
        + electronics_items * factors.electronics_device;

    let sustainable_multiplier =
        1.0 - survey.sustainable_choice_percent / 100.0 * factors.max_sustainable_reduction;

    ShoppingResult {
        clothing_items,
        new_clothing_items,
        second_hand_items,
        electronics_items,
        purchases_kg,
        sustainable_multiplier,
        tons: purchases_kg / KG_PER_TON * sustainable_multiplier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::{ClothingFrequency, ElectronicsFrequency};
    use approx::assert_relative_eq;

    #[test]
    fn test_weekly_new_clothing_yearly_electronics() {
        let input = ShoppingSurvey {
            clothing_purchase_frequency: ClothingFrequency::Weekly,
            electronics_replacement_frequency: ElectronicsFrequency::Yearly,
            sustainable_choice_percent: 0.0,
            second_hand_percent: 0.0,
        };
        let result = calculate_shopping(&input, &EmissionModel::STANDARD);

        // 52 × 33.4 + 1 × 300 = 2036.8 kg
        assert_relative_eq!(result.purchases_kg, 2036.8, epsilon = 1e-9);
        assert_relative_eq!(result.tons, 2.0368, epsilon = 1e-9);
    }

    #[test]
    fn test_second_hand_split() {
        let input = ShoppingSurvey {
            clothing_purchase_frequency: ClothingFrequency::Monthly,
            electronics_replacement_frequency: ElectronicsFrequency::Rarely,
            sustainable_choice_percent: 0.0,
            second_hand_percent: 50.0,
        };
        let result = calculate_shopping(&input, &EmissionModel::STANDARD);

        assert_eq!(result.new_clothing_items, 6.0);
        assert_eq!(result.second_hand_items, 6.0);
        // 6 × 33.4 + 6 × 6.7 + 0.1 × 300 = 270.6 kg
        assert_relative_eq!(result.purchases_kg, 270.6, epsilon = 1e-9);
    }

    #[test]
    fn test_sustainable_reduction_applies_after_conversion() {
        let input = ShoppingSurvey {
            clothing_purchase_frequency: ClothingFrequency::Yearly,
            electronics_replacement_frequency: ElectronicsFrequency::EveryFiveYears,
            sustainable_choice_percent: 100.0,
            second_hand_percent: 0.0,
        };
        let result = calculate_shopping(&input, &EmissionModel::STANDARD);

        assert_relative_eq!(result.sustainable_multiplier, 0.7, epsilon = 1e-12);
        // (33.4 + 60) / 1000 × 0.7
        assert_relative_eq!(result.tons, 0.06538, epsilon = 1e-9);
    }
}
