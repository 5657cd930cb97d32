//! HOUSEHOLD WASTE
//!
//! Starts from a 1600 kg/year household baseline reduced by the reported
//! waste-reduction share. Of what remains:
//!   - 30% is recyclable; the recycled part earns −0.5 kg CO2/kg
//!   - 30% is organic; composting it earns −0.3 kg CO2/kg
//!   - everything neither recycled nor composted is landfilled at +0.5 kg CO2/kg
//!
//! The result may be negative (a net credit). It is not clamped here.

use crate::emission_model::{EmissionModel, KG_PER_TON};
use crate::survey::WasteSurvey;
use serde::{Deserialize, Serialize};

/// Result of the waste calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteResult {
    pub actual_waste_kg: f64,
    pub recycled_kg: f64,
    pub recycling_credit_kg: f64,
    /// Organic waste diverted to compost (0 when not composting)
    pub composted_kg: f64,
    pub composting_credit_kg: f64,
    pub landfilled_kg: f64,
    pub landfill_kg: f64,
    /// Sub-total, tons CO2/year. May be negative.
    pub tons: f64,
}

/// Calculate waste emissions
pub fn calculate_waste(survey: &WasteSurvey, model: &EmissionModel) -> WasteResult {
    let factors = &model.waste;

    let actual_waste_kg =
        factors.household_baseline_kg * (1.0 - survey.waste_reduction_percent / 100.0);

    let recyclable_kg = actual_waste_kg * factors.recyclable_share;
    let recycled_kg = survey.recycling_percent / 100.0 * recyclable_kg;
    let recycling_credit_kg = recycled_kg * factors.recycling_credit;

    let organic_kg = actual_waste_kg * factors.organic_share;
    let (composted_kg, composting_credit_kg) = if survey.composts {
        (organic_kg, factors.composting_credit * organic_kg)
    } else {
        (0.0, 0.0)
    };

    let landfilled_kg = actual_waste_kg - recycled_kg - composted_kg;
    let landfill_kg = landfilled_kg * factors.landfill_emission;

    WasteResult {
        actual_waste_kg,
        recycled_kg,
        recycling_credit_kg,
        composted_kg,
        composting_credit_kg,
        landfilled_kg,
        landfill_kg,
        tons: (recycling_credit_kg + composting_credit_kg + landfill_kg) / KG_PER_TON,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_no_recycling_everything_landfilled() {
        let result = calculate_waste(&WasteSurvey::default(), &EmissionModel::STANDARD);

        assert_eq!(result.actual_waste_kg, 1600.0);
        assert_eq!(result.landfilled_kg, 1600.0);
        assert_relative_eq!(result.tons, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_full_recycler_is_net_credit() {
        let input = WasteSurvey {
            recycling_percent: 100.0,
            composts: true,
            waste_reduction_percent: 0.0,
        };
        let result = calculate_waste(&input, &EmissionModel::STANDARD);

        assert_relative_eq!(result.recycled_kg, 480.0, epsilon = 1e-9);
        assert_relative_eq!(result.recycling_credit_kg, -240.0, epsilon = 1e-9);
        assert_relative_eq!(result.composting_credit_kg, -144.0, epsilon = 1e-9);
        assert_relative_eq!(result.landfilled_kg, 640.0, epsilon = 1e-9);
        // −240 − 144 + 320 = −64 kg
        assert_relative_eq!(result.tons, -0.064, epsilon = 1e-12);
    }

    #[test]
    fn test_full_reduction_zeroes_waste() {
        let input = WasteSurvey {
            recycling_percent: 100.0,
            composts: true,
            waste_reduction_percent: 100.0,
        };
        let result = calculate_waste(&input, &EmissionModel::STANDARD);
        assert_eq!(result.actual_waste_kg, 0.0);
        assert_eq!(result.tons, 0.0);
    }

    #[test]
    fn test_composting_only() {
        let input = WasteSurvey {
            recycling_percent: 0.0,
            composts: true,
            waste_reduction_percent: 50.0,
        };
        let result = calculate_waste(&input, &EmissionModel::STANDARD);

        // 800 kg total, 240 kg composted, 560 kg landfilled
        assert_relative_eq!(result.composted_kg, 240.0, epsilon = 1e-9);
        assert_relative_eq!(result.landfilled_kg, 560.0, epsilon = 1e-9);
        // −72 + 280 = 208 kg
        assert_relative_eq!(result.tons, 0.208, epsilon = 1e-12);
    }
}
