//! HOME ENERGY: ELECTRICITY, HEATING AND COOLING
//!
//! The home-size multiplier scales electricity and heating (not cooling).
//!
//!   - electricity kWh = monthly bill × 12 × 10 kWh/unit × size
//!   - heating kWh = 5000 kWh × size, priced at the heating-type factor
//!   - cooling kWh = hours/day × 120 days × 3 kW
//!
//! Electricity and cooling use the renewable factor when the household buys
//! renewable power, otherwise the grid average.

use crate::emission_model::{EmissionModel, KG_PER_TON, MONTHS_PER_YEAR};
use crate::survey::EnergySurvey;
use serde::{Deserialize, Serialize};

/// Result of the energy calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyResult {
    pub size_multiplier: f64,
    /// kg CO2 per kWh applied to electricity and cooling
    pub electricity_factor: f64,
    pub heating_factor: f64,
    pub electricity_kwh: f64,
    pub electricity_kg: f64,
    pub heating_kg: f64,
    pub cooling_kg: f64,
    /// Sub-total, tons CO2/year
    pub tons: f64,
}

/// Calculate home energy emissions
pub fn calculate_energy(survey: &EnergySurvey, model: &EmissionModel) -> EnergyResult {
    let factors = &model.energy;
    let size_multiplier = model.size_multiplier(survey.home_size);
    let electricity_factor = model.electricity_factor(survey.uses_renewable_energy);
    let heating_factor = model.heating_factor(survey.heating_type, electricity_factor);

    let electricity_kwh = survey.monthly_electricity_bill
        * MONTHS_PER_YEAR
        * factors.kwh_per_currency_unit
        * size_multiplier;
    let electricity_kg = electricity_kwh * electricity_factor;

    let heating_kg = factors.heating_baseline_kwh * size_multiplier * heating_factor;

    let cooling_kg = survey.cooling_hours_per_day_summer
        * factors.cooling_days
        * factors.ac_draw_kw
        * electricity_factor;

    EnergyResult {
        size_multiplier,
        electricity_factor,
        heating_factor,
        electricity_kwh,
        electricity_kg,
        heating_kg,
        cooling_kg,
        tons: (electricity_kg + heating_kg + cooling_kg) / KG_PER_TON,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::{HeatingType, HomeSize};
    use approx::assert_relative_eq;

    fn household(renewable: bool) -> EnergySurvey {
        EnergySurvey {
            home_size: HomeSize::Medium,
            monthly_electricity_bill: 100.0,
            heating_type: HeatingType::HeatPump,
            cooling_hours_per_day_summer: 0.0,
            uses_renewable_energy: renewable,
        }
    }

    #[test]
    fn test_renewable_household() {
        let result = calculate_energy(&household(true), &EmissionModel::STANDARD);

        // 100 × 12 × 10 = 12000 kWh × 0.02 = 240 kg
        assert_relative_eq!(result.electricity_kwh, 12000.0, epsilon = 1e-9);
        assert_relative_eq!(result.electricity_kg, 240.0, epsilon = 1e-9);
        // 5000 × 1.0 × 0.193 = 965 kg
        assert_relative_eq!(result.heating_kg, 965.0, epsilon = 1e-9);
        assert_relative_eq!(result.tons, 1.205, epsilon = 1e-9);
    }

    #[test]
    fn test_grid_household_is_higher() {
        let renewable = calculate_energy(&household(true), &EmissionModel::STANDARD);
        let grid = calculate_energy(&household(false), &EmissionModel::STANDARD);

        // 12000 × 0.386 = 4632 kg + 965 kg heating
        assert_relative_eq!(grid.tons, 5.597, epsilon = 1e-9);
        assert!(grid.tons > renewable.tons * 4.0);
    }

    #[test]
    fn test_size_scales_electricity_and_heating_only() {
        let input = EnergySurvey {
            home_size: HomeSize::VeryLarge,
            monthly_electricity_bill: 50.0,
            heating_type: HeatingType::Oil,
            cooling_hours_per_day_summer: 4.0,
            uses_renewable_energy: false,
        };
        let result = calculate_energy(&input, &EmissionModel::STANDARD);

        assert_eq!(result.size_multiplier, 2.0);
        // 50 × 12 × 10 × 2 = 12000 kWh
        assert_relative_eq!(result.electricity_kwh, 12000.0, epsilon = 1e-9);
        // 5000 × 2 × 0.264 = 2640 kg
        assert_relative_eq!(result.heating_kg, 2640.0, epsilon = 1e-9);
        // 4 × 120 × 3 × 0.386 = 555.84 kg, unaffected by size
        assert_relative_eq!(result.cooling_kg, 555.84, epsilon = 1e-9);
    }

    #[test]
    fn test_electric_heating_with_renewables() {
        let input = EnergySurvey {
            heating_type: HeatingType::Electric,
            uses_renewable_energy: true,
            ..Default::default()
        };
        let result = calculate_energy(&input, &EmissionModel::STANDARD);

        assert_eq!(result.heating_factor, 0.02);
        assert_relative_eq!(result.heating_kg, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_heating_baseline_with_no_bill() {
        // Heating is an assumed baseline, present even with zero inputs
        let result = calculate_energy(&EnergySurvey::default(), &EmissionModel::STANDARD);
        assert_relative_eq!(result.tons, 1.01, epsilon = 1e-9);
    }
}
