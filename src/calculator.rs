//! Footprint Calculator - main coordinator for footprint estimation
//!
//! Runs the five category calculators, aggregates them into a total and
//! derives the rule-based suggestions. Includes both single-survey and
//! parallel (Rayon) batch entry points.
//!
//! The calculation is a pure function of the survey and the emission model:
//! no clock, no randomness, no I/O. Identical input gives bit-identical
//! output, so any number of calls may run concurrently without coordination.

use crate::categories::*;
use crate::emission_model::EmissionModel;
use crate::suggestions::derive_suggestions;
use crate::survey::LifestyleSurvey;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Footprint estimate handed back to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootprintResult {
    /// `max(0, sum of breakdown)`
    #[serde(rename = "totalTonsCO2PerYear")]
    pub total_tons_co2_per_year: f64,
    /// Raw, unclamped sub-totals
    #[serde(rename = "breakdownTonsCO2PerYear")]
    pub breakdown: CategoryBreakdown,
    /// At most five, in rule order
    pub suggestions: Vec<String>,
}

/// Footprint result plus every intermediate value behind it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FootprintReport {
    pub result: FootprintResult,
    pub transportation: TransportationResult,
    pub energy: EnergyResult,
    pub food: FoodResult,
    pub shopping: ShoppingResult,
    pub waste: WasteResult,
    /// The survey the report was computed from
    pub survey: LifestyleSurvey,
}

/// Footprint calculator bound to an emission model
#[derive(Debug, Clone, Default)]
pub struct FootprintCalculator {
    model: EmissionModel,
}

impl FootprintCalculator {
    /// Calculator using the standard emission factors
    pub fn new() -> Self {
        Self {
            model: EmissionModel::STANDARD,
        }
    }

    /// Calculator using a recalibrated model
    pub fn with_model(model: EmissionModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &EmissionModel {
        &self.model
    }

    /// Calculate a footprint estimate
    pub fn calculate(&self, survey: &LifestyleSurvey) -> FootprintResult {
        let breakdown = CategoryBreakdown {
            transportation: calculate_transportation(&survey.transportation, &self.model).tons,
            energy: calculate_energy(&survey.energy, &self.model).tons,
            food: calculate_food(&survey.food, &self.model).tons,
            shopping: calculate_shopping(&survey.shopping, &self.model).tons,
            waste: calculate_waste(&survey.waste, &self.model).tons,
        };

        Self::finish(survey, breakdown)
    }

    /// Calculate with all intermediate values retained
    pub fn calculate_detailed(&self, survey: &LifestyleSurvey) -> FootprintReport {
        let transportation = calculate_transportation(&survey.transportation, &self.model);
        let energy = calculate_energy(&survey.energy, &self.model);
        let food = calculate_food(&survey.food, &self.model);
        let shopping = calculate_shopping(&survey.shopping, &self.model);
        let waste = calculate_waste(&survey.waste, &self.model);

        let breakdown = CategoryBreakdown {
            transportation: transportation.tons,
            energy: energy.tons,
            food: food.tons,
            shopping: shopping.tons,
            waste: waste.tons,
        };

        FootprintReport {
            result: Self::finish(survey, breakdown),
            transportation,
            energy,
            food,
            shopping,
            waste,
            survey: survey.clone(),
        }
    }

    /// Calculate many surveys in parallel, preserving input order
    pub fn calculate_batch(&self, surveys: &[LifestyleSurvey]) -> Vec<FootprintResult> {
        tracing::debug!("Calculating batch of {} surveys", surveys.len());
        surveys.par_iter().map(|survey| self.calculate(survey)).collect()
    }

    fn finish(survey: &LifestyleSurvey, breakdown: CategoryBreakdown) -> FootprintResult {
        // Floor applies to the total only; waste stays negative in the breakdown
        let total = breakdown.sum().max(0.0);
        let suggestions = derive_suggestions(survey, &breakdown);

        tracing::debug!(
            "Footprint total={:.3}t (transportation={:.3}, energy={:.3}, food={:.3}, shopping={:.3}, waste={:.3}), {} suggestions",
            total,
            breakdown.transportation,
            breakdown.energy,
            breakdown.food,
            breakdown.shopping,
            breakdown.waste,
            suggestions.len(),
        );

        FootprintResult {
            total_tons_co2_per_year: total,
            breakdown,
            suggestions,
        }
    }
}

/// Calculate a footprint with the standard emission factors
pub fn calculate_footprint(survey: &LifestyleSurvey) -> FootprintResult {
    FootprintCalculator::new().calculate(survey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::*;
    use approx::assert_relative_eq;

    fn typical_survey() -> LifestyleSurvey {
        LifestyleSurvey {
            transportation: TransportationSurvey {
                car_miles_per_week: 150.0,
                car_type: CarType::Gasoline,
                public_transport_hours_per_week: 2.0,
                flight_hours_per_year: 12.0,
                active_transport_hours_per_week: 1.0,
            },
            energy: EnergySurvey {
                home_size: HomeSize::Large,
                monthly_electricity_bill: 120.0,
                heating_type: HeatingType::Gas,
                cooling_hours_per_day_summer: 3.0,
                uses_renewable_energy: false,
            },
            food: FoodSurvey {
                diet_type: DietType::Omnivore,
                meat_meals_per_week: 12.0,
                local_food_percent: 20.0,
                food_waste_percent: 15.0,
                organic_percent: 10.0,
            },
            shopping: ShoppingSurvey {
                clothing_purchase_frequency: ClothingFrequency::Monthly,
                electronics_replacement_frequency: ElectronicsFrequency::EveryTwoYears,
                sustainable_choice_percent: 20.0,
                second_hand_percent: 10.0,
            },
            waste: WasteSurvey {
                recycling_percent: 40.0,
                composts: false,
                waste_reduction_percent: 10.0,
            },
        }
    }

    #[test]
    fn test_detailed_matches_plain() {
        let calculator = FootprintCalculator::new();
        let survey = typical_survey();

        let plain = calculator.calculate(&survey);
        let detailed = calculator.calculate_detailed(&survey);

        assert_eq!(plain, detailed.result);
        assert_eq!(detailed.transportation.tons, plain.breakdown.transportation);
        assert_eq!(detailed.waste.tons, plain.breakdown.waste);
        assert_eq!(detailed.survey, survey);
    }

    #[test]
    fn test_total_is_sum_of_breakdown() {
        let result = calculate_footprint(&typical_survey());
        assert_eq!(result.total_tons_co2_per_year, result.breakdown.sum().max(0.0));
        assert!(result.suggestions.len() <= 5);
    }

    #[test]
    fn test_total_floors_at_zero() {
        // Zeroed wood and purchase factors leave only the waste credit
        let mut survey = LifestyleSurvey::default();
        survey.energy.home_size = HomeSize::Small;
        survey.energy.heating_type = HeatingType::Wood;
        survey.shopping.clothing_purchase_frequency = ClothingFrequency::Rarely;
        survey.shopping.electronics_replacement_frequency = ElectronicsFrequency::Rarely;
        survey.shopping.second_hand_percent = 100.0;
        survey.shopping.sustainable_choice_percent = 100.0;
        survey.waste.recycling_percent = 100.0;
        survey.waste.composts = true;

        let model = EmissionModel {
            energy: crate::emission_model::EnergyFactors {
                wood: 0.0,
                ..EmissionModel::STANDARD.energy
            },
            shopping: crate::emission_model::ShoppingFactors {
                electronics_device: 0.0,
                second_hand_garment: 0.0,
                ..EmissionModel::STANDARD.shopping
            },
            ..EmissionModel::STANDARD
        };

        let result = FootprintCalculator::with_model(model).calculate(&survey);
        assert_relative_eq!(result.breakdown.waste, -0.064, epsilon = 1e-12);
        assert!(result.breakdown.sum() < 0.0);
        assert_eq!(result.total_tons_co2_per_year, 0.0);
    }

    #[test]
    fn test_batch_preserves_order() {
        let calculator = FootprintCalculator::new();
        let mut light = typical_survey();
        light.transportation.car_miles_per_week = 0.0;
        let surveys = vec![typical_survey(), light.clone(), typical_survey()];

        let results = calculator.calculate_batch(&surveys);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0], calculator.calculate(&surveys[0]));
        assert_eq!(results[1], calculator.calculate(&light));
        assert!(results[1].total_tons_co2_per_year < results[0].total_tons_co2_per_year);
    }

    #[test]
    fn test_result_json_field_names() {
        let json = serde_json::to_value(calculate_footprint(&typical_survey())).unwrap();
        assert!(json["totalTonsCO2PerYear"].is_number());
        assert!(json["breakdownTonsCO2PerYear"]["waste"].is_number());
        assert!(json["suggestions"].is_array());
    }
}
