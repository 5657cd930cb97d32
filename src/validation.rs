//! Survey validation at the system boundary
//!
//! The calculator itself is total and accepts any numbers. Callers that
//! take survey data from users run it through here first, either rejecting
//! (`validate_survey`) or clamping (`clamp_survey`). Results computed from
//! huge but finite inputs can still overflow, so `check_result` guards the
//! way back out.

use crate::calculator::FootprintResult;
use crate::categories::Category;
use crate::survey::LifestyleSurvey;
use serde::Serialize;
use thiserror::Error;

/// A single field that failed validation
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldError {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} overflowed to a non-finite value for these inputs")]
    NonFiniteResult { field: &'static str },
}

/// All problems found in one survey
#[derive(Debug, Clone, PartialEq, Error)]
#[error("survey failed validation with {} problem(s)", .0.len())]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }
}

#[derive(Debug, Clone, Copy)]
enum Bound {
    NonNegative,
    Range(f64, f64),
}

const PERCENT: Bound = Bound::Range(0.0, 100.0);
const HOURS_PER_DAY: Bound = Bound::Range(0.0, 24.0);

/// (field name, value, bound) for every numeric survey field, in survey order
fn numeric_fields(survey: &LifestyleSurvey) -> [(&'static str, f64, Bound); 14] {
    let t = &survey.transportation;
    let e = &survey.energy;
    let f = &survey.food;
    let s = &survey.shopping;
    let w = &survey.waste;

    [
        ("transportation.carMilesPerWeek", t.car_miles_per_week, Bound::NonNegative),
        ("transportation.publicTransportHoursPerWeek", t.public_transport_hours_per_week, Bound::NonNegative),
        ("transportation.flightHoursPerYear", t.flight_hours_per_year, Bound::NonNegative),
        ("transportation.activeTransportHoursPerWeek", t.active_transport_hours_per_week, Bound::NonNegative),
        ("energy.monthlyElectricityBill", e.monthly_electricity_bill, Bound::NonNegative),
        ("energy.coolingHoursPerDaySummer", e.cooling_hours_per_day_summer, HOURS_PER_DAY),
        ("food.meatMealsPerWeek", f.meat_meals_per_week, Bound::NonNegative),
        ("food.localFoodPercent", f.local_food_percent, PERCENT),
        ("food.foodWastePercent", f.food_waste_percent, PERCENT),
        ("food.organicPercent", f.organic_percent, PERCENT),
        ("shopping.sustainableChoicePercent", s.sustainable_choice_percent, PERCENT),
        ("shopping.secondHandPercent", s.second_hand_percent, PERCENT),
        ("waste.recyclingPercent", w.recycling_percent, PERCENT),
        ("waste.wasteReductionPercent", w.waste_reduction_percent, PERCENT),
    ]
}

fn check(field: &'static str, value: f64, bound: Bound) -> Option<FieldError> {
    if !value.is_finite() {
        return Some(FieldError::NotFinite { field });
    }
    match bound {
        Bound::NonNegative if value < 0.0 => Some(FieldError::Negative { field, value }),
        Bound::Range(min, max) if value < min || value > max => {
            Some(FieldError::OutOfRange { field, value, min, max })
        }
        _ => None,
    }
}

fn clamp_value(value: f64, bound: Bound) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    match bound {
        Bound::NonNegative => value.max(0.0),
        Bound::Range(min, max) => value.clamp(min, max),
    }
}

/// Check every numeric field against its declared range
///
/// Collects all problems rather than stopping at the first.
pub fn validate_survey(survey: &LifestyleSurvey) -> Result<(), ValidationErrors> {
    let errors: Vec<FieldError> = numeric_fields(survey)
        .into_iter()
        .filter_map(|(field, value, bound)| check(field, value, bound))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

fn result_field(category: Category) -> &'static str {
    match category {
        Category::Transportation => "breakdownTonsCO2PerYear.transportation",
        Category::Energy => "breakdownTonsCO2PerYear.energy",
        Category::Food => "breakdownTonsCO2PerYear.food",
        Category::Shopping => "breakdownTonsCO2PerYear.shopping",
        Category::Waste => "breakdownTonsCO2PerYear.waste",
    }
}

/// Reject a result whose total or sub-totals are not finite
///
/// JSON has no encoding for inf/NaN, so such a result cannot be returned
/// or stored.
pub fn check_result(result: &FootprintResult) -> Result<(), ValidationErrors> {
    let mut errors: Vec<FieldError> = result
        .breakdown
        .iter()
        .filter(|(_, tons)| !tons.is_finite())
        .map(|(category, _)| FieldError::NonFiniteResult {
            field: result_field(category),
        })
        .collect();

    if !result.total_tons_co2_per_year.is_finite() {
        errors.push(FieldError::NonFiniteResult {
            field: "totalTonsCO2PerYear",
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

/// Copy of the survey with every numeric field forced into range.
/// Non-finite values become 0.
pub fn clamp_survey(survey: &LifestyleSurvey) -> LifestyleSurvey {
    let mut clamped = survey.clone();

    let t = &mut clamped.transportation;
    t.car_miles_per_week = clamp_value(t.car_miles_per_week, Bound::NonNegative);
    t.public_transport_hours_per_week = clamp_value(t.public_transport_hours_per_week, Bound::NonNegative);
    t.flight_hours_per_year = clamp_value(t.flight_hours_per_year, Bound::NonNegative);
    t.active_transport_hours_per_week = clamp_value(t.active_transport_hours_per_week, Bound::NonNegative);

    let e = &mut clamped.energy;
    e.monthly_electricity_bill = clamp_value(e.monthly_electricity_bill, Bound::NonNegative);
    e.cooling_hours_per_day_summer = clamp_value(e.cooling_hours_per_day_summer, HOURS_PER_DAY);

    let f = &mut clamped.food;
    f.meat_meals_per_week = clamp_value(f.meat_meals_per_week, Bound::NonNegative);
    f.local_food_percent = clamp_value(f.local_food_percent, PERCENT);
    f.food_waste_percent = clamp_value(f.food_waste_percent, PERCENT);
    f.organic_percent = clamp_value(f.organic_percent, PERCENT);

    let s = &mut clamped.shopping;
    s.sustainable_choice_percent = clamp_value(s.sustainable_choice_percent, PERCENT);
    s.second_hand_percent = clamp_value(s.second_hand_percent, PERCENT);

    let w = &mut clamped.waste;
    w.recycling_percent = clamp_value(w.recycling_percent, PERCENT);
    w.waste_reduction_percent = clamp_value(w.waste_reduction_percent, PERCENT);

    clamped
}

/// Categorical fields whose label was not recognised.
///
/// Not an error: the emission model falls back to each field's default.
pub fn unrecognized_labels(survey: &LifestyleSurvey) -> Vec<&'static str> {
    let checks = [
        ("transportation.carType", survey.transportation.car_type.is_recognized()),
        ("energy.homeSize", survey.energy.home_size.is_recognized()),
        ("energy.heatingType", survey.energy.heating_type.is_recognized()),
        ("food.dietType", survey.food.diet_type.is_recognized()),
        ("shopping.clothingPurchaseFrequency", survey.shopping.clothing_purchase_frequency.is_recognized()),
        ("shopping.electronicsReplacementFrequency", survey.shopping.electronics_replacement_frequency.is_recognized()),
    ];

    checks
        .into_iter()
        .filter(|(_, recognized)| !recognized)
        .map(|(field, _)| field)
        .collect()
}
