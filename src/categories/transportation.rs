//! TRANSPORTATION: CAR, PUBLIC TRANSPORT AND FLIGHTS
//!
//! Converts weekly/annual travel into annual emissions:
//!   - car: miles/week × 52 × car-type factor
//!   - public transport: hours/week × 15 mph × 52 × passenger-mile factor
//!   - flights: hours/year × 500 mph × domestic-flight factor
//!   - walking/cycling: zero
//!
//! Components are summed in kg, then converted to tons.

use crate::emission_model::{EmissionModel, KG_PER_TON, WEEKS_PER_YEAR};
use crate::survey::TransportationSurvey;
use serde::{Deserialize, Serialize};

/// Result of the transportation calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportationResult {
    pub car_kg: f64,
    pub public_transport_kg: f64,
    pub flight_kg: f64,
    /// Sub-total, tons CO2/year
    pub tons: f64,
}

/// Calculate transportation emissions
pub fn calculate_transportation(
    survey: &TransportationSurvey,
    model: &EmissionModel,
) -> TransportationResult {
    let factors = &model.transportation;

    let car_kg = survey.car_miles_per_week * WEEKS_PER_YEAR * model.car_factor(survey.car_type);

    let public_transport_kg = survey.public_transport_hours_per_week
        * factors.public_transport_mph
        * WEEKS_PER_YEAR
        * factors.public_transport;

    let flight_kg = survey.flight_hours_per_year * factors.flight_mph * factors.domestic_flight;

    TransportationResult {
        car_kg,
        public_transport_kg,
        flight_kg,
        tons: (car_kg + public_transport_kg + flight_kg) / KG_PER_TON,
    }
}
