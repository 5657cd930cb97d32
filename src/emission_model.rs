//! Emission Model
//!
//! Emission factors and fixed modelling assumptions used by every category
//! calculation. Pure data plus enum-keyed lookups.
//!
//! Units:
//!   - transportation: kg CO2 per mile (public transport and flights per passenger-mile)
//!   - energy: kg CO2 per kWh
//!   - food: tons CO2 per year (diet baselines)
//!   - shopping: kg CO2 per item
//!   - waste: kg CO2 per kg of waste handled
//!
//! `EmissionModel::STANDARD` reproduces the published factor set. A JSON
//! override can be loaded for recalibration experiments; without one every
//! result stays compatible with the standard factors.

use crate::survey::{CarType, ClothingFrequency, DietType, ElectronicsFrequency, HeatingType, HomeSize};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// STANDARD FACTORS
// ============================================================================

pub const GASOLINE_CAR_KG_PER_MILE: f64 = 0.404;
pub const HYBRID_CAR_KG_PER_MILE: f64 = 0.250;
pub const ELECTRIC_CAR_KG_PER_MILE: f64 = 0.150;
pub const DIESEL_CAR_KG_PER_MILE: f64 = 0.450;
pub const PUBLIC_TRANSPORT_KG_PER_MILE: f64 = 0.089;
pub const DOMESTIC_FLIGHT_KG_PER_MILE: f64 = 0.255;

pub const GRID_ELECTRICITY_KG_PER_KWH: f64 = 0.386;
pub const NATURAL_GAS_KG_PER_KWH: f64 = 0.202;
pub const HEATING_OIL_KG_PER_KWH: f64 = 0.264;
pub const HEAT_PUMP_KG_PER_KWH: f64 = 0.193;
pub const WOOD_KG_PER_KWH: f64 = 0.018;
pub const RENEWABLE_KG_PER_KWH: f64 = 0.02;

pub const VEGAN_TONS_PER_YEAR: f64 = 1.5;
pub const VEGETARIAN_TONS_PER_YEAR: f64 = 1.7;
pub const PESCATARIAN_TONS_PER_YEAR: f64 = 2.3;
pub const OMNIVORE_TONS_PER_YEAR: f64 = 2.5;
pub const HIGH_MEAT_TONS_PER_YEAR: f64 = 3.3;

pub const NEW_GARMENT_KG: f64 = 33.4;
pub const SECOND_HAND_GARMENT_KG: f64 = 6.7;
pub const ELECTRONICS_DEVICE_KG: f64 = 300.0;

pub const HOUSEHOLD_WASTE_KG_PER_YEAR: f64 = 1600.0;
pub const RECYCLING_CREDIT_KG_PER_KG: f64 = -0.5;
pub const COMPOSTING_CREDIT_KG_PER_KG: f64 = -0.3;
pub const LANDFILL_KG_PER_KG: f64 = 0.5;
pub const RECYCLABLE_SHARE: f64 = 0.3;
pub const ORGANIC_SHARE: f64 = 0.3;

// Fixed assumptions. Uncalibrated approximations with no regional or
// currency sensitivity; kept literally for output compatibility.
pub const PUBLIC_TRANSPORT_MPH: f64 = 15.0;
pub const FLIGHT_MPH: f64 = 500.0;
pub const KWH_PER_CURRENCY_UNIT: f64 = 10.0;
pub const HEATING_BASELINE_KWH: f64 = 5000.0;
pub const COOLING_DAYS_PER_YEAR: f64 = 120.0;
pub const AC_DRAW_KW: f64 = 3.0;
pub const REFERENCE_MEAT_MEALS_PER_WEEK: f64 = 10.0;

// Home-size multipliers (electricity and heating)
pub const SMALL_HOME_MULTIPLIER: f64 = 0.7;
pub const MEDIUM_HOME_MULTIPLIER: f64 = 1.0;
pub const LARGE_HOME_MULTIPLIER: f64 = 1.5;
pub const VERY_LARGE_HOME_MULTIPLIER: f64 = 2.0;

// Purchases per year
pub const WEEKLY_CLOTHING_ITEMS: f64 = 52.0;
pub const MONTHLY_CLOTHING_ITEMS: f64 = 12.0;
pub const QUARTERLY_CLOTHING_ITEMS: f64 = 4.0;
pub const YEARLY_CLOTHING_ITEMS: f64 = 1.0;
pub const RARE_CLOTHING_ITEMS: f64 = 0.5;

pub const YEARLY_ELECTRONICS_ITEMS: f64 = 1.0;
pub const EVERY_TWO_YEARS_ELECTRONICS_ITEMS: f64 = 0.5;
pub const EVERY_THREE_YEARS_ELECTRONICS_ITEMS: f64 = 0.33;
pub const EVERY_FIVE_YEARS_ELECTRONICS_ITEMS: f64 = 0.2;
pub const RARE_ELECTRONICS_ITEMS: f64 = 0.1;

// Adjustment ceilings, reached at 100%
pub const MAX_LOCAL_FOOD_REDUCTION: f64 = 0.15;
pub const MAX_ORGANIC_FOOD_REDUCTION: f64 = 0.05;
pub const MAX_FOOD_WASTE_INCREASE: f64 = 0.3;
pub const MAX_SUSTAINABLE_CHOICE_REDUCTION: f64 = 0.3;

pub const WEEKS_PER_YEAR: f64 = 52.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;
pub const KG_PER_TON: f64 = 1000.0;

// ============================================================================
// MODEL
// ============================================================================

/// Transportation factors and assumed speeds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportationFactors {
    pub gasoline_car: f64,
    pub hybrid_car: f64,
    pub electric_car: f64,
    pub diesel_car: f64,
    pub public_transport: f64,
    pub domestic_flight: f64,
    pub public_transport_mph: f64,
    pub flight_mph: f64,
}

/// Energy factors and household assumptions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyFactors {
    pub grid_electricity: f64,
    pub natural_gas: f64,
    pub heating_oil: f64,
    pub heat_pump: f64,
    pub wood: f64,
    pub renewable: f64,
    pub kwh_per_currency_unit: f64,
    pub heating_baseline_kwh: f64,
    pub cooling_days: f64,
    pub ac_draw_kw: f64,
    pub home_size: HomeSizeMultipliers,
}

/// Demand multipliers per home size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeSizeMultipliers {
    pub small: f64,
    pub medium: f64,
    pub large: f64,
    pub very_large: f64,
}

/// Diet baselines (tons/year) and adjustment ceilings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodFactors {
    pub vegan: f64,
    pub vegetarian: f64,
    pub pescatarian: f64,
    pub omnivore: f64,
    pub high_meat: f64,
    pub reference_meat_meals_per_week: f64,
    /// Reduction at 100% local food
    pub max_local_reduction: f64,
    /// Reduction at 100% organic food
    pub max_organic_reduction: f64,
    /// Increase at 100% food waste
    pub max_waste_increase: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingFactors {
    pub new_garment: f64,
    pub second_hand_garment: f64,
    pub electronics_device: f64,
    /// Reduction at 100% sustainable choices
    pub max_sustainable_reduction: f64,
    pub clothing_items: ClothingItems,
    pub electronics_items: ElectronicsItems,
}

/// Garments bought per year for each purchase frequency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothingItems {
    pub weekly: f64,
    pub monthly: f64,
    pub quarterly: f64,
    pub yearly: f64,
    pub rarely: f64,
}

/// Devices replaced per year for each replacement frequency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectronicsItems {
    pub yearly: f64,
    pub every_two_years: f64,
    pub every_three_years: f64,
    pub every_five_years: f64,
    pub rarely: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteFactors {
    pub household_baseline_kg: f64,
    pub recycling_credit: f64,
    pub composting_credit: f64,
    pub landfill_emission: f64,
    pub recyclable_share: f64,
    pub organic_share: f64,
}

/// Complete emission factor set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionModel {
    pub transportation: TransportationFactors,
    pub energy: EnergyFactors,
    pub food: FoodFactors,
    pub shopping: ShoppingFactors,
    pub waste: WasteFactors,
}

impl EmissionModel {
    /// Published factor set
    pub const STANDARD: EmissionModel = EmissionModel {
        transportation: TransportationFactors {
            gasoline_car: GASOLINE_CAR_KG_PER_MILE,
            hybrid_car: HYBRID_CAR_KG_PER_MILE,
            electric_car: ELECTRIC_CAR_KG_PER_MILE,
            diesel_car: DIESEL_CAR_KG_PER_MILE,
            public_transport: PUBLIC_TRANSPORT_KG_PER_MILE,
            domestic_flight: DOMESTIC_FLIGHT_KG_PER_MILE,
            public_transport_mph: PUBLIC_TRANSPORT_MPH,
            flight_mph: FLIGHT_MPH,
        },
        energy: EnergyFactors {
            grid_electricity: GRID_ELECTRICITY_KG_PER_KWH,
            natural_gas: NATURAL_GAS_KG_PER_KWH,
            heating_oil: HEATING_OIL_KG_PER_KWH,
            heat_pump: HEAT_PUMP_KG_PER_KWH,
            wood: WOOD_KG_PER_KWH,
            renewable: RENEWABLE_KG_PER_KWH,
            kwh_per_currency_unit: KWH_PER_CURRENCY_UNIT,
            heating_baseline_kwh: HEATING_BASELINE_KWH,
            cooling_days: COOLING_DAYS_PER_YEAR,
            ac_draw_kw: AC_DRAW_KW,
            home_size: HomeSizeMultipliers {
                small: SMALL_HOME_MULTIPLIER,
                medium: MEDIUM_HOME_MULTIPLIER,
                large: LARGE_HOME_MULTIPLIER,
                very_large: VERY_LARGE_HOME_MULTIPLIER,
            },
        },
        food: FoodFactors {
            vegan: VEGAN_TONS_PER_YEAR,
            vegetarian: VEGETARIAN_TONS_PER_YEAR,
            pescatarian: PESCATARIAN_TONS_PER_YEAR,
            omnivore: OMNIVORE_TONS_PER_YEAR,
            high_meat: HIGH_MEAT_TONS_PER_YEAR,
            reference_meat_meals_per_week: REFERENCE_MEAT_MEALS_PER_WEEK,
            max_local_reduction: MAX_LOCAL_FOOD_REDUCTION,
            max_organic_reduction: MAX_ORGANIC_FOOD_REDUCTION,
            max_waste_increase: MAX_FOOD_WASTE_INCREASE,
        },
        shopping: ShoppingFactors {
            new_garment: NEW_GARMENT_KG,
            second_hand_garment: SECOND_HAND_GARMENT_KG,
            electronics_device: ELECTRONICS_DEVICE_KG,
            max_sustainable_reduction: MAX_SUSTAINABLE_CHOICE_REDUCTION,
            clothing_items: ClothingItems {
                weekly: WEEKLY_CLOTHING_ITEMS,
                monthly: MONTHLY_CLOTHING_ITEMS,
                quarterly: QUARTERLY_CLOTHING_ITEMS,
                yearly: YEARLY_CLOTHING_ITEMS,
                rarely: RARE_CLOTHING_ITEMS,
            },
            electronics_items: ElectronicsItems {
                yearly: YEARLY_ELECTRONICS_ITEMS,
                every_two_years: EVERY_TWO_YEARS_ELECTRONICS_ITEMS,
                every_three_years: EVERY_THREE_YEARS_ELECTRONICS_ITEMS,
                every_five_years: EVERY_FIVE_YEARS_ELECTRONICS_ITEMS,
                rarely: RARE_ELECTRONICS_ITEMS,
            },
        },
        waste: WasteFactors {
            household_baseline_kg: HOUSEHOLD_WASTE_KG_PER_YEAR,
            recycling_credit: RECYCLING_CREDIT_KG_PER_KG,
            composting_credit: COMPOSTING_CREDIT_KG_PER_KG,
            landfill_emission: LANDFILL_KG_PER_KG,
            recyclable_share: RECYCLABLE_SHARE,
            organic_share: ORGANIC_SHARE,
        },
    };

    /// Load a recalibrated model from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read emission model file: {:?}", path))?;

        let model: EmissionModel = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse emission model JSON: {:?}", path))?;

        tracing::info!("Loaded emission model override from {:?}", path);
        Ok(model)
    }

    /// kg CO2 per mile for a car type. Unrecognized → gasoline.
    pub fn car_factor(&self, car_type: CarType) -> f64 {
        let t = &self.transportation;
        match car_type {
            CarType::Gasoline => t.gasoline_car,
            CarType::Hybrid => t.hybrid_car,
            CarType::Electric => t.electric_car,
            CarType::Diesel => t.diesel_car,
            CarType::Unrecognized => t.gasoline_car,
        }
    }

    /// Electricity factor: renewable tariff or grid average
    pub fn electricity_factor(&self, uses_renewable_energy: bool) -> f64 {
        if uses_renewable_energy {
            self.energy.renewable
        } else {
            self.energy.grid_electricity
        }
    }

    /// kg CO2 per kWh of heat.
    ///
    /// Electric heating draws on whatever electricity the household buys, so
    /// it takes `electricity_factor`. Unrecognized → natural gas.
    pub fn heating_factor(&self, heating_type: HeatingType, electricity_factor: f64) -> f64 {
        let e = &self.energy;
        match heating_type {
            HeatingType::Gas => e.natural_gas,
            HeatingType::Electric => electricity_factor,
            HeatingType::Oil => e.heating_oil,
            HeatingType::HeatPump => e.heat_pump,
            HeatingType::Wood => e.wood,
            HeatingType::Unrecognized => e.natural_gas,
        }
    }

    /// Scales both electricity and heating demand. Unrecognized → medium.
    pub fn size_multiplier(&self, home_size: HomeSize) -> f64 {
        let m = &self.energy.home_size;
        match home_size {
            HomeSize::Small => m.small,
            HomeSize::Medium => m.medium,
            HomeSize::Large => m.large,
            HomeSize::VeryLarge => m.very_large,
            HomeSize::Unrecognized => m.medium,
        }
    }

    /// Garments bought per year. Unrecognized → monthly.
    pub fn clothing_items_per_year(&self, frequency: ClothingFrequency) -> f64 {
        let c = &self.shopping.clothing_items;
        match frequency {
            ClothingFrequency::Weekly => c.weekly,
            ClothingFrequency::Monthly => c.monthly,
            ClothingFrequency::Quarterly => c.quarterly,
            ClothingFrequency::Yearly => c.yearly,
            ClothingFrequency::Rarely => c.rarely,
            ClothingFrequency::Unrecognized => c.monthly,
        }
    }

    /// Devices replaced per year. Unrecognized → every three years.
    pub fn electronics_items_per_year(&self, frequency: ElectronicsFrequency) -> f64 {
        let e = &self.shopping.electronics_items;
        match frequency {
            ElectronicsFrequency::Yearly => e.yearly,
            ElectronicsFrequency::EveryTwoYears => e.every_two_years,
            ElectronicsFrequency::EveryThreeYears => e.every_three_years,
            ElectronicsFrequency::EveryFiveYears => e.every_five_years,
            ElectronicsFrequency::Rarely => e.rarely,
            ElectronicsFrequency::Unrecognized => e.every_three_years,
        }
    }

    /// Annual diet baseline in tons. Unrecognized → omnivore.
    pub fn diet_baseline(&self, diet_type: DietType) -> f64 {
        let f = &self.food;
        match diet_type {
            DietType::Vegan => f.vegan,
            DietType::Vegetarian => f.vegetarian,
            DietType::Pescatarian => f.pescatarian,
            DietType::Omnivore => f.omnivore,
            DietType::HighMeat => f.high_meat,
            DietType::Unrecognized => f.omnivore,
        }
    }
}

impl Default for EmissionModel {
    fn default() -> Self {
        Self::STANDARD
    }
}
