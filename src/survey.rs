//! Lifestyle Survey Data Model
//!
//! The structured self-report a caller assembles from user input and hands
//! to the calculator once. Five sections, one per footprint category.
//!
//! **Categorical fields** are enums rather than strings. Each enum carries an
//! explicit `Unrecognized` variant so that partially-migrated or malformed
//! survey data (an old label, a typo, `null`) still deserializes. The
//! emission model costs `Unrecognized` exactly like the enum's `Default`.
//!
//! **JSON shape**: camelCase field names, kebab-style enum labels
//! (`very-large`, `heat-pump`, `every-2-years`). Missing fields take their
//! `Default`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Declares a survey enum with its wire labels and lenient parsing.
///
/// Unknown labels map to `Unrecognized` instead of failing deserialization.
macro_rules! survey_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// Label not known to this version of the survey
            Unrecognized,
        }

        impl $name {
            /// All recognised variants, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire label for this variant
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                    $name::Unrecognized => "unrecognized",
                }
            }

            /// Parse a label, case-insensitively. Never fails.
            pub fn from_label(label: &str) -> Self {
                match label.trim().to_ascii_lowercase().as_str() {
                    $($label => $name::$variant,)+
                    _ => $name::Unrecognized,
                }
            }

            pub fn is_recognized(self) -> bool {
                self != $name::Unrecognized
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let label = Option::<String>::deserialize(deserializer)?;
                Ok(label.as_deref().map_or($name::Unrecognized, $name::from_label))
            }
        }
    };
}

survey_enum! {
    /// Fuel type of the household's main car
    pub enum CarType {
        Gasoline => "gasoline",
        Hybrid => "hybrid",
        Electric => "electric",
        Diesel => "diesel",
    }
}

survey_enum! {
    pub enum HomeSize {
        Small => "small",
        Medium => "medium",
        Large => "large",
        VeryLarge => "very-large",
    }
}

survey_enum! {
    /// Primary space-heating source
    pub enum HeatingType {
        Gas => "gas",
        Electric => "electric",
        Oil => "oil",
        HeatPump => "heat-pump",
        Wood => "wood",
    }
}

survey_enum! {
    pub enum DietType {
        Vegan => "vegan",
        Vegetarian => "vegetarian",
        Pescatarian => "pescatarian",
        Omnivore => "omnivore",
        HighMeat => "high-meat",
    }
}

survey_enum! {
    /// How often new clothing is bought
    pub enum ClothingFrequency {
        Weekly => "weekly",
        Monthly => "monthly",
        Quarterly => "quarterly",
        Yearly => "yearly",
        Rarely => "rarely",
    }
}

survey_enum! {
    /// How often personal electronics are replaced
    pub enum ElectronicsFrequency {
        Yearly => "yearly",
        EveryTwoYears => "every-2-years",
        EveryThreeYears => "every-3-years",
        EveryFiveYears => "every-5-years",
        Rarely => "rarely",
    }
}

impl Default for CarType {
    fn default() -> Self {
        CarType::Gasoline
    }
}

impl Default for HomeSize {
    fn default() -> Self {
        HomeSize::Medium
    }
}

impl Default for HeatingType {
    fn default() -> Self {
        HeatingType::Gas
    }
}

impl Default for DietType {
    fn default() -> Self {
        DietType::Omnivore
    }
}

impl Default for ClothingFrequency {
    fn default() -> Self {
        ClothingFrequency::Monthly
    }
}

impl Default for ElectronicsFrequency {
    fn default() -> Self {
        ElectronicsFrequency::EveryThreeYears
    }
}

/// Travel habits
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransportationSurvey {
    pub car_miles_per_week: f64,
    pub car_type: CarType,
    pub public_transport_hours_per_week: f64,
    pub flight_hours_per_year: f64,
    /// Walking and cycling. Recorded, contributes nothing.
    pub active_transport_hours_per_week: f64,
}

/// Home energy use
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnergySurvey {
    pub home_size: HomeSize,
    /// Currency units per month
    pub monthly_electricity_bill: f64,
    pub heating_type: HeatingType,
    /// Hours of air conditioning per summer day, 0-24
    pub cooling_hours_per_day_summer: f64,
    pub uses_renewable_energy: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FoodSurvey {
    pub diet_type: DietType,
    pub meat_meals_per_week: f64,
    pub local_food_percent: f64,
    pub food_waste_percent: f64,
    pub organic_percent: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShoppingSurvey {
    pub clothing_purchase_frequency: ClothingFrequency,
    pub electronics_replacement_frequency: ElectronicsFrequency,
    pub sustainable_choice_percent: f64,
    pub second_hand_percent: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WasteSurvey {
    pub recycling_percent: f64,
    pub composts: bool,
    pub waste_reduction_percent: f64,
}

/// Complete lifestyle self-report
///
/// Constructed once by the caller and passed by reference to the calculator,
/// which never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LifestyleSurvey {
    pub transportation: TransportationSurvey,
    pub energy: EnergySurvey,
    pub food: FoodSurvey,
    pub shopping: ShoppingSurvey,
    pub waste: WasteSurvey,
}

impl LifestyleSurvey {
    /// Assemble a survey from its five sections
    pub fn new(
        transportation: TransportationSurvey,
        energy: EnergySurvey,
        food: FoodSurvey,
        shopping: ShoppingSurvey,
        waste: WasteSurvey,
    ) -> Self {
        Self {
            transportation,
            energy,
            food,
            shopping,
            waste,
        }
    }
}
