//! Category calculators for footprint estimation
//!
//! Each category is implemented in its own module. All of them take their
//! survey section plus the emission model and return a result struct with
//! the intermediate values and the sub-total in tons CO2/year.

pub mod transportation;
pub mod energy;
pub mod food;
pub mod shopping;
pub mod waste;

pub use transportation::{calculate_transportation, TransportationResult};
pub use energy::{calculate_energy, EnergyResult};
pub use food::{calculate_food, FoodResult};
pub use shopping::{calculate_shopping, ShoppingResult};
pub use waste::{calculate_waste, WasteResult};

use serde::{Deserialize, Serialize};

/// Footprint category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Transportation,
    Energy,
    Food,
    Shopping,
    Waste,
}

impl Category {
    /// Fixed evaluation order for aggregation and suggestions
    pub const ALL: [Category; 5] = [
        Category::Transportation,
        Category::Energy,
        Category::Food,
        Category::Shopping,
        Category::Waste,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Category::Transportation => "Transportation",
            Category::Energy => "Home Energy",
            Category::Food => "Food & Diet",
            Category::Shopping => "Shopping",
            Category::Waste => "Waste",
        }
    }

    /// Sub-total (tons/year) a category must exceed before its suggestions apply
    pub fn suggestion_threshold(self) -> f64 {
        match self {
            Category::Transportation | Category::Energy | Category::Food => 2.0,
            Category::Shopping => 1.0,
            Category::Waste => 0.0,
        }
    }
}

/// Per-category sub-totals in tons CO2/year
///
/// Values are raw: waste may be negative when recycling and composting
/// credits outweigh landfill emissions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub transportation: f64,
    pub energy: f64,
    pub food: f64,
    pub shopping: f64,
    pub waste: f64,
}

impl CategoryBreakdown {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Transportation => self.transportation,
            Category::Energy => self.energy,
            Category::Food => self.food,
            Category::Shopping => self.shopping,
            Category::Waste => self.waste,
        }
    }

    /// Unclamped sum, added in category order
    pub fn sum(&self) -> f64 {
        self.transportation + self.energy + self.food + self.shopping + self.waste
    }

    /// (category, tons) pairs in category order
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    /// Sum of the positive sub-totals; credits are left out
    pub fn positive_total(&self) -> f64 {
        self.iter().map(|(_, tons)| tons.max(0.0)).sum()
    }

    /// Share of positive emissions (0-100). Credits have no share.
    pub fn share_percent(&self, category: Category) -> f64 {
        let total = self.positive_total();
        if total > 0.0 {
            self.get(category).max(0.0) / total * 100.0
        } else {
            0.0
        }
    }

    /// Whether a category's sub-total is above its suggestion threshold
    pub fn exceeds_threshold(&self, category: Category) -> bool {
        self.get(category) > category.suggestion_threshold()
    }
}
