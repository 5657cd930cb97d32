use serde::{Deserialize, Serialize};
use crate::categories::Category;

/// Complete explanation for a footprint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explanation {
    pub overall: OverallExplanation,
    pub categories: Vec<CategoryCard>,
    pub benefits: Vec<BenefitCard>,
    pub suggestions: Vec<SuggestionCard>,
}

/// Overall footprint interpretation with stars
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallExplanation {
    pub total_tons: f64,
    pub stars: String,  // "★★★★☆"
    pub label: String,  // "Climate Champion" / "Low Impact" / ...
    pub message: String,
    pub comparison: BenchmarkComparison,
}

/// Comparison against reference per-person footprints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkComparison {
    pub global_average_tons: f64,
    pub climate_target_tons: f64,
    /// Positive = above the global average
    pub difference_from_global_average: f64,
    pub ratio_to_global_average: f64,
    /// Positive = above the climate target
    pub difference_from_climate_target: f64,
    pub within_climate_target: bool,
}

/// Per-category card for the breakdown display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCard {
    pub category: Category,
    pub name: String,
    pub tons: f64,
    /// Share of positive emissions (0-100)
    pub share_percent: f64,
    pub severity: Severity,
    pub interpretation: String,
}

/// Benefit card for low-carbon habits already in place
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenefitCard {
    pub benefit_type: String, // "waste_credit", "renewable_energy", etc.
    pub category: Category,
    pub title: String,
    pub message: String,
}

/// Suggestion card built from a matched rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionCard {
    pub code: String, // "reduce_driving"
    pub category: Category,
    pub icon: String,
    pub message: String,
}

/// Severity level for a category sub-total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// Net negative emissions
    Credit,
    None,
    Low,
    Medium,
    High,
}

/// Scale used for waste, whose suggestion threshold is zero
const WASTE_SEVERITY_SCALE_TONS: f64 = 0.5;

impl Severity {
    /// Derive severity from a sub-total relative to its category threshold
    pub fn from_tons(category: Category, tons: f64) -> Self {
        if tons < 0.0 {
            return Severity::Credit;
        }

        let threshold = category.suggestion_threshold();
        let scale = if threshold > 0.0 { threshold } else { WASTE_SEVERITY_SCALE_TONS };

        match tons / scale {
            r if r >= 2.0 => Severity::High,
            r if r >= 1.0 => Severity::Medium,
            r if r >= 0.5 => Severity::Low,
            _ => Severity::None,
        }
    }

    pub fn interpretation(self) -> &'static str {
        match self {
            Severity::Credit => "Net Carbon Credit",
            Severity::None => "Excellent",
            Severity::Low => "Good",
            Severity::Medium => "Needs Attention",
            Severity::High => "Critical",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_bands() {
        assert_eq!(Severity::from_tons(Category::Transportation, 6.3), Severity::High);
        assert_eq!(Severity::from_tons(Category::Energy, 2.0), Severity::Medium);
        assert_eq!(Severity::from_tons(Category::Food, 1.2), Severity::Low);
        assert_eq!(Severity::from_tons(Category::Shopping, 0.3), Severity::None);
    }

    #[test]
    fn test_waste_severity() {
        assert_eq!(Severity::from_tons(Category::Waste, -0.064), Severity::Credit);
        assert_eq!(Severity::from_tons(Category::Waste, 0.0), Severity::None);
        assert_eq!(Severity::from_tons(Category::Waste, 0.8), Severity::Medium);
        assert_eq!(Severity::from_tons(Category::Waste, 1.0), Severity::High);
    }
}
