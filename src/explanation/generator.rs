use crate::calculator::FootprintReport;
use crate::categories::{Category, CategoryBreakdown};
use crate::explanation::types::*;
use crate::suggestions::rule_for_message;
use crate::survey::LifestyleSurvey;

/// Average per-person footprint worldwide, tons CO2/year
pub const GLOBAL_AVERAGE_TONS: f64 = 4.7;

/// Per-person footprint consistent with climate targets, tons CO2/year
pub const CLIMATE_TARGET_TONS: f64 = 2.0;

/// Main explanation generator
pub struct ExplanationGenerator;

impl ExplanationGenerator {
    /// Generate complete explanation from a detailed footprint report
    ///
    /// Takes:
    /// - report: result plus intermediate category values and the survey
    ///
    /// Returns: Explanation with overall rating, category cards, benefits
    /// and suggestion cards
    pub fn generate(report: &FootprintReport) -> Explanation {
        let result = &report.result;

        let overall = Self::generate_overall(result.total_tons_co2_per_year);
        let categories = Self::generate_category_cards(&result.breakdown);
        let benefits = Self::generate_benefits(&report.survey, &result.breakdown);

        let suggestions: Vec<SuggestionCard> = result
            .suggestions
            .iter()
            .filter_map(|message| {
                // Messages always come from the rule table
                rule_for_message(message).map(|rule| SuggestionCard {
                    code: rule.code.to_string(),
                    category: rule.category,
                    icon: category_icon(rule.category).to_string(),
                    message: message.clone(),
                })
            })
            .collect();

        tracing::debug!(
            "Explanation: {} categories, {} benefits, {} suggestions",
            categories.len(),
            benefits.len(),
            suggestions.len()
        );

        Explanation {
            overall,
            categories,
            benefits,
            suggestions,
        }
    }

    /// Generate overall interpretation with stars and benchmark comparison
    fn generate_overall(total_tons: f64) -> OverallExplanation {
        let (stars, label) = match total_tons {
            t if !t.is_finite() => ("☆☆☆☆☆", "Unrated"),
            t if t <= 2.0 => ("★★★★★", "Climate Champion"),
            t if t <= 4.0 => ("★★★★☆", "Low Impact"),
            t if t <= 8.0 => ("★★★☆☆", "Moderate Impact"),
            t if t <= 12.0 => ("★★☆☆☆", "High Impact"),
            t if t <= 16.0 => ("★☆☆☆☆", "Very High Impact"),
            _ => ("☆☆☆☆☆", "Extreme Impact"),
        };

        let comparison = BenchmarkComparison {
            global_average_tons: GLOBAL_AVERAGE_TONS,
            climate_target_tons: CLIMATE_TARGET_TONS,
            difference_from_global_average: total_tons - GLOBAL_AVERAGE_TONS,
            ratio_to_global_average: total_tons / GLOBAL_AVERAGE_TONS,
            difference_from_climate_target: total_tons - CLIMATE_TARGET_TONS,
            within_climate_target: total_tons <= CLIMATE_TARGET_TONS,
        };

        let relative = if total_tons > GLOBAL_AVERAGE_TONS {
            format!("{:.1} t above", total_tons - GLOBAL_AVERAGE_TONS)
        } else {
            format!("{:.1} t below", GLOBAL_AVERAGE_TONS - total_tons)
        };

        OverallExplanation {
            total_tons,
            stars: stars.to_string(),
            label: label.to_string(),
            message: format!(
                "Estimated footprint: {:.2} t CO2/year ({} the global average of {:.1} t)",
                total_tons, relative, GLOBAL_AVERAGE_TONS
            ),
            comparison,
        }
    }

    /// One card per category, in category order
    fn generate_category_cards(breakdown: &CategoryBreakdown) -> Vec<CategoryCard> {
        breakdown
            .iter()
            .map(|(category, tons)| {
                let severity = Severity::from_tons(category, tons);

                CategoryCard {
                    category,
                    name: category.display_name().to_string(),
                    tons,
                    share_percent: breakdown.share_percent(category),
                    severity,
                    interpretation: severity.interpretation().to_string(),
                }
            })
            .collect()
    }

    /// Benefit cards for habits that already keep emissions down
    fn generate_benefits(survey: &LifestyleSurvey, breakdown: &CategoryBreakdown) -> Vec<BenefitCard> {
        let mut benefits = Vec::new();

        if survey.transportation.active_transport_hours_per_week > 0.0 {
            benefits.push(BenefitCard {
                benefit_type: "active_travel".to_string(),
                category: Category::Transportation,
                title: "Active Travel".to_string(),
                message: format!(
                    "{:.1} hours/week of walking or cycling add no emissions",
                    survey.transportation.active_transport_hours_per_week
                ),
            });
        }

        if survey.energy.uses_renewable_energy {
            benefits.push(BenefitCard {
                benefit_type: "renewable_energy".to_string(),
                category: Category::Energy,
                title: "Renewable Electricity".to_string(),
                message: "Your electricity is priced at the renewable factor instead of the grid average".to_string(),
            });
        }

        if survey.shopping.second_hand_percent >= 50.0 {
            benefits.push(BenefitCard {
                benefit_type: "second_hand".to_string(),
                category: Category::Shopping,
                title: "Second-hand Shopping".to_string(),
                message: format!(
                    "{:.0}% of your clothing is second-hand, avoiding most production emissions",
                    survey.shopping.second_hand_percent
                ),
            });
        }

        if breakdown.waste < 0.0 {
            benefits.push(BenefitCard {
                benefit_type: "waste_credit".to_string(),
                category: Category::Waste,
                title: "Net Waste Credit".to_string(),
                message: format!(
                    "Recycling and composting offset {:.3} t CO2/year more than your landfill emissions",
                    -breakdown.waste
                ),
            });
        }

        benefits
    }
}

fn category_icon(category: Category) -> &'static str {
    match category {
        Category::Transportation => "🚗",
        Category::Energy => "⚡",
        Category::Food => "🥗",
        Category::Shopping => "🛍️",
        Category::Waste => "♻️",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::FootprintCalculator;
    use crate::survey::CarType;
    use approx::assert_relative_eq;

    #[test]
    fn test_generate_overall_champion() {
        let overall = ExplanationGenerator::generate_overall(1.8);
        assert_eq!(overall.stars, "★★★★★");
        assert_eq!(overall.label, "Climate Champion");
        assert!(overall.comparison.within_climate_target);
        assert!(overall.message.contains("2.9 t below"));
    }

    #[test]
    fn test_generate_overall_high() {
        let overall = ExplanationGenerator::generate_overall(9.4);
        assert_eq!(overall.stars, "★★☆☆☆");
        assert_eq!(overall.label, "High Impact");
        assert_relative_eq!(overall.comparison.ratio_to_global_average, 2.0, epsilon = 1e-12);
        assert!(!overall.comparison.within_climate_target);
        assert!(overall.message.contains("4.7 t above"));
    }

    #[test]
    fn test_generate_overall_extreme() {
        let overall = ExplanationGenerator::generate_overall(25.0);
        assert_eq!(overall.label, "Extreme Impact");
    }

    #[test]
    fn test_generate_overall_non_finite_is_unrated() {
        for total in [f64::NAN, f64::INFINITY] {
            let overall = ExplanationGenerator::generate_overall(total);
            assert_eq!(overall.label, "Unrated");
            assert_eq!(overall.stars, "☆☆☆☆☆");
        }
    }

    #[test]
    fn test_category_cards_keep_order() {
        let breakdown = CategoryBreakdown {
            transportation: 1.0,
            energy: 3.0,
            food: 0.0,
            shopping: 0.0,
            waste: -0.5,
        };
        let cards = ExplanationGenerator::generate_category_cards(&breakdown);

        assert_eq!(cards.len(), 5);
        assert_eq!(cards[0].category, Category::Transportation);
        assert_relative_eq!(cards[0].share_percent, 25.0, epsilon = 1e-9);
        assert_relative_eq!(cards[1].share_percent, 75.0, epsilon = 1e-9);
        assert_eq!(cards[1].severity, Severity::Medium);
        assert_eq!(cards[4].severity, Severity::Credit);
        assert_eq!(cards[4].share_percent, 0.0);
    }

    #[test]
    fn test_generate_full_explanation() {
        let mut survey = LifestyleSurvey::default();
        survey.transportation.car_miles_per_week = 300.0;
        survey.transportation.car_type = CarType::Gasoline;
        survey.transportation.active_transport_hours_per_week = 2.0;
        survey.waste.recycling_percent = 100.0;
        survey.waste.composts = true;

        let report = FootprintCalculator::new().calculate_detailed(&survey);
        let explanation = ExplanationGenerator::generate(&report);

        assert_eq!(explanation.suggestions.len(), report.result.suggestions.len());
        assert_eq!(explanation.suggestions[0].code, "reduce_driving");
        assert_eq!(explanation.suggestions[1].code, "switch_to_ev");

        let benefit_types: Vec<&str> = explanation
            .benefits
            .iter()
            .map(|b| b.benefit_type.as_str())
            .collect();
        assert_eq!(benefit_types, vec!["active_travel", "waste_credit"]);
    }
}
