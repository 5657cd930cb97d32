use crate::explanation::types::{Explanation, Severity};

/// Markdown formatter for explanations
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format explanation as markdown
    pub fn format(explanation: &Explanation) -> String {
        let mut md = String::with_capacity(2048);

        // Title with stars and total
        md.push_str(&format!(
            "# {} - {}\n\n",
            explanation.overall.stars, explanation.overall.label
        ));
        md.push_str(&format!(
            "**Total:** {:.2} t CO2/year\n\n",
            explanation.overall.total_tons
        ));
        md.push_str(&format!("{}\n\n", explanation.overall.message));

        // Benchmarks
        let comparison = &explanation.overall.comparison;
        md.push_str("## How You Compare\n\n");
        md.push_str("| Benchmark | Tons CO2/year | Difference |\n");
        md.push_str("|-----------|---------------|------------|\n");
        md.push_str(&format!(
            "| Global average | {:.1} | {:+.2} |\n",
            comparison.global_average_tons, comparison.difference_from_global_average
        ));
        md.push_str(&format!(
            "| Climate target | {:.1} | {:+.2} |\n\n",
            comparison.climate_target_tons, comparison.difference_from_climate_target
        ));
        if comparison.within_climate_target {
            md.push_str("✅ Within the per-person climate target\n\n");
        }

        // Category breakdown
        md.push_str("## Category Breakdown\n\n");
        md.push_str("| Category | Tons CO2/year | Share | Interpretation |\n");
        md.push_str("|----------|---------------|-------|----------------|\n");
        for card in &explanation.categories {
            md.push_str(&format!(
                "| {} | {:.3} | {:.1}% | {} {} |\n",
                card.name,
                card.tons,
                card.share_percent,
                severity_icon(card.severity),
                card.interpretation
            ));
        }
        md.push('\n');

        // Benefits
        if !explanation.benefits.is_empty() {
            md.push_str("## What You're Doing Well\n\n");
            for benefit in &explanation.benefits {
                md.push_str(&format!("### {}\n\n", benefit.title));
                md.push_str(&format!("{}\n\n", benefit.message));
            }
        }

        // Suggestions
        if !explanation.suggestions.is_empty() {
            md.push_str("## Suggestions\n\n");
            for (i, suggestion) in explanation.suggestions.iter().enumerate() {
                md.push_str(&format!(
                    "{}. {} {}\n",
                    i + 1,
                    suggestion.icon,
                    suggestion.message
                ));
            }
            md.push('\n');
        }

        md
    }
}

fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Credit => "🌱",
        Severity::None => "🟢",
        Severity::Low => "🟡",
        Severity::Medium => "🟠",
        Severity::High => "🔴",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::FootprintCalculator;
    use crate::explanation::ExplanationGenerator;
    use crate::survey::LifestyleSurvey;

    #[test]
    fn test_format_markdown() {
        let mut survey = LifestyleSurvey::default();
        survey.transportation.car_miles_per_week = 300.0;
        survey.waste.recycling_percent = 100.0;
        survey.waste.composts = true;

        let report = FootprintCalculator::new().calculate_detailed(&survey);
        let explanation = ExplanationGenerator::generate(&report);
        let md = MarkdownFormatter::format(&explanation);

        assert!(md.starts_with("# ★★★☆☆ - Moderate Impact"));
        assert!(md.contains("## Category Breakdown"));
        assert!(md.contains("| Transportation | 6.302 |"));
        assert!(md.contains("🌱 Net Carbon Credit"));
        assert!(md.contains("## What You're Doing Well"));
        assert!(md.contains("1. 🚗 "));
    }

    #[test]
    fn test_no_suggestions_section_when_empty() {
        let mut survey = LifestyleSurvey::default();
        survey.waste.recycling_percent = 100.0;
        survey.waste.composts = true;

        let report = FootprintCalculator::new().calculate_detailed(&survey);
        let explanation = ExplanationGenerator::generate(&report);
        let md = MarkdownFormatter::format(&explanation);

        assert!(explanation.suggestions.is_empty());
        assert!(!md.contains("## Suggestions"));
        assert!(md.contains("| Global average | 4.7 |"));
    }
}
