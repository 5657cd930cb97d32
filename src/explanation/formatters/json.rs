use crate::explanation::types::Explanation;
use serde_json;

/// JSON formatter for explanations
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format explanation as pretty-printed JSON
    pub fn format(explanation: &Explanation) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(explanation)
    }

    /// Format explanation as compact JSON (no whitespace)
    pub fn format_compact(explanation: &Explanation) -> Result<String, serde_json::Error> {
        serde_json::to_string(explanation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::FootprintCalculator;
    use crate::explanation::ExplanationGenerator;
    use crate::survey::LifestyleSurvey;

    fn commuter_explanation() -> Explanation {
        let mut survey = LifestyleSurvey::default();
        survey.transportation.car_miles_per_week = 300.0;
        let report = FootprintCalculator::new().calculate_detailed(&survey);
        ExplanationGenerator::generate(&report)
    }

    #[test]
    fn test_format_json() {
        let json = JsonFormatter::format(&commuter_explanation()).unwrap();

        assert!(json.contains("\"label\": \"High Impact\""));
        assert!(json.contains("\"category\": \"transportation\""));
        assert!(json.contains("\"code\": \"reduce_driving\""));
        assert!(json.contains("\"global_average_tons\": 4.7"));
    }

    #[test]
    fn test_format_compact() {
        let json = JsonFormatter::format_compact(&commuter_explanation()).unwrap();

        // Compact format should have no newlines (except potentially in strings)
        assert!(!json.contains("\n  "));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["categories"].as_array().unwrap().len(), 5);
    }
}
