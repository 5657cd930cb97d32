//! AI recommendation boundary
//!
//! `RecommendationContext` is exactly what gets forwarded to a hosted text
//! generation service as prompt context. Prompt construction and the
//! service call live behind `RecommendationProvider`.
//!
//! When no provider is configured, or the provider fails or returns
//! nothing, the deterministic rule-based suggestions are used instead.

use crate::calculator::FootprintResult;
use crate::categories::Category;
use crate::survey::LifestyleSurvey;
use serde::{Deserialize, Serialize};

/// One category in the ranking sent to the recommendation service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCategory {
    pub category: Category,
    pub tons: f64,
    /// Share of positive emissions (0-100); 0 for credits
    pub share_of_total_percent: f64,
}

/// Data crossing the boundary to the recommendation service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationContext {
    pub survey: LifestyleSurvey,
    pub result: FootprintResult,
    /// Highest-emitting category first
    pub ranked_categories: Vec<RankedCategory>,
    pub fallback_suggestions: Vec<String>,
}

impl RecommendationContext {
    pub fn new(survey: &LifestyleSurvey, result: &FootprintResult) -> Self {
        Self {
            survey: survey.clone(),
            result: result.clone(),
            ranked_categories: rank_categories(result),
            fallback_suggestions: result.suggestions.clone(),
        }
    }
}

/// Categories sorted by tons, descending. Ties keep category order.
pub fn rank_categories(result: &FootprintResult) -> Vec<RankedCategory> {
    let mut ranked: Vec<RankedCategory> = result
        .breakdown
        .iter()
        .map(|(category, tons)| RankedCategory {
            category,
            tons,
            share_of_total_percent: result.breakdown.share_percent(category),
        })
        .collect();

    ranked.sort_by(|a, b| b.tons.total_cmp(&a.tons));
    ranked
}

/// External source of natural-language recommendations
pub trait RecommendationProvider: Send + Sync {
    /// Provider name for logging
    fn name(&self) -> &str;

    fn recommend(&self, context: &RecommendationContext) -> anyhow::Result<Vec<String>>;
}

/// Where a recommendation list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSource {
    Provider,
    RuleBased,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub source: RecommendationSource,
    pub items: Vec<String>,
}

/// Ask the provider for recommendations, falling back to the rule-based list
pub fn recommend(
    provider: Option<&dyn RecommendationProvider>,
    context: &RecommendationContext,
) -> Recommendations {
    let fallback = || Recommendations {
        source: RecommendationSource::RuleBased,
        items: context.fallback_suggestions.clone(),
    };

    let Some(provider) = provider else {
        return fallback();
    };

    match provider.recommend(context) {
        Ok(items) if !items.is_empty() => Recommendations {
            source: RecommendationSource::Provider,
            items,
        },
        Ok(_) => {
            tracing::warn!("Recommendation provider '{}' returned no items, using rule-based suggestions", provider.name());
            fallback()
        }
        Err(e) => {
            tracing::warn!("Recommendation provider '{}' failed: {:#}, using rule-based suggestions", provider.name(), e);
            fallback()
        }
    }
}
