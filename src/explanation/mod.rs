//! Human-readable footprint explanations
//!
//! Turns a detailed footprint report into a star rating, benchmark
//! comparison, per-category cards, benefit cards and suggestion cards,
//! then renders them as JSON or Markdown.

pub mod types;
pub mod generator;
pub mod formatters;

pub use types::{
    BenchmarkComparison, BenefitCard, CategoryCard, Explanation, OverallExplanation, Severity,
    SuggestionCard,
};

pub use generator::{ExplanationGenerator, CLIMATE_TARGET_TONS, GLOBAL_AVERAGE_TONS};
pub use formatters::{JsonFormatter, MarkdownFormatter};
