//! Carbon Footprint Rust Implementation
//!
//! Deterministic annual CO2 estimate for one person from a lifestyle survey.
//!
//! Module layout:
//! - `survey/`: Survey input types with lenient categorical labels
//! - `emission_model/`: Emission factors and the standard model
//! - `categories/`: Per-category calculators (transportation, energy, food, shopping, waste)
//! - `calculator/`: Aggregation, batch calculation (Rayon) and detailed reports
//! - `suggestions/`: Threshold-gated suggestion rules
//! - `validation/`: Boundary checks and clamping for user-supplied surveys
//! - `explanation/`: Star ratings, category cards and JSON/Markdown output
//! - `record/`, `recommendation/`: Persistence and AI-service boundaries
//! - `api_server/`: Axum HTTP API (feature `api`)

pub mod survey;
pub mod emission_model;
pub mod categories;
pub mod calculator;
pub mod suggestions;
pub mod validation;
pub mod record;
pub mod recommendation;
pub mod explanation;
pub mod config;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use survey::LifestyleSurvey;
pub use emission_model::EmissionModel;
pub use categories::{Category, CategoryBreakdown};
pub use calculator::{calculate_footprint, FootprintCalculator, FootprintReport, FootprintResult};
pub use validation::{validate_survey, ValidationErrors};
pub use config::ServerConfig;

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
