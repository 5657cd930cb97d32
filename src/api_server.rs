// Axum API Server Module
//
// Purpose: REST API over the footprint calculator (calculate, detailed
// report, explanation, recommendation context, parallel batch)

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::calculator::{FootprintCalculator, FootprintReport, FootprintResult};
use crate::config::ServerConfig;
use crate::emission_model::EmissionModel;
use crate::explanation::{Explanation, ExplanationGenerator};
use crate::recommendation::RecommendationContext;
use crate::survey::LifestyleSurvey;
use crate::validation::{check_result, unrecognized_labels, validate_survey, ValidationErrors};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub calculator: Arc<FootprintCalculator>,
    pub max_batch_size: usize,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> anyhow::Result<Self> {
        tracing::info!("Initializing footprint calculator...");
        let model = config.emission_model()?;

        Ok(Self::with_calculator(
            FootprintCalculator::with_model(model),
            config.max_batch_size,
        ))
    }

    pub fn with_calculator(calculator: FootprintCalculator, max_batch_size: usize) -> Self {
        Self {
            calculator: Arc::new(calculator),
            max_batch_size,
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Active emission factors
        .route("/api/emission-model", get(get_emission_model))

        // Footprint endpoints
        .route("/api/footprint/calculate", post(calculate_footprint))
        .route("/api/footprint/report", post(footprint_report))
        .route("/api/footprint/explain", post(explain_footprint))
        .route("/api/footprint/context", post(recommendation_context))
        .route("/api/footprint/batch", post(calculate_batch))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    pub surveys: Vec<LifestyleSurvey>,
}

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub count: usize,
    pub results: Vec<FootprintResult>,
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn get_emission_model(State(state): State<AppState>) -> Json<EmissionModel> {
    Json(state.calculator.model().clone())
}

async fn calculate_footprint(
    State(state): State<AppState>,
    Json(survey): Json<LifestyleSurvey>,
) -> Result<Json<FootprintResult>, ApiError> {
    check_survey(&survey)?;
    let result = state.calculator.calculate(&survey);
    check_output(&result)?;

    tracing::info!("Calculated footprint: {:.3} t CO2/year", result.total_tons_co2_per_year);
    Ok(Json(result))
}

async fn footprint_report(
    State(state): State<AppState>,
    Json(survey): Json<LifestyleSurvey>,
) -> Result<Json<FootprintReport>, ApiError> {
    check_survey(&survey)?;
    let report = state.calculator.calculate_detailed(&survey);
    check_output(&report.result)?;
    Ok(Json(report))
}

/// Star rating, category cards, benefits and suggestion cards
async fn explain_footprint(
    State(state): State<AppState>,
    Json(survey): Json<LifestyleSurvey>,
) -> Result<Json<Explanation>, ApiError> {
    check_survey(&survey)?;
    let report = state.calculator.calculate_detailed(&survey);
    check_output(&report.result)?;
    Ok(Json(ExplanationGenerator::generate(&report)))
}

/// The exact payload handed to the recommendation service
async fn recommendation_context(
    State(state): State<AppState>,
    Json(survey): Json<LifestyleSurvey>,
) -> Result<Json<RecommendationContext>, ApiError> {
    check_survey(&survey)?;
    let result = state.calculator.calculate(&survey);
    check_output(&result)?;
    Ok(Json(RecommendationContext::new(&survey, &result)))
}

async fn calculate_batch(
    State(state): State<AppState>,
    Json(payload): Json<BatchRequest>,
) -> Result<Json<BatchResponse>, ApiError> {
    let size = payload.surveys.len();
    if size > state.max_batch_size {
        return Err(ApiError::BatchTooLarge {
            size,
            limit: state.max_batch_size,
        });
    }

    for (index, survey) in payload.surveys.iter().enumerate() {
        check_survey(survey).map_err(|e| match e {
            ApiError::Validation(source) => ApiError::BatchValidation { index, source },
            other => other,
        })?;
    }

    tracing::info!("Calculating batch of {} surveys", size);

    // CPU-bound work: run in blocking thread pool
    let calculator = state.calculator.clone();
    let results = tokio::task::spawn_blocking(move || calculator.calculate_batch(&payload.surveys))
        .await
        .map_err(|e| ApiError::Internal(format!("Task join error: {}", e)))?;

    for (index, result) in results.iter().enumerate() {
        check_output(result).map_err(|e| match e {
            ApiError::Validation(source) => ApiError::BatchValidation { index, source },
            other => other,
        })?;
    }

    Ok(Json(BatchResponse {
        count: results.len(),
        results,
    }))
}

/// Reject invalid numbers; unknown labels are only logged
fn check_survey(survey: &LifestyleSurvey) -> Result<(), ApiError> {
    validate_survey(survey)?;

    let unrecognized = unrecognized_labels(survey);
    if !unrecognized.is_empty() {
        tracing::warn!(
            "Unrecognized labels costed with fallback factors: {}",
            unrecognized.join(", ")
        );
    }

    Ok(())
}

/// Reject results that overflowed and cannot be encoded as JSON numbers
fn check_output(result: &FootprintResult) -> Result<(), ApiError> {
    check_result(result).map_err(|errors| {
        tracing::warn!("Footprint overflowed for in-range inputs: {}", errors);
        ApiError::Validation(errors)
    })
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("survey {index} in batch: {source}")]
    BatchValidation {
        index: usize,
        source: ValidationErrors,
    },

    #[error("batch of {size} surveys exceeds the limit of {limit}")]
    BatchTooLarge { size: usize, limit: usize },

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        let (status, body) = match self {
            ApiError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                serde_json::json!({
                    "error": message,
                    "details": errors.errors(),
                }),
            ),
            ApiError::BatchValidation { index, source } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                serde_json::json!({
                    "error": message,
                    "index": index,
                    "details": source.errors(),
                }),
            ),
            ApiError::BatchTooLarge { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                serde_json::json!({ "error": message }),
            ),
            ApiError::Internal(_) => {
                tracing::error!("Internal error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({ "error": message }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
