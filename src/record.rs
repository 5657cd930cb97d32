//! Persistence record
//!
//! The opaque blob handed to the persistence layer: the survey, the result
//! computed from it, who it belongs to and when it was calculated. Storage
//! schema is the persistence layer's concern; this is only the JSON shape.

use crate::calculator::FootprintResult;
use crate::survey::LifestyleSurvey;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FootprintRecord {
    pub user_id: String,
    pub calculated_at: DateTime<Utc>,
    pub survey: LifestyleSurvey,
    pub result: FootprintResult,
}

impl FootprintRecord {
    /// Record stamped with the current time
    pub fn new(user_id: impl Into<String>, survey: LifestyleSurvey, result: FootprintResult) -> Self {
        Self::with_timestamp(user_id, Utc::now(), survey, result)
    }

    pub fn with_timestamp(
        user_id: impl Into<String>,
        calculated_at: DateTime<Utc>,
        survey: LifestyleSurvey,
        result: FootprintResult,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            calculated_at,
            survey,
            result,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to serialize footprint record")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse footprint record JSON")
    }
}
