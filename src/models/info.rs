//! Service information, status code translations and API error bodies

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Engine information returned by the `info` endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Info {
    pub engine_version: String,
    pub criteria_version: String,
    pub max_assessments: i32,
    pub current_assessments: i32,
    /// Milliseconds to wait between starting new assessments
    pub new_assessment_cool_off: i64,
    pub messages: Vec<String>,
}

impl Info {
    /// Whether another assessment can be started right now
    pub fn has_capacity(&self) -> bool {
        self.current_assessments < self.max_assessments
    }
}

/// Translations of the `statusDetails` codes used in endpoint results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatusCodes {
    pub status_details: BTreeMap<String, String>,
}

impl StatusCodes {
    pub fn translate(&self, code: &str) -> Option<&str> {
        self.status_details.get(code).map(String::as_str)
    }
}

/// Error body sent by the service alongside 4xx and 5xx responses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiErrorResponse {
    pub errors: Vec<ApiError>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for ApiErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            if e.field.is_empty() {
                write!(f, "{}", e.message)?;
            } else {
                write!(f, "{}: {}", e.field, e.message)?;
            }
        }
        Ok(())
    }
}
