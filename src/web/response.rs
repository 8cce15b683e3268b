//! The json envelopes we send back.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::error::UpstreamError;

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[derive(Serialize, Debug)]
pub struct RegionTrends {
    pub success: bool,
    pub region: String,
    pub trends: Vec<String>,
    pub count: usize,
    pub timestamp: String,
}

impl RegionTrends {
    pub fn new(region: String, trends: Vec<String>) -> Self {
        Self {
            success: true,
            region,
            count: trends.len(),
            trends,
            timestamp: now(),
        }
    }
}

/// Trends for several countries, serialized as one key per country next to
/// `success`.
#[derive(Serialize, Debug)]
pub struct Overview {
    pub success: bool,
    #[serde(flatten)]
    pub countries: serde_json::Map<String, serde_json::Value>,
    pub timestamp: String,
}

impl Overview {
    pub fn new(countries: serde_json::Map<String, serde_json::Value>) -> Self {
        Self {
            success: true,
            countries,
            timestamp: now(),
        }
    }
}

#[derive(Serialize, Debug)]
struct FailureBody {
    success: bool,
    error: String,
    region: String,
}

/// A region we couldn't get trends for. `region` is whatever the client asked
/// for.
#[derive(Debug)]
pub struct Failure {
    pub error: UpstreamError,
    pub region: String,
}

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        let body = FailureBody {
            success: false,
            error: self.error.to_string(),
            region: self.region,
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
