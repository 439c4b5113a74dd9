use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AnalyzeError;

/// Per-modality scores reported by the analysis service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ComponentScores {
    pub vision_score: f64,
    pub temporal_score: f64,
    pub audio_score: f64,
    pub metadata_score: f64,
}

/// Fused verdict for one analysis request.
///
/// Ranges and label vocabularies belong to the service; they are carried
/// through untouched.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisResult {
    pub components: ComponentScores,
    pub deepfake_score: f64,
    pub classification: String,
    pub risk_level: String,
    pub confidence: f64,
}

/// A typed result together with the body it was read from.
///
/// The raw value keeps any field the typed view does not know about, in the
/// order the service sent it.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub result: AnalysisResult,
    pub raw: Value,
}

impl AnalysisReport {
    pub fn parse(body: &str) -> Result<Self, AnalyzeError> {
        let raw: Value = serde_json::from_str(body)
            .map_err(|e| AnalyzeError::MalformedResponse(format!("body is not JSON: {}", e)))?;
        let result = AnalysisResult::deserialize(&raw)
            .map_err(|e| AnalyzeError::MalformedResponse(e.to_string()))?;
        log::debug!(
            "parsed analysis result: classification={} risk_level={}",
            result.classification,
            result.risk_level
        );
        Ok(Self { result, raw })
    }
}

/// Error body convention: a human-readable message under `detail`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    /// Extracts `detail` from an error body, if it is JSON with a string
    /// `detail` field.
    pub fn extract(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorDetail>(body)
            .ok()
            .map(|error| error.detail)
    }
}

/// Body of the liveness probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
