//! Types and client logic shared by the dashboard and the gateway.
//!
//! The analysis service speaks one contract: a multipart `POST` carrying up to
//! three media parts (`image`, `video`, `audio`) answered by a JSON analysis
//! result, or by a `{"detail": ...}` body on failure. Everything that can be
//! decided without a browser or a socket lives here so both sides agree on it.

pub mod display;
pub mod error;
pub mod media;
pub mod phase;
pub mod response;
pub mod submit;

pub use display::ResultDisplay;
pub use error::AnalyzeError;
pub use media::{MediaRole, MediaSelection, UploadForm, UploadPart};
pub use phase::AnalysisPhase;
pub use response::{AnalysisReport, AnalysisResult, ComponentScores, ErrorDetail, HealthStatus};
pub use submit::{AnalysisTransport, RawResponse, submit};

/// Path of the multimodal analysis endpoint, relative to the service origin.
pub const ANALYZE_PATH: &str = "/analyze_multimodal/";

/// Path of the liveness probe.
pub const HEALTH_PATH: &str = "/health";
