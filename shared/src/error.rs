/// Everything that can stop an analysis from producing a result.
///
/// Every variant is recoverable: the user can fix the input or simply retry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalyzeError {
    #[error("no media file selected")]
    NoMedia,
    #[error("an analysis is already in flight")]
    Busy,
    #[error("analysis service returned HTTP {status}")]
    Server { status: u16, detail: Option<String> },
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("malformed analysis response: {0}")]
    MalformedResponse(String),
}

impl AnalyzeError {
    /// Text shown to the user in the notification and the error banner.
    pub fn user_message(&self) -> String {
        match self {
            AnalyzeError::NoMedia => "Please upload at least one media file.".to_string(),
            AnalyzeError::Busy => "An analysis is already in progress.".to_string(),
            AnalyzeError::Server {
                detail: Some(detail),
                ..
            } => format!("Analysis failed: {}", detail),
            AnalyzeError::Server {
                status,
                detail: None,
            } => format!("Analysis failed: server returned HTTP {}", status),
            AnalyzeError::Transport(reason) => format!(
                "Analysis failed: could not reach the analysis service ({})",
                reason
            ),
            AnalyzeError::MalformedResponse(_) => {
                "Analysis failed: unexpected response from the analysis service".to_string()
            }
        }
    }

    /// True for errors caught before any request was sent.
    pub fn is_local(&self) -> bool {
        matches!(self, AnalyzeError::NoMedia | AnalyzeError::Busy)
    }
}
