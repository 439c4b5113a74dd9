use std::fmt::Display;

use crate::error::AnalyzeError;
use crate::media::{MediaSelection, UploadForm};
use crate::response::{AnalysisReport, ErrorDetail};

/// Status and body of an HTTP response, as seen by the submit flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a multipart form to the analysis endpoint.
///
/// Implementations issue exactly one `POST` per call and add no headers of
/// their own beyond what the multipart encoding needs.
#[allow(async_fn_in_trait)]
pub trait AnalysisTransport {
    type File;
    type Error: Display;

    async fn post_form(&self, form: &UploadForm<Self::File>) -> Result<RawResponse, Self::Error>;
}

/// Runs one analysis: validate the selection, post it, interpret the answer.
///
/// An empty selection fails before the transport is touched. Any other
/// failure, including an unreachable service or an unexpected body, comes
/// back as an [`AnalyzeError`] carrying a user-facing message.
pub async fn submit<T>(
    transport: &T,
    selection: &MediaSelection<T::File>,
) -> Result<AnalysisReport, AnalyzeError>
where
    T: AnalysisTransport,
    T::File: Clone,
{
    let form = selection.to_form()?;
    log::info!("submitting analysis for {:?}", form.roles());

    let response = transport
        .post_form(&form)
        .await
        .map_err(|e| AnalyzeError::Transport(e.to_string()))?;

    interpret(response)
}

/// Maps a raw response onto a report or an error.
pub fn interpret(response: RawResponse) -> Result<AnalysisReport, AnalyzeError> {
    if !response.is_success() {
        let detail = ErrorDetail::extract(&response.body);
        log::warn!(
            "analysis rejected with HTTP {}: {}",
            response.status,
            detail.as_deref().unwrap_or("<no detail>")
        );
        return Err(AnalyzeError::Server {
            status: response.status,
            detail,
        });
    }

    AnalysisReport::parse(&response.body)
}
