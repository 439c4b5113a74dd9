use deepfake_shared::{ANALYZE_PATH, UploadForm};
use futures::FutureExt;
use futures::future::BoxFuture;
use reqwest::multipart::{Form, Part};
use url::Url;

use crate::upload::UploadedFile;

/// What the detection service answered, passed back to the client verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("invalid upstream url: {0}")]
    Url(#[from] url::ParseError),
    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// The external service that scores uploads.
pub trait AnalysisUpstream: Send + Sync {
    fn forward(
        &self,
        form: UploadForm<UploadedFile>,
    ) -> BoxFuture<'_, Result<UpstreamResponse, UpstreamError>>;
}

#[derive(Clone)]
pub struct ReqwestUpstream {
    client: reqwest::Client,
    endpoint: Url,
}

impl ReqwestUpstream {
    pub fn new(origin: &Url) -> Result<Self, UpstreamError> {
        Ok(Self {
            client: reqwest::Client::new(),
            endpoint: origin.join(ANALYZE_PATH)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn build_form(form: UploadForm<UploadedFile>) -> Result<Form, UpstreamError> {
        let mut multipart = Form::new();
        for part in form.into_parts() {
            let file = part.file;
            let mut body = Part::bytes(file.bytes).file_name(file.filename);
            if let Some(content_type) = file.content_type.as_deref() {
                body = body.mime_str(content_type)?;
            }
            multipart = multipart.part(part.role.field_name(), body);
        }
        Ok(multipart)
    }
}

impl AnalysisUpstream for ReqwestUpstream {
    fn forward(
        &self,
        form: UploadForm<UploadedFile>,
    ) -> BoxFuture<'_, Result<UpstreamResponse, UpstreamError>> {
        async move {
            let roles = form.roles();
            let multipart = Self::build_form(form)?;

            let response = self
                .client
                .post(self.endpoint.clone())
                .multipart(multipart)
                .send()
                .await?;

            let status = response.status().as_u16();
            let content_type = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);
            let body = response.bytes().await?.to_vec();

            log::info!(
                "Upstream answered HTTP {} for {:?} ({} bytes)",
                status,
                roles,
                body.len()
            );
            Ok::<_, UpstreamError>(UpstreamResponse {
                status,
                content_type,
                body,
            })
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_sits_at_the_service_origin() {
        let upstream = ReqwestUpstream::new(&Url::parse("http://detector:8000").unwrap()).unwrap();
        assert_eq!(
            upstream.endpoint().as_str(),
            "http://detector:8000/analyze_multimodal/"
        );

        let upstream =
            ReqwestUpstream::new(&Url::parse("https://scan.example.com/v1/").unwrap()).unwrap();
        assert_eq!(
            upstream.endpoint().as_str(),
            "https://scan.example.com/analyze_multimodal/"
        );
    }
}
