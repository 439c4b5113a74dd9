use deepfake_shared::{
    ANALYZE_PATH, AnalysisTransport, HEALTH_PATH, HealthStatus, RawResponse, UploadForm,
};
use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::FormData;

/// Origin of the page, e.g. `http://localhost:8081`. Empty when unknown, which
/// leaves request URLs relative to the document.
pub fn page_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

/// Posts analysis forms from the browser with `fetch`.
pub struct BrowserTransport {
    endpoint: String,
}

impl BrowserTransport {
    pub fn same_origin() -> Self {
        Self {
            endpoint: format!("{}{}", page_origin(), ANALYZE_PATH),
        }
    }
}

impl AnalysisTransport for BrowserTransport {
    type File = GlooFile;
    type Error = gloo_net::Error;

    async fn post_form(&self, form: &UploadForm<GlooFile>) -> Result<RawResponse, gloo_net::Error> {
        let form_data = FormData::new().map_err(js_error)?;
        for part in form.parts() {
            let file: &web_sys::File = part.file.as_ref();
            form_data
                .append_with_blob_and_filename(part.role.field_name(), file, &file.name())
                .map_err(js_error)?;
        }

        let response = Request::post(&self.endpoint)
            .body(form_data)?
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        log::debug!("analysis endpoint answered HTTP {} ({} bytes)", status, body.len());

        Ok(RawResponse { status, body })
    }
}

/// Pings the liveness probe once; any failure counts as unreachable.
pub async fn check_health() -> bool {
    let url = format!("{}{}", page_origin(), HEALTH_PATH);
    match Request::get(&url).send().await {
        Ok(response) if response.ok() => match response.json::<HealthStatus>().await {
            Ok(health) => health.is_ok(),
            Err(e) => {
                log::warn!("Unexpected health payload: {}", e);
                false
            }
        },
        Ok(response) => {
            log::warn!("Health check returned HTTP {}", response.status());
            false
        }
        Err(e) => {
            log::warn!("Health check failed: {}", e);
            false
        }
    }
}

fn js_error(value: JsValue) -> gloo_net::Error {
    gloo_net::Error::GlooError(format!("{:?}", value))
}
