use actix_files::Files;
use actix_multipart::Multipart;
use actix_web::http::{StatusCode, header};
use actix_web::{HttpMessage, HttpRequest, HttpResponse, web};
use deepfake_shared::{ANALYZE_PATH, HEALTH_PATH, HealthStatus, MediaSelection};
use log::{error, info};
use std::path::PathBuf;

use crate::error::GatewayError;
use crate::upload::{UploadError, UploadPolicy};
use crate::upstream::AnalysisUpstream;

pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: PathBuf) {
    configure_api(cfg);
    cfg.service(web::resource("/").route(web::get().to(redirect_to_dashboard)))
        .service(Files::new("/dashboard", frontend_dir).index_file("index.html"));
}

pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource(HEALTH_PATH).route(web::get().to(health)))
        .service(web::resource(ANALYZE_PATH).route(web::post().to(analyze_multimodal)));
}

async fn health() -> HttpResponse {
    info!("Health check pinged");
    HttpResponse::Ok().json(HealthStatus::ok())
}

async fn redirect_to_dashboard() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/dashboard/"))
        .finish()
}

fn is_multipart(req: &HttpRequest) -> bool {
    matches!(req.mime_type(), Ok(Some(mime)) if mime.type_().as_str() == "multipart")
}

async fn analyze_multimodal(
    req: HttpRequest,
    payload: Multipart,
    policy: web::Data<UploadPolicy>,
    upstream: web::Data<dyn AnalysisUpstream>,
) -> Result<HttpResponse, GatewayError> {
    // Bodies that are not multipart carry no parts at all
    let selection = if is_multipart(&req) {
        policy.read_media(payload).await.inspect_err(|e| {
            log::warn!("Rejected multimodal upload: {}", e);
        })?
    } else {
        MediaSelection::new()
    };

    let form = selection.into_form().map_err(|_| {
        log::warn!("Rejected multimodal upload: no modality");
        UploadError::NoModality
    })?;

    let total_bytes: usize = form.parts().iter().map(|part| part.file.bytes.len()).sum();
    info!(
        "Forwarding multimodal analysis for {:?} ({} bytes)",
        form.roles(),
        total_bytes
    );

    let response = upstream.forward(form).await.inspect_err(|e| {
        error!("Analysis upstream failed: {}", e);
    })?;

    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = response
        .content_type
        .unwrap_or_else(|| "application/json".to_string());

    Ok(HttpResponse::build(status)
        .content_type(content_type)
        .body(response.body))
}
