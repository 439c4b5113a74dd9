mod config;
mod error;
mod routes;
mod upload;
mod upstream;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use config::GatewayConfig;
use routes::configure_routes;
use std::sync::Arc;
use upload::UploadPolicy;
use upstream::{AnalysisUpstream, ReqwestUpstream};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = GatewayConfig::from_env().map_err(|e| {
        log::error!("Invalid gateway configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    let upstream = ReqwestUpstream::new(&config.upstream_url).map_err(|e| {
        log::error!("Failed to set up analysis upstream: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;
    log::info!("Forwarding analyses to {}", upstream.endpoint());

    if !config.frontend_dir.is_dir() {
        log::warn!(
            "Dashboard directory {} does not exist; build the frontend first",
            config.frontend_dir.display()
        );
    }

    let upstream: Arc<dyn AnalysisUpstream> = Arc::new(upstream);
    let upstream = web::Data::from(upstream);
    let policy = web::Data::new(UploadPolicy::new(config.max_upload_bytes));
    let frontend_dir = config.frontend_dir.clone();
    let bind_address = config.bind_address();

    log::info!("Starting server on {}", bind_address);
    log::info!("Dashboard: http://{}/dashboard/", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(upstream.clone())
            .app_data(policy.clone())
            .configure(|cfg| configure_routes(cfg, frontend_dir.clone()))
    })
    .bind(&bind_address)?
    .run()
    .await
}
