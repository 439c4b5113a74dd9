use std::env;
use std::path::PathBuf;

use url::Url;

use crate::upload::DEFAULT_MAX_UPLOAD_BYTES;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("{name} is not a valid URL: {source}")]
    InvalidUrl {
        name: &'static str,
        source: url::ParseError,
    },
    #[error("{name} must be a positive integer, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Origin of the detection service analysis requests are forwarded to.
    pub upstream_url: Url,
    pub port: u16,
    pub frontend_dir: PathBuf,
    pub max_upload_bytes: usize,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let upstream_raw =
            lookup("ANALYSIS_UPSTREAM_URL").ok_or(ConfigError::Missing("ANALYSIS_UPSTREAM_URL"))?;
        let upstream_url = Url::parse(&upstream_raw).map_err(|source| ConfigError::InvalidUrl {
            name: "ANALYSIS_UPSTREAM_URL",
            source,
        })?;

        let port = match lookup("PORT") {
            Some(value) => parse_positive("PORT", value)?,
            None => 8081,
        };

        let max_upload_bytes = match lookup("MAX_UPLOAD_BYTES") {
            Some(value) => parse_positive("MAX_UPLOAD_BYTES", value)?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        let frontend_dir = lookup("FRONTEND_DIR")
            .map(PathBuf::from)
            .or_else(|| {
                lookup("CARGO_MANIFEST_DIR")
                    .map(|manifest_dir| PathBuf::from(manifest_dir).join("../frontend/dist"))
            })
            .unwrap_or_else(|| PathBuf::from("/usr/src/app/frontend/dist"));

        Ok(Self {
            upstream_url,
            port,
            frontend_dir,
            max_upload_bytes,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_positive<T>(name: &'static str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    match value.trim().parse::<T>() {
        Ok(parsed) if parsed > T::default() => Ok(parsed),
        _ => Err(ConfigError::InvalidNumber { name, value }),
    }
}
