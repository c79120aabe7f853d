use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use serde_json::json;
use std::{
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};
use tower_http::services::{ServeDir, ServeFile};

use crate::config::{parse_log_level, parse_non_empty_string, parse_u64_with_bounds};
use crate::diagnostics::{Diagnostics, LogLevel, DEFAULT_LOG_LEVEL};

const DEFAULT_PORT: u64 = 8080;
const PORT_BOUNDS: (u64, u64) = (1, 65_535);
const DEFAULT_DIST_DIR: &str = "dist";
const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub dist_dir: PathBuf,
    pub log_level: LogLevel,
}

impl ServerConfig {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_u64_with_bounds(lookup("PORT"), DEFAULT_PORT, PORT_BOUNDS);
        let dist_dir = parse_non_empty_string(lookup("DIST_DIR"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));

        Self {
            port: u16::try_from(port).unwrap_or(DEFAULT_PORT as u16),
            dist_dir,
            log_level: parse_log_level(lookup("LOG_LEVEL"), DEFAULT_LOG_LEVEL),
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }
}

pub fn router(config: &ServerConfig) -> Router {
    let diagnostics = Diagnostics::new(config.log_level);
    let static_service = ServeDir::new(&config.dist_dir)
        .not_found_service(ServeFile::new(config.dist_dir.join("index.html")));

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(static_service)
        .layer(middleware::from_fn_with_state(diagnostics, log_requests))
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();
    let diagnostics = Diagnostics::new(config.log_level);
    let bind_address = format!("0.0.0.0:{}", config.port);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    diagnostics.event(
        LogLevel::Info,
        "server.listening",
        json!({
            "url": format!("http://127.0.0.1:{}", config.port),
            "distDir": config.dist_dir.display().to_string(),
        }),
    );
    axum::serve(listener, router(&config)).await?;
    Ok(())
}

async fn healthz() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn log_requests(
    State(diagnostics): State<Diagnostics>,
    request: Request,
    next: Next,
) -> Response {
    let request_id = resolve_request_id(request.headers());
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    let level = if response.status().is_server_error() {
        LogLevel::Error
    } else {
        LogLevel::Debug
    };
    diagnostics.event(
        level,
        "http.request",
        json!({
            "requestId": request_id,
            "method": method,
            "path": path,
            "status": response.status().as_u16(),
        }),
    );

    response
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
        .unwrap_or_else(generate_request_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_serve_dist_on_8080() {
        let config = ServerConfig::from_lookup(|_| None);

        assert_eq!(config.port, 8080);
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn invalid_port_falls_back_to_default() {
        let config = ServerConfig::from_lookup(|name| match name {
            "PORT" => Some("70000".to_string()),
            "DIST_DIR" => Some(" public ".to_string()),
            _ => None,
        });

        assert_eq!(config.port, 8080);
        assert_eq!(config.dist_dir, PathBuf::from("public"));
    }

    #[test]
    fn incoming_request_id_is_preserved() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static(" abc-123 "));

        assert_eq!(resolve_request_id(&headers), "abc-123");
    }

    #[test]
    fn missing_request_id_is_generated() {
        let first = resolve_request_id(&HeaderMap::new());
        let second = resolve_request_id(&HeaderMap::new());

        assert!(first.starts_with("req-"));
        assert_ne!(first, second);
    }
}
