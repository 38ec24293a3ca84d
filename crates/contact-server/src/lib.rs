//! HTTP server assembly for the contact API.
//!
//! Wraps [`contact_api::api_router`] with the cross-cutting layers the binary
//! needs: a single-origin CORS policy, request ids, and per-request tracing
//! spans.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::{
  Router,
  http::{HeaderName, HeaderValue, Method, Request, header},
};
use contact_core::{ContactService, store::ContactStore};
use serde::Deserialize;
use tower_http::{
  cors::{AllowOrigin, CorsLayer},
  request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
  trace::TraceLayer,
};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `CONTACT_*` environment variables. Every field has a default.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
  pub host:        String,
  pub port:        u16,
  pub store_path:  PathBuf,
  /// The one origin allowed to call the API from a browser.
  pub cors_origin: String,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:        "127.0.0.1".to_string(),
      port:        8080,
      store_path:  PathBuf::from("contacts.db"),
      cors_origin: "http://localhost:3000".to_string(),
    }
  }
}

impl ServerConfig {
  /// Layer the optional TOML file at `path` under `CONTACT_*` environment
  /// variables.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("CONTACT").try_parsing(true))
      .build()?
      .try_deserialize()
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Only `cors_origin` may make cross-origin calls, with the methods and
/// headers the contact form uses.
pub fn cors_layer(origin: HeaderValue) -> CorsLayer {
  CorsLayer::new()
    .allow_origin(AllowOrigin::exact(origin))
    .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
    .allow_headers([header::CONTENT_TYPE])
}

/// Build the full application: API routes plus tracing, request-id and CORS
/// layers.
pub fn app<S>(service: Arc<ContactService<S>>, cors_origin: HeaderValue) -> Router
where
  S: ContactStore + 'static,
{
  let x_request_id = HeaderName::from_static("x-request-id");

  contact_api::api_router(service)
    .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
    .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
      let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");
      tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
      )
    }))
    .layer(SetRequestIdLayer::new(x_request_id, MakeRequestUuid))
    .layer(cors_layer(cors_origin))
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{body::Body, http::StatusCode};
  use contact_store_sqlite::SqliteStore;
  use tower::ServiceExt as _;

  const ORIGIN: &str = "http://localhost:3000";

  async fn make_app() -> Router {
    let store = SqliteStore::open_in_memory().await.unwrap();
    app(
      Arc::new(ContactService::new(store)),
      HeaderValue::from_static(ORIGIN),
    )
  }

  fn preflight(origin: &str) -> Request<Body> {
    Request::builder()
      .method("OPTIONS")
      .uri("/api/contact")
      .header(header::ORIGIN, origin)
      .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
      .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
      .body(Body::empty())
      .unwrap()
  }

  #[tokio::test]
  async fn preflight_from_configured_origin_is_allowed() {
    let resp = make_app().await.oneshot(preflight(ORIGIN)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let allowed = resp
      .headers()
      .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
      .unwrap()
      .to_str()
      .unwrap();
    assert_eq!(allowed, ORIGIN);
  }

  #[tokio::test]
  async fn preflight_from_other_origin_gets_no_allow_header() {
    let resp = make_app()
      .await
      .oneshot(preflight("http://evil.example"))
      .await
      .unwrap();
    assert!(!resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
  }

  #[tokio::test]
  async fn responses_carry_request_id() {
    let req = Request::builder()
      .uri("/api/contact/health")
      .body(Body::empty())
      .unwrap();
    let resp = make_app().await.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));
  }

  #[tokio::test]
  async fn supplied_request_id_is_echoed() {
    let req = Request::builder()
      .uri("/api/contact/health")
      .header("x-request-id", "abc-123")
      .body(Body::empty())
      .unwrap();
    let resp = make_app().await.oneshot(req).await.unwrap();
    let echoed = resp.headers().get("x-request-id").unwrap().to_str().unwrap();
    assert_eq!(echoed, "abc-123");
  }

  // ── Configuration ───────────────────────────────────────────────────────────

  #[test]
  fn missing_config_file_yields_defaults() {
    let cfg = ServerConfig::load(Path::new("/nonexistent/contact-config.toml")).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.cors_origin, ORIGIN);
    assert_eq!(cfg.store_path, PathBuf::from("contacts.db"));
  }

  #[test]
  fn config_file_overrides_defaults() {
    let dir = std::env::temp_dir().join(format!("contact-server-cfg-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    std::fs::write(
      &path,
      "port = 9090\ncors_origin = \"https://portfolio.example\"\n",
    )
    .unwrap();

    let cfg = ServerConfig::load(&path).unwrap();
    assert_eq!(cfg.port, 9090);
    assert_eq!(cfg.cors_origin, "https://portfolio.example");
    assert_eq!(cfg.host, "127.0.0.1");

    let _ = std::fs::remove_dir_all(&dir);
  }
}
