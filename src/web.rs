use crate::app::{Animation, DemoView, HelloWorldDemo, Theme};
use crate::greeting::{self, LANDING_MESSAGES, Language, TimeOfDay};
use askama::Template;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    handler::HandlerWithoutStateExt,
    http::{HeaderMap, HeaderValue, Method, StatusCode, Uri, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use chrono::{Local, SecondsFormat, Timelike, Utc};
use include_dir::{Dir, include_dir};
use once_cell::sync::Lazy;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use serde_json::json;
use std::any::Any;
use std::convert::Infallible;
use std::backtrace::Backtrace;
use std::fmt;
use std::future::Future;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;
use sysinfo::{ProcessesToUpdate, System};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{debug, error, info, warn};

type SharedState = Arc<AppState>;

static ASSETS: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/assets");
static PROCESS_START: Lazy<Instant> = Lazy::new(Instant::now);

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; style-src 'self' 'unsafe-inline'; script-src 'self'; img-src 'self' data: https:";
const PAGE_CACHE_CONTROL: &str = "public, max-age=3600";
const JSON_UTF8: &str = "application/json; charset=utf-8";

/// Paths advertised by `/api` and by the 404 response.
pub const ENDPOINT_PATHS: [&str; 7] = [
    "/",
    "/hello",
    "/api/hello",
    "/health",
    "/api",
    "/api/accessibility",
    "/demo",
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct EndpointDoc {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<&'static str>,
}

const fn endpoint(path: &'static str, description: &'static str) -> EndpointDoc {
    EndpointDoc {
        method: "GET",
        path,
        description,
        query: None,
    }
}

pub const ENDPOINTS: [EndpointDoc; 7] = [
    endpoint("/", "Welcome message with accessible UI"),
    EndpointDoc {
        method: "GET",
        path: "/hello",
        description: "Hello world greeting with accessibility features",
        query: Some("name (optional)"),
    },
    endpoint("/api/hello", "Simple Hello World API endpoint"),
    endpoint("/health", "Health check endpoint with accessibility status"),
    endpoint("/api", "API documentation"),
    endpoint("/api/accessibility", "Detailed accessibility information"),
    endpoint("/demo", "Interactive multi-language greeting demo"),
];

const HELLO_FEATURES: [&str; 6] = [
    "semantic_html",
    "aria_labels",
    "keyboard_navigation",
    "screen_reader_support",
    "high_contrast",
    "responsive_design",
];

const PAGE_FEATURES: [&str; 10] = [
    "Semantic HTML5 elements",
    "ARIA labels and landmarks",
    "Keyboard navigation support",
    "Screen reader compatibility",
    "High contrast color scheme",
    "Responsive design for all devices",
    "Reduced motion support",
    "Dark mode support",
    "Focus indicators",
    "Skip navigation links",
];

const SCREEN_READERS: [&str; 4] = ["NVDA", "JAWS", "VoiceOver", "TalkBack"];

/// Runtime environment taken from `NODE_ENV`. Unrecognised names are kept
/// verbatim and reported as given.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
    Test,
    Other(String),
}

impl Environment {
    pub fn as_str(&self) -> &str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
            Environment::Test => "test",
            Environment::Other(name) => name,
        }
    }

    /// Only development exposes panic stacks.
    pub fn is_development(&self) -> bool {
        *self == Environment::Development
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Environment {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Ok(match name {
            "" | "development" => Environment::Development,
            "production" => Environment::Production,
            "test" => Environment::Test,
            _ => {
                warn!(environment = name, "unrecognised environment, passing it through");
                Environment::Other(name.to_string())
            }
        })
    }
}

#[derive(Debug, Clone)]
pub struct WebConfig {
    pub addr: SocketAddr,
    pub environment: Environment,
    /// Allowed CORS origin; `*` allows any.
    pub frontend_url: String,
    /// Served ahead of the embedded assets when set.
    pub static_dir: Option<PathBuf>,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            environment: Environment::default(),
            frontend_url: "*".to_string(),
            static_dir: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Environment,
    pub port: u16,
    pub frontend_url: String,
    pub static_dir: Option<PathBuf>,
}

impl From<&WebConfig> for AppState {
    fn from(config: &WebConfig) -> Self {
        Self {
            environment: config.environment.clone(),
            port: config.addr.port(),
            frontend_url: config.frontend_url.clone(),
            static_dir: config.static_dir.clone(),
        }
    }
}

#[derive(Debug)]
pub enum WebError {
    Io(std::io::Error),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebError::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

impl std::error::Error for WebError {}

impl From<std::io::Error> for WebError {
    fn from(value: std::io::Error) -> Self {
        WebError::Io(value)
    }
}

pub async fn serve(config: WebConfig) -> Result<(), WebError> {
    let listener = TcpListener::bind(config.addr).await?;
    run(listener, &config, shutdown_signal()).await
}

/// Serves on an already bound listener until `shutdown` resolves.
pub async fn run<F>(listener: TcpListener, config: &WebConfig, shutdown: F) -> Result<(), WebError>
where
    F: Future<Output = ()> + Send + 'static,
{
    Lazy::force(&PROCESS_START);
    let local = listener.local_addr()?;
    let mut state = AppState::from(config);
    state.port = local.port();
    let router = build_router(Arc::new(state));
    info!(
        addr = %local,
        environment = %config.environment,
        frontend = %config.frontend_url,
        static_dir = ?config.static_dir,
        endpoints = ?ENDPOINT_PATHS,
        "Hello World server listening"
    );
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("HTTP server exited");
    Ok(())
}

pub fn build_router(state: SharedState) -> Router {
    let development = state.environment.is_development();
    let cors_origin = state.frontend_url.clone();
    let router = Router::new()
        .route("/", get(home))
        .route("/hello", get(hello))
        .route("/api/hello", get(api_hello))
        .route("/health", get(health))
        .route("/api", get(api_info))
        .route("/api/accessibility", get(api_accessibility))
        .route("/demo", get(demo_page))
        .route("/assets/*path", get(asset));
    let router = match &state.static_dir {
        Some(dir) => router.fallback_service(
            ServeDir::new(dir).not_found_service(not_found.into_service()),
        ),
        None => router.fallback(not_found),
    };
    with_layers(router.with_state(state), development, &cors_origin)
}

/// Wraps routes in the panic, security header, CORS, trace and compression
/// layers, innermost first.
fn with_layers(router: Router, development: bool, frontend_url: &str) -> Router {
    router
        .layer(CatchPanicLayer::custom(
            move |err: Box<dyn Any + Send + 'static>| panic_response(err, development),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static(CONTENT_SECURITY_POLICY),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .layer(cors_layer(frontend_url))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().include_headers(true))
                .on_response(DefaultOnResponse::new().include_headers(true)),
        )
        .layer(CompressionLayer::new())
}

fn cors_layer(frontend_url: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);
    let origin = frontend_url.trim();
    if origin.is_empty() || origin == "*" {
        return layer.allow_origin(AnyOrigin);
    }
    match HeaderValue::from_str(origin) {
        Ok(value) => layer.allow_origin(value),
        Err(err) => {
            error!(origin, error = %err, "invalid FRONTEND_URL, allowing any origin");
            layer.allow_origin(AnyOrigin)
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = signal::ctrl_c().await;
    };
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        if let Ok(mut stream) = signal(SignalKind::terminate()) {
            let _ = stream.recv().await;
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("SIGINT received, shutting down gracefully"),
        _ = terminate => info!("SIGTERM received, shutting down gracefully"),
    }
}

/// ISO-8601 UTC with millisecond precision.
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn panic_response(err: Box<dyn Any + Send + 'static>, development: bool) -> Response {
    let message = if let Some(text) = err.downcast_ref::<String>() {
        text.clone()
    } else if let Some(text) = err.downcast_ref::<&str>() {
        text.to_string()
    } else {
        "Internal Server Error".to_string()
    };
    error!(%message, "request handler panicked");
    let mut detail = json!({ "message": message, "status": 500 });
    if development {
        detail["stack"] = json!(Backtrace::force_capture().to_string());
    }
    let payload = json!({ "error": detail, "timestamp": timestamp() });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
}

fn render_html<T: Template>(template: &T) -> Response {
    match template.render() {
        Ok(body) => Html(body).into_response(),
        Err(err) => {
            error!(error = %err, "failed to render page");
            let payload = json!({
                "error": { "message": "Failed to render page", "status": 500 },
                "timestamp": timestamp(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

async fn home(State(state): State<SharedState>) -> Response {
    if let Some(dir) = &state.static_dir {
        let index = dir.join("index.html");
        match tokio::fs::read_to_string(&index).await {
            Ok(body) => return cached(Html(body).into_response()),
            Err(err) => debug!(path = %index.display(), error = %err, "no index.html, rendering built-in page"),
        }
    }
    let page = IndexTemplate {
        environment: state.environment.as_str(),
        version: APP_VERSION,
        endpoints: &ENDPOINTS,
        features: &PAGE_FEATURES,
        messages: &LANDING_MESSAGES,
        example_link: hello_link("Ada Lovelace"),
    };
    cached(render_html(&page))
}

fn cached(mut response: Response) -> Response {
    if response.status().is_success() {
        response.headers_mut().insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static(PAGE_CACHE_CONTROL),
        );
    }
    response
}

fn hello_link(name: &str) -> String {
    format!("/hello?name={}", utf8_percent_encode(name, NON_ALPHANUMERIC))
}

/// Repeated `name` parameters are joined with commas; the query is never
/// rejected.
fn name_param(pairs: &[(String, String)]) -> Option<String> {
    let names: Vec<&str> = pairs
        .iter()
        .filter(|(key, _)| key == "name")
        .map(|(_, value)| value.as_str())
        .collect();
    (!names.is_empty()).then(|| names.join(","))
}

#[derive(Debug, Serialize)]
struct HelloPayload {
    message: String,
    greeting: &'static str,
    timestamp: String,
    accessibility: HelloAccessibility,
    status: &'static str,
    version: &'static str,
}

#[derive(Debug, Serialize)]
struct HelloAccessibility {
    wcag_compliant: bool,
    features: [&'static str; 6],
}

async fn hello(Query(pairs): Query<Vec<(String, String)>>) -> Response {
    let name = name_param(&pairs);
    let payload = HelloPayload {
        message: greeting::hello_message(name.as_deref()),
        greeting: "Welcome to our Hello World application",
        timestamp: timestamp(),
        accessibility: HelloAccessibility {
            wcag_compliant: true,
            features: HELLO_FEATURES,
        },
        status: "success",
        version: APP_VERSION,
    };
    (
        [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8))],
        Json(payload),
    )
        .into_response()
}

async fn api_hello(State(state): State<SharedState>) -> impl IntoResponse {
    Json(json!({
        "message": "Hello World!",
        "timestamp": timestamp(),
        "environment": state.environment,
    }))
}

#[derive(Debug, Default, Clone, Copy, Serialize)]
struct MemoryRaw {
    rss: u64,
    virtual_size: u64,
}

#[derive(Debug, Serialize)]
struct MemoryPayload {
    used: String,
    total: String,
    raw: MemoryRaw,
}

#[derive(Debug, Serialize)]
struct HealthPayload {
    status: &'static str,
    uptime: f64,
    version: &'static str,
    environment: Environment,
    memory: MemoryPayload,
    accessibility_features: serde_json::Value,
    port: u16,
    platform: &'static str,
    timestamp: String,
}

fn process_memory() -> MemoryRaw {
    let Ok(pid) = sysinfo::get_current_pid() else {
        return MemoryRaw::default();
    };
    let mut system = System::new();
    system.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
    system
        .process(pid)
        .map(|process| MemoryRaw {
            rss: process.memory(),
            virtual_size: process.virtual_memory(),
        })
        .unwrap_or_default()
}

fn megabytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}

async fn health(State(state): State<SharedState>) -> impl IntoResponse {
    let raw = process_memory();
    Json(HealthPayload {
        status: "healthy",
        uptime: PROCESS_START.elapsed().as_secs_f64(),
        version: APP_VERSION,
        environment: state.environment.clone(),
        memory: MemoryPayload {
            used: megabytes(raw.rss),
            total: megabytes(raw.virtual_size),
            raw,
        },
        accessibility_features: json!({
            "wcag_2_1_compliant": true,
            "keyboard_accessible": true,
            "screen_reader_compatible": true,
            "high_contrast_support": true,
            "responsive_design": true,
        }),
        port: state.port,
        platform: std::env::consts::OS,
        timestamp: timestamp(),
    })
}

async fn api_info(State(state): State<SharedState>) -> impl IntoResponse {
    Json(json!({
        "name": "Hello World API",
        "version": APP_VERSION,
        "description": "Accessible Hello World REST API with comprehensive features",
        "message": "Welcome to Hello World API",
        "endpoints": ENDPOINTS,
        "features": {
            "accessibility": true,
            "responsive": true,
            "security_headers": true,
            "compression": true,
            "logging": true,
        },
        "environment": state.environment,
        "timestamp": timestamp(),
    }))
}

async fn api_accessibility() -> impl IntoResponse {
    let now = timestamp();
    Json(json!({
        "compliance": {
            "wcag_version": "2.1",
            "level": "AA",
            "features": {
                "semantic_html": true,
                "aria_labels": true,
                "keyboard_navigation": true,
                "screen_reader_support": true,
                "high_contrast_colors": true,
                "responsive_design": true,
                "skip_links": true,
                "focus_indicators": true,
                "reduced_motion_support": true,
                "dark_mode_support": true,
            },
        },
        "testing": {
            "last_audit": now,
            "tools_compatible": SCREEN_READERS,
        },
        "timestamp": now,
    }))
}

#[derive(Debug, Clone, Serialize)]
struct SelectOption {
    value: &'static str,
    label: &'static str,
    selected: bool,
}

#[derive(Debug, Serialize)]
struct CatalogEntry {
    code: &'static str,
    name: &'static str,
    text: &'static str,
    subtitle: &'static str,
    dir: &'static str,
    times: [&'static str; 4],
}

fn demo_catalog_json() -> String {
    let entries: Vec<CatalogEntry> = Language::ALL
        .into_iter()
        .map(|lang| {
            let greeting = lang.demo_greeting();
            CatalogEntry {
                code: lang.code(),
                name: lang.native_name(),
                text: greeting.text,
                subtitle: greeting.subtitle,
                dir: lang.direction(),
                times: [
                    TimeOfDay::Morning,
                    TimeOfDay::Afternoon,
                    TimeOfDay::Evening,
                    TimeOfDay::Night,
                ]
                .map(|time| lang.time_greeting(time)),
            }
        })
        .collect();
    // Embedded in a <script> block, so `<` must never appear literally.
    serde_json::to_string(&entries)
        .unwrap_or_else(|_| "[]".to_string())
        .replace('<', "\\u003c")
}

async fn demo_page() -> Response {
    let now = Local::now();
    let clock = now.format("%H:%M:%S").to_string();
    let demo = HelloWorldDemo::load(Instant::now(), now.hour(), &clock);
    let selection = demo.selection();
    let page = DemoTemplate {
        view: demo.view(),
        languages: Language::ALL
            .into_iter()
            .map(|lang| SelectOption {
                value: lang.code(),
                label: lang.native_name(),
                selected: lang == selection.language,
            })
            .collect(),
        themes: Theme::ALL
            .into_iter()
            .map(|theme| SelectOption {
                value: theme.as_str(),
                label: theme.label(),
                selected: theme == selection.theme,
            })
            .collect(),
        animations: Animation::ALL
            .into_iter()
            .map(|animation| SelectOption {
                value: animation.as_str(),
                label: animation.as_str(),
                selected: animation == selection.animation,
            })
            .collect(),
        greeting_count: demo.stats().greeting_count,
        catalog_json: demo_catalog_json(),
    };
    render_html(&page)
}

async fn asset(Path(path): Path<String>) -> Response {
    let Some(file) = ASSETS.get_file(&path) else {
        return (StatusCode::NOT_FOUND, "asset not found").into_response();
    };
    let content_type = asset_mime(&path);
    (
        [(header::CONTENT_TYPE, content_type.as_ref().to_string())],
        file.contents().to_vec(),
    )
        .into_response()
}

fn asset_mime(path: &str) -> mime::Mime {
    match path.rsplit('.').next() {
        Some("css") => mime::TEXT_CSS_UTF_8,
        Some("js") => mime::APPLICATION_JAVASCRIPT_UTF_8,
        Some("svg") => mime::IMAGE_SVG,
        Some("json") => mime::APPLICATION_JSON,
        Some("html") => mime::TEXT_HTML_UTF_8,
        _ => mime::TEXT_PLAIN_UTF_8,
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NotFoundDetail {
    message: String,
    status: u16,
    available_endpoints: [&'static str; 7],
    timestamp: String,
}

/// Mirrors `req.accepts('html')`: a missing Accept header or a wildcard
/// counts as HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    let Some(accept) = headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
    else {
        return true;
    };
    accept.split(',').any(|item| {
        let mut parts = item.split(';');
        let media = parts.next().unwrap_or_default().trim().to_ascii_lowercase();
        let refused = parts.any(|param| {
            param
                .trim()
                .strip_prefix("q=")
                .and_then(|q| q.parse::<f32>().ok())
                == Some(0.0)
        });
        !refused && matches!(media.as_str(), "text/html" | "text/*" | "*/*")
    })
}

async fn not_found(method: Method, uri: Uri, headers: HeaderMap) -> Response {
    let requested = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    info!(%method, uri = requested, "404 route not found");
    if accepts_html(&headers) {
        let page = NotFoundTemplate {
            method: method.as_str(),
            target: requested,
            endpoints: ENDPOINT_PATHS.join(", "),
        };
        let mut response = render_html(&page);
        if response.status().is_success() {
            *response.status_mut() = StatusCode::NOT_FOUND;
        }
        return response;
    }
    let payload = json!({
        "error": NotFoundDetail {
            message: format!("Route {method} {requested} not found"),
            status: StatusCode::NOT_FOUND.as_u16(),
            available_endpoints: ENDPOINT_PATHS,
            timestamp: timestamp(),
        }
    });
    (StatusCode::NOT_FOUND, Json(payload)).into_response()
}

#[derive(Template)]
#[template(
    source = r##"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <meta name="description" content="Accessible Hello World Web Application - Built with accessibility in mind" />
    <title>Hello World - Accessible Web Application</title>
    <link rel="stylesheet" href="/assets/styles.css" />
  </head>
  <body>
    <a href="#main-content" class="skip-link">Skip to main content</a>
    <header role="banner" class="site-header">
      <h1>Hello World - Accessible Web Application</h1>
      <p>Welcome to the Hello World API! - Built with Web Browser Accessibility in mind</p>
    </header>
    <main id="main-content" role="main" tabindex="-1">
      <section class="card" aria-labelledby="welcome-heading">
        <div class="status-indicator status-success" role="status" aria-live="polite">
          <span aria-label="Success">✅</span> Application is running successfully!
        </div>
        <h2 id="welcome-heading">Welcome to Our Accessible Hello World App</h2>
        <p>This application demonstrates web browser accessibility features and follows WCAG 2.1 guidelines.</p>
        <div class="actions">
          <button type="button" class="btn" id="say-hello" aria-describedby="hello-description">Say Hello</button>
          <a href="{{ example_link|safe }}" class="btn" role="button">API Hello Endpoint</a>
          <a href="/api/hello" class="btn" role="button">New API Hello</a>
          <a href="/health" class="btn" role="button">Health Check</a>
          <a href="/api/accessibility" class="btn" role="button">Accessibility Info</a>
          <a href="/api" class="btn" role="button">API Documentation</a>
          <a href="/demo" class="btn" role="button">Interactive Demo</a>
        </div>
        <p id="hello-description" class="hint">Click to display a personalized greeting message</p>
        <div id="message-area" role="region" aria-live="polite" aria-label="Dynamic messages"></div>
        <ul id="landing-messages" hidden>
          {% for message in messages %}<li>{{ message }}</li>{% endfor %}
        </ul>
      </section>
      <section class="card" aria-labelledby="api-heading">
        <h2 id="api-heading">API Information</h2>
        <p><strong>Version:</strong> {{ version }}</p>
        <p><strong>Environment:</strong> {{ environment }}</p>
        <p><strong>Available Endpoints:</strong></p>
        <ul>
          {% for endpoint in endpoints %}
          <li><strong>{{ endpoint.method }} {{ endpoint.path }}</strong> - {{ endpoint.description }}</li>
          {% endfor %}
        </ul>
        <h3>Accessibility Features</h3>
        <ul class="accessibility-features" role="list">
          {% for feature in features %}<li role="listitem">{{ feature }}</li>{% endfor %}
        </ul>
      </section>
    </main>
    <footer role="contentinfo" class="site-footer">
      <p>&copy; 2024 Accessible Hello World App. Built with accessibility first.</p>
    </footer>
    <script src="/assets/landing.js" defer></script>
  </body>
</html>"##,
    ext = "html"
)]
struct IndexTemplate<'a> {
    environment: &'a str,
    version: &'a str,
    endpoints: &'a [EndpointDoc],
    features: &'a [&'static str],
    messages: &'a [&'static str],
    example_link: String,
}

#[derive(Template)]
#[template(
    source = r##"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Hello World - Interactive Demo</title>
    <link rel="stylesheet" href="/assets/styles.css" />
  </head>
  <body>
    <a href="#demo-main" class="skip-link">Skip to main content</a>
    <div id="aria-live-region" class="sr-only" aria-live="polite" aria-atomic="true"></div>
    <main id="demo-main" tabindex="-1">
      <section id="helloContainer" class="{{ view.theme_class }}" dir="{{ view.direction }}" aria-labelledby="helloText">
        <h1 id="helloText" class="hello-text{% if let Some(class) = view.animation_class %} {{ class }}{% endif %}" aria-label="{{ view.aria_label }}">{{ view.text }}</h1>
        <p id="subtitle" class="subtitle">{{ view.subtitle }}</p>
        <p id="timeInfo" class="time-info">{{ view.time_info }}</p>
        <div id="loading" class="loading" role="status" hidden>Loading…</div>
      </section>
      <section class="card controls" aria-label="Demo controls">
        <label for="languageSelect">Language</label>
        <select id="languageSelect">
          {% for option in languages %}<option value="{{ option.value }}"{% if option.selected %} selected{% endif %}>{{ option.label }}</option>{% endfor %}
        </select>
        <label for="themeSelect">Theme</label>
        <select id="themeSelect">
          {% for option in themes %}<option value="{{ option.value }}"{% if option.selected %} selected{% endif %}>{{ option.label }}</option>{% endfor %}
        </select>
        <label for="animationSelect">Animation</label>
        <select id="animationSelect">
          {% for option in animations %}<option value="{{ option.value }}"{% if option.selected %} selected{% endif %}>{{ option.label }}</option>{% endfor %}
        </select>
        <div class="actions">
          <button type="button" class="btn" id="randomBtn" aria-keyshortcuts="Control+R">Random greeting</button>
          <button type="button" class="btn" id="timeBtn" aria-keyshortcuts="Control+T">Time greeting</button>
          <button type="button" class="btn" id="resetBtn" aria-keyshortcuts="Control+H">Reset</button>
        </div>
      </section>
      <section class="card stats" aria-label="Session statistics">
        <p>Greetings shown: <span id="greetingCount">{{ greeting_count }}</span></p>
        <p>Language switches: <span id="languageSwitches">0</span></p>
        <p>Theme changes: <span id="themeChanges">0</span></p>
        <p>Session time: <span id="sessionTime">00:00</span></p>
      </section>
      <section class="card" aria-labelledby="a11y-heading">
        <h2 id="a11y-heading">Accessibility settings</h2>
        <label><input type="checkbox" id="reducedMotion" /> Reduce motion</label>
        <label><input type="checkbox" id="highContrast" /> High contrast</label>
        <label for="fontSize">Font size</label>
        <select id="fontSize">
          <option value="small">Small</option>
          <option value="medium" selected>Medium</option>
          <option value="large">Large</option>
          <option value="extra-large">Extra large</option>
        </select>
      </section>
    </main>
    <script type="application/json" id="greeting-catalog">{{ catalog_json|safe }}</script>
    <script src="/assets/demo.js" defer></script>
  </body>
</html>"##,
    ext = "html"
)]
struct DemoTemplate<'a> {
    view: &'a DemoView,
    languages: Vec<SelectOption>,
    themes: Vec<SelectOption>,
    animations: Vec<SelectOption>,
    greeting_count: u64,
    catalog_json: String,
}

#[derive(Template)]
#[template(
    source = r##"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Page Not Found - 404</title>
    <link rel="stylesheet" href="/assets/styles.css" />
  </head>
  <body>
    <main role="main" class="error-container">
      <h1>404 - Page Not Found</h1>
      <p>The requested endpoint {{ method }} {{ target }} does not exist</p>
      <p><strong>Available endpoints:</strong> {{ endpoints }}</p>
      <a href="/" role="button">Return to Home</a>
    </main>
  </body>
</html>"##,
    ext = "html"
)]
struct NotFoundTemplate<'a> {
    method: &'a str,
    target: &'a str,
    endpoints: String,
}
