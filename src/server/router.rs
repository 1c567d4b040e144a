use crate::db::DbActorHandle;
use crate::error::TriviaError;
use crate::quiz::QuizRng;
use crate::server::routes;

use axum::{
    Router,
    extract::Request,
    http::{
        HeaderName, HeaderValue, Method, Version,
        header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT},
    },
    middleware::{self, Next},
    response::{IntoResponse, Response},
};
use base64::Engine as _;
use rand::RngCore;
use std::any::Any;
use std::time::Instant;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
};
use tracing::{error, info, warn};

const MAX_REQUEST_ID_LEN: usize = 128;
const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

fn generate_request_id() -> String {
    // 96 bits => 16 chars base64url (no padding).
    let mut bytes = [0u8; 12];
    rand::rng().fill_bytes(&mut bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

fn format_http_version(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "HTTP/0.9",
        Version::HTTP_10 => "HTTP/1.0",
        Version::HTTP_11 => "HTTP/1.1",
        Version::HTTP_2 => "HTTP/2",
        Version::HTTP_3 => "HTTP/3",
        _ => "HTTP/?",
    }
}

#[derive(Clone)]
pub struct TriviaState {
    pub db: DbActorHandle,
    pub rng: QuizRng,
}

impl TriviaState {
    pub fn new(db: DbActorHandle, rng: QuizRng) -> Self {
        Self { db, rng }
    }
}

async fn not_found_handler() -> TriviaError {
    TriviaError::NotFound("no route".to_string())
}

/// Turns a handler panic into the 500 envelope.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| err.downcast_ref::<&str>().map(|s| (*s).to_string()))
        .unwrap_or_else(|| "unknown panic payload".to_string());
    TriviaError::Internal(format!("handler panicked: {detail}")).into_response()
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
}

async fn access_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let version = req.version();

    let request_id = req
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty() && v.len() <= MAX_REQUEST_ID_LEN)
        .map(str::to_string)
        .unwrap_or_else(generate_request_id);

    let user_agent = req
        .headers()
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let start = Instant::now();
    let mut resp = next.run(req).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        resp.headers_mut().insert(X_REQUEST_ID, value);
    }

    let status = resp.status();
    let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
    let path = uri.path();
    let protocol = format_http_version(version);

    macro_rules! log_access {
        ($level:ident) => {
            $level!(
                "| {:>3} | {} | {:^7} | {:<8} | {} | {}ms | {}",
                status.as_u16(),
                request_id,
                method.as_str(),
                protocol,
                path,
                latency_ms,
                user_agent
            )
        };
    }

    if status.is_server_error() {
        log_access!(error);
    } else if status.is_client_error() {
        log_access!(warn);
    } else {
        log_access!(info);
    }

    resp
}

pub fn trivia_router(state: TriviaState) -> Router {
    Router::new()
        .merge(routes::router())
        .fallback(not_found_handler)
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors_layer())
        .layer(middleware::from_fn(access_log))
}
