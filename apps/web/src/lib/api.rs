//! HTTP helpers for the JSON API with consistent timeouts and error handling.
//! Feature clients use these helpers to avoid duplicating request setup and to
//! enforce a predictable timeout policy. The bearer token is attached only
//! when the caller passes one; the helpers never read session state
//! themselves.

use super::{config::AppConfig, errors::AppError};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::to_string;
use web_sys::{AbortController, FormData};

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Fetches JSON, attaching the bearer token when present.
pub async fn get_json<T: DeserializeOwned>(path: &str, token: Option<&str>) -> Result<T, AppError> {
    let url = build_url(path);
    let token = token.map(str::to_string);
    let response = send_with_timeout(move |signal| {
        with_bearer(Request::get(&url), token.as_deref())
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Fetches a plain-text body (used for CSV exports).
pub async fn get_text(path: &str, token: Option<&str>) -> Result<String, AppError> {
    let url = build_url(path);
    let token = token.map(str::to_string);
    let response = send_with_timeout(move |signal| {
        with_bearer(Request::get(&url), token.as_deref())
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    if response.ok() {
        response
            .text()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to read response: {err}")))
    } else {
        Err(http_error(response).await)
    }
}

/// Posts JSON and parses a JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    token: Option<&str>,
) -> Result<T, AppError> {
    send_json_body(Request::post(&build_url(path)), body, token).await
}

/// Puts JSON and parses a JSON response.
pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    token: Option<&str>,
) -> Result<T, AppError> {
    send_json_body(Request::put(&build_url(path)), body, token).await
}

/// Sends a body-less PATCH (used for idempotent toggles) and parses JSON.
pub async fn patch_json<T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
) -> Result<T, AppError> {
    let url = build_url(path);
    let token = token.map(str::to_string);
    let response = send_with_timeout(move |signal| {
        with_bearer(Request::patch(&url), token.as_deref())
            .abort_signal(Some(signal))
            .body("")
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Sends a DELETE and parses a JSON response.
pub async fn delete_json<T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
) -> Result<T, AppError> {
    let url = build_url(path);
    let token = token.map(str::to_string);
    let response = send_with_timeout(move |signal| {
        with_bearer(Request::delete(&url), token.as_deref())
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Posts multipart form data (document uploads). The browser sets the
/// multipart boundary header itself, so no content type is added here.
pub async fn post_form<T: DeserializeOwned>(
    path: &str,
    form: &FormData,
    token: Option<&str>,
) -> Result<T, AppError> {
    let url = build_url(path);
    let token = token.map(str::to_string);
    let form = form.clone();
    let response = send_with_timeout(move |signal| {
        with_bearer(Request::post(&url), token.as_deref())
            .abort_signal(Some(signal))
            .body(form)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

async fn send_json_body<B: Serialize, T: DeserializeOwned>(
    builder: RequestBuilder,
    body: &B,
    token: Option<&str>,
) -> Result<T, AppError> {
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let token = token.map(str::to_string);
    let response = send_with_timeout(move |signal| {
        with_bearer(builder, token.as_deref())
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Attaches the bearer credential when a token is present.
fn with_bearer(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

/// Builds a URL from the configured API base URL and the provided path.
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    let base = config.api_base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<gloo_net::http::Request, AppError>,
) -> Result<Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(http_error(response).await)
    }
}

async fn http_error(response: Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    AppError::Http {
        status,
        message: server_message(body),
    }
}

/// Extracts the server's `msg` field when the error body is JSON; otherwise
/// trims and truncates the raw body for display.
fn server_message(body: String) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(&body) {
        if let Some(msg) = value.get("msg").and_then(|msg| msg.as_str()) {
            let msg = msg.trim();
            if !msg.is_empty() {
                return msg.to_string();
            }
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
