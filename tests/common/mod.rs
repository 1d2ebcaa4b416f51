// Shared by every integration test binary; not all of them use every helper.
#![allow(dead_code)]

use anyhow::Result;
use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use person_api::person::entity::sample_people;
use person_api::routes::{app, AppState};

/// Router over a fresh store seeded with the five sample people.
pub fn seeded_app() -> Router {
    app(AppState::in_memory(sample_people()))
}

/// Router over an empty store.
pub fn empty_app() -> Router {
    app(AppState::in_memory(Vec::new()))
}

/// Drive one request through the router in-process and decode the response.
/// A body-less response (204) comes back as `Value::Null`.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<&Value>,
) -> Result<(StatusCode, HeaderMap, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(v)?))?,
        None => builder.body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    // Axum's own extractor rejections are plain text; everything this
    // service emits itself is JSON.
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    Ok((status, headers, value))
}

/// Convenience for GET requests.
pub async fn get(app: &Router, uri: &str) -> Result<(StatusCode, Value)> {
    let (status, _, value) = send(app, Method::GET, uri, None).await?;
    Ok((status, value))
}

/// Ids of the people in a JSON array payload, in order.
pub fn ids(value: &Value) -> Vec<i64> {
    value
        .as_array()
        .map(|people| {
            people
                .iter()
                .filter_map(|p| p["id"].as_i64())
                .collect()
        })
        .unwrap_or_default()
}
