//! Request handlers and response envelopes.
//!
//! # Responsibilities
//! - Serve the static greeting on `GET /`
//! - Validate and echo JSON objects on `POST /data`
//!
//! # Design Decisions
//! - Responses are typed Serialize structs, not ad-hoc maps
//! - `POST /data` reads raw bytes instead of using the `Json`
//!   extractor: an unparseable body and a non-object value must
//!   produce the identical 400 response, so both flow through the
//!   same validation branch rather than the framework's rejection

use axum::{
    body::Bytes,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};

/// Body returned by `GET /`.
#[derive(Serialize)]
pub struct Greeting {
    pub message: &'static str,
}

/// Body returned by `POST /data` on success.
#[derive(Serialize)]
pub struct Processed {
    pub processed: bool,
    pub data: Value,
}

/// Body returned by `POST /data` on validation failure.
#[derive(Serialize)]
pub struct ValidationFailure {
    pub error: &'static str,
}

/// `GET /` — static greeting.
pub async fn home() -> Json<Greeting> {
    Json(Greeting {
        message: "Hello, World!",
    })
}

/// `POST /data` — echo the payload back if it is a JSON object.
pub async fn process_data(body: Bytes) -> Response {
    match parse_object(&body) {
        Some(data) => {
            tracing::debug!(keys = data.len(), "Processing data payload");
            (
                StatusCode::OK,
                Json(Processed {
                    processed: true,
                    data: Value::Object(data),
                }),
            )
                .into_response()
        }
        None => {
            tracing::debug!("Rejecting invalid data payload");
            (
                StatusCode::BAD_REQUEST,
                Json(ValidationFailure {
                    error: "Invalid data format",
                }),
            )
                .into_response()
        }
    }
}

/// Parse a request body, accepting only the JSON object variant.
///
/// Arrays, scalars, null, and garbage bytes all map to `None`.
fn parse_object(body: &[u8]) -> Option<Map<String, Value>> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}
