//! Request routing and handlers.

use crate::error::{json_response, validation_response, ApiError, Response};
use crate::models::{Avenger, Profile};
use bytes::Bytes;
use fieldcheck::{Error, Record, Validator};
use http::{header, Method, Request, StatusCode};
use http_body_util::{BodyExt, LengthLimitError, Limited};
use hyper::body::Body;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Default request body limit (1 MiB).
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

/// Message returned for bodies that are not the expected JSON shape.
pub const INVALID_BODY: &str = "Invalid Body Input";

/// Shared, read-only state for every request.
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    pub validator: Validator,
    pub body_limit: usize,
}

impl AppState {
    pub fn new(validator: Validator) -> Self {
        Self {
            validator,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }

    pub fn with_body_limit(mut self, limit: usize) -> Self {
        self.body_limit = limit;
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Validator::default())
    }
}

#[derive(Serialize)]
struct Message {
    message: &'static str,
}

/// Dispatch a request to its handler.
pub async fn route<B>(state: AppState, req: Request<B>) -> Response
where
    B: Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let path = req.uri().path().to_string();

    match (req.method(), path.as_str()) {
        (&Method::POST, "/profile") => {
            create::<Profile, _>(state, req, "Profile created successfully").await
        }
        (&Method::POST, "/avengers") => {
            create::<Avenger, _>(state, req, "Avenger registered successfully").await
        }
        (method, "/profile" | "/avengers") => {
            let mut response = ApiError::method_not_allowed(format!(
                "Method {} not allowed for {}",
                method, path
            ))
            .into_response();
            response
                .headers_mut()
                .insert(header::ALLOW, header::HeaderValue::from_static("POST"));
            response
        }
        (method, _) => {
            ApiError::not_found(format!("No route found for {} {}", method, path)).into_response()
        }
    }
}

/// Decode a JSON body, validate it and answer `201` or the full report.
async fn create<T, B>(state: AppState, req: Request<B>, created: &'static str) -> Response
where
    T: DeserializeOwned + Record,
    B: Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let record: T = match decode(req, state.body_limit).await {
        Ok(record) => record,
        Err(err) => return err.into_response(),
    };

    match state.validator.validate(&record) {
        Ok(()) => json_response(StatusCode::CREATED, &Message { message: created }),
        Err(Error::Validation(report)) => {
            tracing::debug!(
                record = record.record_name(),
                violations = report.len(),
                "request body rejected"
            );
            validation_response(&report)
        }
        Err(err) => {
            tracing::error!(error = %err, "validator misconfigured");
            ApiError::internal("Validation rules are misconfigured").into_response()
        }
    }
}

async fn decode<T, B>(req: Request<B>, limit: usize) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let body = Limited::new(req.into_body(), limit);
    let bytes: Bytes = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(err) if err.downcast_ref::<LengthLimitError>().is_some() => {
            return Err(ApiError::payload_too_large(format!(
                "Request body exceeds {} bytes",
                limit
            )))
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to read request body");
            return Err(ApiError::bad_request(INVALID_BODY));
        }
    };

    let value: Value = serde_json::from_slice(&bytes).map_err(|err| {
        tracing::debug!(error = %err, "request body is not valid JSON");
        ApiError::bad_request(INVALID_BODY)
    })?;

    // Derived structs also accept sequences positionally; records are objects only.
    if !value.is_object() {
        tracing::debug!("request body is not a JSON object");
        return Err(ApiError::bad_request(INVALID_BODY));
    }

    T::deserialize(value).map_err(|err| {
        tracing::debug!(error = %err, "request body does not match this route");
        ApiError::bad_request(INVALID_BODY)
    })
}
