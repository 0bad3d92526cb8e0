//! Wire types for the HTTP surface: response shapes and the error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use bazaar_core::{Error, Product, Registration, ValidationError, Violation};

// === Responses ===

/// Response for `POST /products`: the stored product plus the full current
/// collection.
#[derive(Debug, Clone, Serialize)]
pub struct CreateProductResponse {
    /// Human-readable confirmation.
    pub detail: String,
    /// The product as stored, tax recomputed.
    pub data: Product,
    /// Every stored product, in insertion order.
    pub products: Vec<Product>,
}

/// Response for `POST /register_user`: the accumulated user list.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterUserResponse {
    /// Human-readable confirmation.
    pub detail: String,
    /// Every registered user, in insertion order.
    pub users: Vec<Registration>,
}

/// Response for `POST /submit_form`: the upload was read and discarded.
#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    /// Human-readable confirmation.
    pub detail: String,
    /// Original filename of the uploaded part, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Size of the uploaded file in bytes.
    pub size_bytes: usize,
}

// === Error mapping ===

/// Error type for handler results, mapped onto HTTP statuses.
#[derive(Debug)]
pub enum ApiError {
    /// Declarative constraint failure; 422 with the violations enumerated.
    Validation(ValidationError),
    /// Domain conflict (duplicate username); 409.
    Conflict(String),
    /// Unresolved lookup; 404.
    NotFound(String),
    /// Other caught client error; 400.
    BadRequest(String),
    /// Unexpected server-side failure; 500.
    Internal(String),
}

/// Serialized error body: a detail line, plus the violation list for
/// validation failures.
#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    violations: Vec<Violation>,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorBody {
        match self {
            Self::Validation(err) => ErrorBody {
                detail: err.summary(),
                violations: err.violations.clone(),
            },
            Self::Conflict(detail)
            | Self::NotFound(detail)
            | Self::BadRequest(detail)
            | Self::Internal(detail) => ErrorBody {
                detail: detail.clone(),
                violations: Vec::new(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(%status, detail = %self.body().detail, "Request failed");
        }
        (status, Json(self.body())).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Validation(inner) => Self::Validation(inner),
            Error::DuplicateUser { username } => {
                Self::Conflict(format!("User already exists: {username}"))
            }
            Error::BlogNotFound { id } => Self::NotFound(format!("Blog not found: {id}")),
            other => Self::Internal(other.to_string()),
        }
    }
}
