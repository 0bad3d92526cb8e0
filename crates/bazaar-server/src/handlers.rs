//! Request handlers.
//!
//! Each handler is an independent, stateless function keyed by method and
//! path pattern. Handlers never call one another; the only shared pieces
//! are the injected stores on [`AppState`] and the error mapping in
//! [`crate::api`].

use std::sync::Arc;

use askama::Template;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use bazaar_core::{
    blog_title, lookup_country, slice_states, Course, Error, Offer, Product, Registration, User,
    Validator,
};

use crate::api::{ApiError, CreateProductResponse, RegisterUserResponse, UploadResponse};
use crate::server::AppState;

// === Fixed segments ===

/// `GET /` — hello world.
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Hello World" }))
}

/// `GET /health` — liveness probe.
pub async fn health() -> &'static str {
    "OK"
}

/// `GET /status` — uptime and store counts.
pub async fn server_status(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "running",
        "uptime_seconds": state.start_time.elapsed().as_secs(),
        "products": state.products.len(),
        "users": state.users.all().len(),
    }))
}

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    username: &'static str,
}

/// `GET /home` — server-rendered HTML page with a fixed user context.
pub async fn home() -> Result<Html<String>, ApiError> {
    let page = HomeTemplate {
        username: "Bazaar Visitor",
    };
    let html = page
        .render()
        .map_err(|e| ApiError::Internal(format!("Template rendering failed: {e}")))?;
    Ok(Html(html))
}

// === Path parameters ===

/// `GET /users/{userid}` — integer-typed path parameter. Non-numeric ids
/// are rejected by the extractor before the handler runs.
pub async fn get_user(Path(userid): Path<i64>) -> Json<Value> {
    Json(json!({ "userid": userid }))
}

/// `GET /users/str/{userid}` — the same segment taken as arbitrary text.
pub async fn get_user_str(Path(userid): Path<String>) -> Json<Value> {
    Json(json!({ "userid": userid }))
}

/// `GET /courses/{course_id}` — closed-set lookup. Unknown ids fall
/// through to a generic invalid-id body with a 200, not an error status.
pub async fn get_course(Path(course_id): Path<String>) -> Json<Value> {
    let course = match course_id.parse::<Course>() {
        Ok(course) => course.purchase_message(),
        Err(_) => "Invalid Course Id",
    };
    Json(json!({ "course": course }))
}

/// `GET /files/{*filepath}` — catch-all remainder segment.
pub async fn get_file_path(Path(filepath): Path<String>) -> Json<Value> {
    Json(json!({ "filepath": filepath }))
}

/// `GET /blog/{id}` — fixed-mapping lookup; unknown ids are a real 404.
pub async fn get_blog(Path(id): Path<String>) -> Result<Json<Value>, ApiError> {
    let title = blog_title(&id).ok_or(Error::BlogNotFound { id })?;
    Ok(Json(json!({ "blog": title })))
}

// === Query parameters ===

#[derive(Debug, Deserialize)]
pub(crate) struct CountryQuery {
    country_name: Option<String>,
}

/// `GET /countries?country_name=` — membership test against a fixed list.
pub async fn get_countries(Query(query): Query<CountryQuery>) -> Json<Value> {
    let outcome = lookup_country(query.country_name.as_deref());
    Json(json!({ "detail": outcome.detail() }))
}

fn default_limit() -> usize {
    10
}

#[derive(Debug, Deserialize)]
pub(crate) struct Pagination {
    #[serde(default)]
    skip: usize,
    #[serde(default = "default_limit")]
    limit: usize,
}

/// `GET /states?skip=&limit=` — paginated slice of a fixed list. The
/// slicing behavior is chosen by the server config.
pub async fn get_states(
    State(state): State<Arc<AppState>>,
    Query(page): Query<Pagination>,
) -> Json<Value> {
    let states = slice_states(page.skip, page.limit, state.config.slice_mode);
    Json(json!({ "states": states }))
}

// === Request bodies ===

/// `POST /products` — validates, recomputes tax server-side and appends to
/// the product store.
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    Json(product): Json<Product>,
) -> Result<(StatusCode, Json<CreateProductResponse>), ApiError> {
    product.validate()?;

    let stored = state.products.add(product.with_recomputed_tax());
    tracing::info!(name = %stored.name, price = stored.price, "Product created");

    Ok((
        StatusCode::CREATED,
        Json(CreateProductResponse {
            detail: "Product added".to_string(),
            data: stored,
            products: state.products.all(),
        }),
    ))
}

/// `POST /offers` — validates the nested structure and echoes it back.
pub async fn create_offer(Json(offer): Json<Offer>) -> Result<Json<Offer>, ApiError> {
    offer.validate()?;
    Ok(Json(offer))
}

/// `POST /create_user` — validates the minimal registration shape and
/// echoes it back; nothing is persisted.
pub async fn create_user(Json(user): Json<User>) -> Result<Json<Value>, ApiError> {
    user.validate()?;
    Ok(Json(json!({ "user": user })))
}

/// `POST /register_user` — validates, then registers through the user
/// store. Duplicates are a 409; other registration failures downgrade to a
/// generic 400.
pub async fn register_user(
    State(state): State<Arc<AppState>>,
    Json(registration): Json<Registration>,
) -> Result<(StatusCode, Json<RegisterUserResponse>), ApiError> {
    registration.validate()?;

    let username = registration.username.clone();
    match state.users.register(registration) {
        Ok(users) => {
            tracing::info!(%username, total = users.len(), "User registered");
            Ok((
                StatusCode::CREATED,
                Json(RegisterUserResponse {
                    detail: "User registered".to_string(),
                    users,
                }),
            ))
        }
        Err(Error::DuplicateUser { username }) => {
            Err(ApiError::Conflict(format!("User already exists: {username}")))
        }
        Err(other) => Err(ApiError::BadRequest(other.to_string())),
    }
}

// === Multipart form ===

/// `POST /submit_form` — multipart form with a text field and a file part.
/// The file is read fully into memory and discarded.
pub async fn submit_form(mut multipart: Multipart) -> Result<Json<UploadResponse>, ApiError> {
    let mut assignment: Option<String> = None;
    let mut filename: Option<String> = None;
    let mut size_bytes: Option<usize> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        match field.name() {
            Some("assignment") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Unreadable field: {e}")))?;
                assignment = Some(text);
            }
            Some("assignment_file") => {
                filename = field.file_name().map(ToString::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Unreadable file: {e}")))?;
                size_bytes = Some(bytes.len());
                // Contents are dropped here; nothing is persisted.
            }
            _ => {}
        }
    }

    let mut v = Validator::new();
    v.check(assignment.is_some(), "assignment", "field is required");
    v.check(size_bytes.is_some(), "assignment_file", "file is required");
    v.finish()?;

    let size_bytes = size_bytes.unwrap_or(0);
    tracing::debug!(?filename, size_bytes, "Assignment received and discarded");

    Ok(Json(UploadResponse {
        detail: "Assignment received".to_string(),
        filename,
        size_bytes,
    }))
}
