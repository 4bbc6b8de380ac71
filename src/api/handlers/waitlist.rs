//! Waitlist endpoint handlers: signup and count.

use std::net::SocketAddr;

use axum::extract::rejection::JsonRejection;
use axum::extract::{ConnectInfo, State};
use axum::http::header::REFERER;
use axum::http::{Extensions, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{CountResponse, SignupRequest, SignupResponse};
use crate::app_state::AppState;
use crate::domain::SignupMetadata;
use crate::error::{ErrorResponse, WaitlistError};

/// `POST /api/waitlist` — Join the waitlist.
///
/// # Errors
///
/// Returns [`WaitlistError`] on missing fields, invalid email, duplicate
/// email, or store failure.
#[utoipa::path(
    post,
    path = "/api/waitlist",
    tag = "Waitlist",
    summary = "Join the waitlist",
    description = "Validates and normalizes the name and email, rejects already registered emails, stores the entry and returns the total entry count after the insert as `position`.",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Signup accepted", body = SignupResponse),
        (status = 400, description = "Missing fields or invalid email", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 500, description = "Server error", body = ErrorResponse),
    )
)]
pub async fn join_waitlist(
    State(state): State<AppState>,
    extensions: Extensions,
    headers: HeaderMap,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<impl IntoResponse, WaitlistError> {
    let Json(req) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "unreadable signup body");
        WaitlistError::MissingFields
    })?;

    let metadata = signup_metadata(&extensions, &headers);
    let receipt = state
        .waitlist_service
        .submit(req.name.as_deref(), req.email.as_deref(), metadata)
        .await?;

    Ok((StatusCode::CREATED, Json(SignupResponse::from(receipt))))
}

/// `GET /api/waitlist/count` — Number of waitlist entries.
///
/// # Errors
///
/// Returns [`WaitlistError`] on store failure.
#[utoipa::path(
    get,
    path = "/api/waitlist/count",
    tag = "Waitlist",
    summary = "Count waitlist entries",
    description = "Returns the total number of stored waitlist entries.",
    responses(
        (status = 200, description = "Current entry count", body = CountResponse),
        (status = 500, description = "Server error", body = ErrorResponse),
    )
)]
pub async fn waitlist_count(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, WaitlistError> {
    let count = state.waitlist_service.count().await?;
    Ok(Json(CountResponse { count }))
}

/// Waitlist routes. The trailing-slash forms are the ones the signup form
/// calls.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/waitlist", post(join_waitlist))
        .route("/api/waitlist/", post(join_waitlist))
        .route("/api/waitlist/count", get(waitlist_count))
        .route("/api/waitlist/count/", get(waitlist_count))
}

// ── Request Metadata ────────────────────────────────────────────────────

/// Collects the client address (when the server was started with connect
/// info) and the `Referer` header.
fn signup_metadata(extensions: &Extensions, headers: &HeaderMap) -> SignupMetadata {
    let ip_address = extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string());

    let referral_source = headers
        .get(REFERER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string);

    SignupMetadata {
        ip_address,
        referral_source,
    }
}
