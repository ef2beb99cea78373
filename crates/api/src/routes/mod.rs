//! HTTP route handlers for the cafe API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /                    - Landing page
//! GET    /health              - Liveness check
//! GET    /health/ready        - Readiness check (database ping)
//!
//! # Cafes
//! GET    /random              - One uniformly-selected cafe
//! GET    /all                 - Every cafe, insertion order
//! GET    /search?loc=         - Cafes at a location (canonicalized)
//! POST   /add                 - Add a cafe (urlencoded form)
//! PATCH  /update-price/{id}   - Update a cafe's coffee price
//! DELETE /report-closed/{id}  - Delete a cafe (requires api-key form field)
//! ```

pub mod cafes;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Html,
    routing::{delete, get, patch, post},
};

use crate::state::AppState;

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .route("/random", get(cafes::random))
        .route("/all", get(cafes::all))
        .route("/search", get(cafes::search))
        .route("/add", post(cafes::add))
        .route("/update-price/{id}", patch(cafes::update_price))
        .route("/report-closed/{id}", delete(cafes::report_closed))
}

/// Landing page.
///
/// A static string, not a template: the API surface is JSON and this page
/// only points readers at it.
async fn home() -> Html<&'static str> {
    Html(
        "<h1>Cafe &amp; Wifi API</h1>\
         <p>A simple API for cafes to work from. \
         Try <a href=\"/random\">/random</a> or <a href=\"/all\">/all</a>.</p>",
    )
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies database connectivity before returning OK.
/// Returns 503 Service Unavailable if the database is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").fetch_one(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
