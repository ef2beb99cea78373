//! Cafe route handlers.
//!
//! Each handler is a direct translation from an HTTP request to a single
//! [`CafeRepository`] operation; there is no business logic here beyond
//! argument extraction.

use axum::{
    Form, Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use cafe_wifi_core::{CafeId, Location};

use crate::db::CafeRepository;
use crate::error::{AppError, Result};
use crate::models::{Cafe, NewCafe};
use crate::state::AppState;

/// Envelope for a single cafe record.
#[derive(Debug, Serialize)]
pub struct CafeEnvelope {
    pub cafe: Cafe,
}

/// Envelope for a collection of cafe records.
#[derive(Debug, Serialize)]
pub struct CafesEnvelope {
    pub cafes: Vec<Cafe>,
}

/// Envelope for a success message.
///
/// The flat `{"success": "..."}` shape is used for every mutating endpoint.
#[derive(Debug, Serialize)]
pub struct SuccessEnvelope {
    pub success: String,
}

impl SuccessEnvelope {
    fn new(message: &str) -> Self {
        Self {
            success: message.to_string(),
        }
    }
}

/// Query parameters for `/search`.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub loc: Option<String>,
}

/// Form data for `/add`.
///
/// Field names match the public form contract (`loc`, `toilet`, `wifi`,
/// `sockets`, `calls`), not the column names. Amenity flags arrive as raw
/// strings and go through [`parse_bool`].
#[derive(Debug, Deserialize)]
pub struct AddCafeForm {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub loc: String,
    pub seats: String,
    pub toilet: Option<String>,
    pub wifi: Option<String>,
    pub sockets: Option<String>,
    pub calls: Option<String>,
    pub coffee_price: Option<String>,
}

/// Form data for `/update-price/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdatePriceForm {
    pub new_price: String,
}

/// Form data for `/report-closed/{id}`.
#[derive(Debug, Deserialize)]
pub struct ReportClosedForm {
    #[serde(rename = "api-key")]
    pub api_key: String,
}

/// Get one uniformly-selected cafe.
///
/// An empty store produces a 404 error envelope.
#[instrument(skip(state))]
pub async fn random(State(state): State<AppState>) -> Result<Json<CafeEnvelope>> {
    let cafe = CafeRepository::new(state.pool()).get_random().await?;
    Ok(Json(CafeEnvelope { cafe }))
}

/// Get every cafe in insertion order.
#[instrument(skip(state))]
pub async fn all(State(state): State<AppState>) -> Result<Json<CafesEnvelope>> {
    let cafes = CafeRepository::new(state.pool()).list_all().await?;
    Ok(Json(CafesEnvelope { cafes }))
}

/// Get all cafes at a location.
///
/// The `loc` query parameter is canonicalized before the lookup, so
/// `?loc=peckham` and `?loc=Peckham` run the identical query. Zero matches
/// is a 404 with the error envelope, not an empty 200.
#[instrument(skip(state))]
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<CafesEnvelope>> {
    let loc = query
        .loc
        .ok_or_else(|| AppError::BadRequest("Missing query parameter: loc.".to_string()))?;
    let loc = Location::canonicalize(&loc)
        .map_err(|e| AppError::BadRequest(format!("Invalid loc parameter: {e}.")))?;

    let cafes = CafeRepository::new(state.pool())
        .find_by_location(&loc)
        .await?;

    if cafes.is_empty() {
        return Err(AppError::NotFound(
            "Sorry, we don't have a cafe at that location.".to_string(),
        ));
    }

    Ok(Json(CafesEnvelope { cafes }))
}

/// Add a new cafe from an urlencoded form.
///
/// Duplicate names surface as a 409 error envelope.
#[instrument(skip(state, form), fields(name = %form.name))]
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddCafeForm>,
) -> Result<Json<SuccessEnvelope>> {
    let new_cafe = NewCafe {
        name: form.name,
        map_url: form.map_url,
        img_url: form.img_url,
        location: form.loc,
        seats: form.seats,
        has_toilet: parse_bool(form.toilet.as_deref()),
        has_wifi: parse_bool(form.wifi.as_deref()),
        has_sockets: parse_bool(form.sockets.as_deref()),
        can_take_calls: parse_bool(form.calls.as_deref()),
        coffee_price: form.coffee_price,
    };

    let cafe = CafeRepository::new(state.pool()).insert(&new_cafe).await?;
    tracing::info!(id = %cafe.id, name = %cafe.name, "Cafe added");

    Ok(Json(SuccessEnvelope::new("Successfully added the new cafe.")))
}

/// Update the coffee price of a cafe.
#[instrument(skip(state, form))]
pub async fn update_price(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<UpdatePriceForm>,
) -> Result<Json<SuccessEnvelope>> {
    CafeRepository::new(state.pool())
        .update_price(CafeId::new(id), &form.new_price)
        .await?;
    tracing::info!(id, "Coffee price updated");

    Ok(Json(SuccessEnvelope::new("Successfully updated the price.")))
}

/// Delete a cafe that has closed.
///
/// Requires the shared api key in the `api-key` form field; the comparison
/// is constant-time. A wrong key is a 401 and leaves the record in place.
#[instrument(skip(state, form))]
pub async fn report_closed(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<ReportClosedForm>,
) -> Result<Json<SuccessEnvelope>> {
    if !state.config().api_key_matches(&form.api_key) {
        return Err(AppError::Unauthorized(
            "Sorry, that's not allowed. Make sure you have the correct api-key.".to_string(),
        ));
    }

    CafeRepository::new(state.pool()).delete(CafeId::new(id)).await?;
    tracing::info!(id, "Cafe deleted");

    Ok(Json(SuccessEnvelope::new(
        "Successfully deleted the cafe from the database.",
    )))
}

/// Parse an amenity flag from a form value.
///
/// Only `"true"` and `"1"` (case-insensitive) are true; anything else,
/// including an absent field, is false.
fn parse_bool(value: Option<&str>) -> bool {
    match value {
        Some(v) => v.eq_ignore_ascii_case("true") || v.trim() == "1",
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_truthy() {
        assert!(parse_bool(Some("true")));
        assert!(parse_bool(Some("True")));
        assert!(parse_bool(Some("TRUE")));
        assert!(parse_bool(Some("1")));
    }

    #[test]
    fn test_parse_bool_falsy() {
        assert!(!parse_bool(None));
        assert!(!parse_bool(Some("")));
        assert!(!parse_bool(Some("0")));
        assert!(!parse_bool(Some("no")));
        assert!(!parse_bool(Some("yes")));
        // "false" is not a truthy value
        assert!(!parse_bool(Some("false")));
    }
}
