//! Cafe domain types.

use serde::Serialize;
use sqlx::FromRow;

use cafe_wifi_core::CafeId;

/// A cafe record as stored in the database.
///
/// Serializes to the exact 11-field shape the JSON envelopes expose.
#[derive(Debug, Clone, Serialize, FromRow)]
#[allow(clippy::struct_excessive_bools)] // amenity flags mirror the table columns
pub struct Cafe {
    /// Unique cafe ID, assigned by the store on insert.
    pub id: CafeId,
    /// Cafe name, unique across all records.
    pub name: String,
    /// Link to the cafe on a map service.
    pub map_url: String,
    /// Link to a photo of the cafe.
    pub img_url: String,
    /// Free-text location (e.g. "Peckham").
    pub location: String,
    /// Free-text seat count (e.g. "20-30").
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    /// Price of a coffee, if known (e.g. "£2.75").
    pub coffee_price: Option<String>,
}

/// A cafe record to be inserted, before an id has been assigned.
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct NewCafe {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}
