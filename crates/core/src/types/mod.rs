//! Core types for the Cafe & Wifi API.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod location;

pub use id::*;
pub use location::{Location, LocationError};
