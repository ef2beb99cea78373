//! Domain models for the API.

pub mod cafe;

pub use cafe::{Cafe, NewCafe};
