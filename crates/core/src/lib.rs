//! Cafe & Wifi Core - Shared types library.
//!
//! This crate provides the common types used by the Cafe & Wifi API:
//! - `api` - HTTP service exposing CRUD operations over cafe records
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! handlers. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and canonical locations

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
