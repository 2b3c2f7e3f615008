//! Driftwood Core - Shared types library.
//!
//! This crate provides common types used by the Driftwood Supply storefront:
//! type-safe IDs for the entities the hosted commerce API hands us, and the
//! price shape that API returns.
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. The hosted
//! commerce API is the source of truth for every value here; nothing in this
//! crate computes totals or prices.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and the API's price shape

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
