//! # Bazaar Core
//!
//! Core types and traits for the Bazaar demo API.
//!
//! This crate provides the foundational pieces used by the HTTP surface:
//! - Common error types
//! - Domain value shapes (products, offers, users)
//! - Explicit validator functions with per-field violation reporting
//! - In-memory store abstractions standing in for a database

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod blog;
pub mod catalog;
pub mod course;
pub mod error;
pub mod geo;
pub mod store;
pub mod user;
pub mod validate;

pub use blog::blog_title;
pub use catalog::{Image, Item, Offer, Product};
pub use course::Course;
pub use error::{Error, Result};
pub use geo::{lookup_country, slice_states, CountryLookup, SliceMode};
pub use store::{MemoryProductStore, MemoryUserStore, ProductStore, UserStore};
pub use user::{Gender, Registration, User};
pub use validate::{ValidationError, Validator, Violation};
