//! Shared types and models for the Franchise NeXus marketplace
//!
//! This crate contains types shared between the backend and any future
//! clients: the role model, per-operation access tables, transfer objects,
//! and input validation helpers.

pub mod access;
pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
