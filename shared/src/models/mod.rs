//! Transfer objects for the marketplace API
//!
//! All DTOs use camelCase field names on the wire.

pub mod application;
pub mod business;
pub mod franchise;
pub mod user;

pub use application::*;
pub use business::*;
pub use franchise::*;
pub use user::*;
