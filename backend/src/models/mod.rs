//! Data transfer types, shared with API consumers.

pub use shared::models::{ApplicationDto, AuthResponse, BusinessDto, FranchiseDto, UserDto};
