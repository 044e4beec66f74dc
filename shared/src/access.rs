//! Per-operation allowed-role tables
//!
//! Authorization on the marketplace is role-based, not per-resource: an
//! operation is permitted when the caller's role appears in its allowed set.
//! Keeping the sets here, as named constants, means the role-to-operation map
//! lives in exactly one place instead of being scattered across handlers.
//!
//! Operations without a constant here are open to any authenticated caller
//! (reads by id, owner/industry/location listings, own-profile updates,
//! application deletion).

use crate::types::Role;

pub const LIST_USERS: &[Role] = &[Role::Admin];
pub const DELETE_USER: &[Role] = &[Role::Admin];

pub const CREATE_BUSINESS: &[Role] = &[Role::Franchisor];
pub const UPDATE_BUSINESS: &[Role] = &[Role::Franchisor];
pub const DELETE_BUSINESS: &[Role] = &[Role::Franchisor, Role::Admin];

pub const CREATE_FRANCHISE: &[Role] = &[Role::Franchisor];
pub const UPDATE_FRANCHISE: &[Role] = &[Role::Franchisor];
pub const DELETE_FRANCHISE: &[Role] = &[Role::Franchisor, Role::Admin];

pub const LIST_APPLICATIONS: &[Role] = &[Role::Admin];
pub const LIST_APPLICATIONS_BY_FRANCHISE: &[Role] = &[Role::Franchisor, Role::Admin];
pub const CREATE_APPLICATION: &[Role] = &[Role::Franchisee];
pub const UPDATE_APPLICATION: &[Role] = &[Role::Franchisee];
pub const UPDATE_APPLICATION_STATUS: &[Role] = &[Role::Franchisor, Role::Admin];
