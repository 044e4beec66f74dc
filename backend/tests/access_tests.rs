//! Role table coverage
//!
//! The authorization matrix lives in `shared::access` as data. These tests
//! pin the matrix so a drive-by edit to an allowed-role set shows up as a
//! test failure rather than a silent privilege change.

use proptest::prelude::*;

use shared::access;
use shared::types::Role;

const ALL_ROLES: [Role; 3] = [Role::Admin, Role::Franchisee, Role::Franchisor];

fn permitted(allowed: &[Role], role: Role) -> bool {
    role.is_any_of(allowed)
}

#[test]
fn user_administration_is_admin_only() {
    for op in [access::LIST_USERS, access::DELETE_USER] {
        assert!(permitted(op, Role::Admin));
        assert!(!permitted(op, Role::Franchisee));
        assert!(!permitted(op, Role::Franchisor));
    }
}

#[test]
fn only_franchisors_publish_businesses_and_franchises() {
    for op in [
        access::CREATE_BUSINESS,
        access::UPDATE_BUSINESS,
        access::CREATE_FRANCHISE,
        access::UPDATE_FRANCHISE,
    ] {
        assert!(permitted(op, Role::Franchisor));
        assert!(!permitted(op, Role::Franchisee));
        assert!(!permitted(op, Role::Admin));
    }
}

#[test]
fn destructive_listing_ops_also_admit_admins() {
    for op in [access::DELETE_BUSINESS, access::DELETE_FRANCHISE] {
        assert!(permitted(op, Role::Franchisor));
        assert!(permitted(op, Role::Admin));
        assert!(!permitted(op, Role::Franchisee));
    }
}

#[test]
fn only_franchisees_submit_and_revise_applications() {
    for op in [access::CREATE_APPLICATION, access::UPDATE_APPLICATION] {
        assert!(permitted(op, Role::Franchisee));
        assert!(!permitted(op, Role::Franchisor));
        assert!(!permitted(op, Role::Admin));
    }
}

#[test]
fn application_review_is_for_franchisors_and_admins() {
    for op in [
        access::UPDATE_APPLICATION_STATUS,
        access::LIST_APPLICATIONS_BY_FRANCHISE,
    ] {
        assert!(permitted(op, Role::Franchisor));
        assert!(permitted(op, Role::Admin));
        assert!(!permitted(op, Role::Franchisee));
    }
}

#[test]
fn global_application_listing_is_admin_only() {
    assert!(permitted(access::LIST_APPLICATIONS, Role::Admin));
    assert!(!permitted(access::LIST_APPLICATIONS, Role::Franchisee));
    assert!(!permitted(access::LIST_APPLICATIONS, Role::Franchisor));
}

fn any_role() -> impl Strategy<Value = Role> {
    prop::sample::select(ALL_ROLES.to_vec())
}

proptest! {
    /// A role passes a gate exactly when it is a member of the allowed set.
    #[test]
    fn membership_decides_every_gate(role in any_role()) {
        let gates: [&[Role]; 6] = [
            access::LIST_USERS,
            access::CREATE_BUSINESS,
            access::DELETE_BUSINESS,
            access::CREATE_APPLICATION,
            access::UPDATE_APPLICATION_STATUS,
            access::LIST_APPLICATIONS,
        ];
        for gate in gates {
            prop_assert_eq!(permitted(gate, role), gate.contains(&role));
        }
    }

}

/// No gate in the table is empty or admits every role. Each operation with a
/// constant is genuinely restricted.
#[test]
fn gates_are_proper_subsets() {
    let gates: [&[Role]; 13] = [
        access::LIST_USERS,
        access::DELETE_USER,
        access::CREATE_BUSINESS,
        access::UPDATE_BUSINESS,
        access::DELETE_BUSINESS,
        access::CREATE_FRANCHISE,
        access::UPDATE_FRANCHISE,
        access::DELETE_FRANCHISE,
        access::LIST_APPLICATIONS,
        access::LIST_APPLICATIONS_BY_FRANCHISE,
        access::CREATE_APPLICATION,
        access::UPDATE_APPLICATION,
        access::UPDATE_APPLICATION_STATUS,
    ];
    for gate in gates {
        assert!(!gate.is_empty());
        assert!(gate.len() < ALL_ROLES.len());
    }
}
