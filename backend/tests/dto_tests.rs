//! Wire-format checks for the shared transfer types
//!
//! API consumers depend on camelCase field names and the ROLE_* role
//! vocabulary. These tests pin the JSON shapes.

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use serde_json::json;

use shared::models::{ApplicationDto, AuthResponse, BusinessDto, FranchiseDto, UserDto};
use shared::types::Role;

#[test]
fn user_serializes_with_camel_case_and_wire_role() {
    let user = UserDto {
        id: 7,
        first_name: "Ada".to_string(),
        last_name: "Okafor".to_string(),
        email: "ada@example.com".to_string(),
        phone_number: None,
        profile_image: None,
        role: Role::Franchisor,
    };

    let value = serde_json::to_value(&user).unwrap();
    assert_eq!(
        value,
        json!({
            "id": 7,
            "firstName": "Ada",
            "lastName": "Okafor",
            "email": "ada@example.com",
            "phoneNumber": null,
            "profileImage": null,
            "role": "ROLE_FRANCHISOR",
        })
    );
}

#[test]
fn auth_response_shape() {
    let response = AuthResponse {
        token: "abc.def.ghi".to_string(),
        user_id: 42,
        email: "ada@example.com".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Okafor".to_string(),
        role: Role::Admin,
    };

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(
        value,
        json!({
            "token": "abc.def.ghi",
            "userId": 42,
            "email": "ada@example.com",
            "firstName": "Ada",
            "lastName": "Okafor",
            "role": "ROLE_ADMIN",
        })
    );
}

#[test]
fn business_investment_field_uses_camel_case() {
    let business = BusinessDto {
        id: 3,
        name: "Bean Culture".to_string(),
        description: Some("Specialty coffee".to_string()),
        industry: Some("Food & Beverage".to_string()),
        location: Some("Lagos".to_string()),
        logo: None,
        website: None,
        founded: Some("2015".to_string()),
        investment_required: Some(Decimal::new(250_000_00, 2)),
        number_of_locations: Some(12),
        owner_id: 7,
    };

    // Decimal amounts serialize as strings to keep monetary precision.
    let value = serde_json::to_value(&business).unwrap();
    assert_eq!(value["investmentRequired"], json!("250000.00"));
    assert_eq!(value["numberOfLocations"], json!(12));
    assert_eq!(value["ownerId"], json!(7));
}

#[test]
fn franchise_links_and_amounts_round_trip() {
    let raw = json!({
        "id": 11,
        "name": "Bean Culture Express",
        "description": null,
        "industry": "Food & Beverage",
        "country": "Nigeria",
        "city": "Lagos",
        "logo": null,
        "initialInvestment": 50000.0,
        "ongoingFees": 1200.5,
        "requirements": null,
        "supportProvided": null,
        "trainingProgram": "6 weeks on-site",
        "contractLength": 60,
        "businessId": 3,
    });

    let franchise: FranchiseDto = serde_json::from_value(raw).unwrap();
    assert_eq!(franchise.business_id, 3);
    assert_eq!(franchise.contract_length, Some(60));
    assert_eq!(franchise.initial_investment, Some(Decimal::new(50_000_0, 1)));
}

#[test]
fn application_serializes_links_and_timestamp() {
    let application = ApplicationDto {
        id: 5,
        status: "Pending".to_string(),
        submission_date: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
        cover_letter: Some("I run two cafes already.".to_string()),
        resume: None,
        financial_statement: None,
        applicant_id: 9,
        franchise_id: 11,
    };

    let value = serde_json::to_value(&application).unwrap();
    assert_eq!(value["applicantId"], json!(9));
    assert_eq!(value["franchiseId"], json!(11));
    assert_eq!(value["status"], json!("Pending"));
    assert_eq!(value["submissionDate"], json!("2024-03-01T09:30:00Z"));
    assert_eq!(value["coverLetter"], json!("I run two cafes already."));
}

#[test]
fn unknown_role_string_is_rejected() {
    let raw = json!({
        "id": 1,
        "firstName": "Ada",
        "lastName": "Okafor",
        "email": "ada@example.com",
        "phoneNumber": null,
        "profileImage": null,
        "role": "ROLE_SUPERUSER",
    });

    assert!(serde_json::from_value::<UserDto>(raw).is_err());
}
