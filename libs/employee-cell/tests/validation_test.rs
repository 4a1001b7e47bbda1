use chrono::NaiveDate;

use employee_cell::models::{CreateEmployeeRequest, UpdateEmployeeRequest};
use shared_models::error::AppError;
use shared_models::gender::Gender;

fn base_request() -> CreateEmployeeRequest {
    CreateEmployeeRequest {
        name: "Budi Santoso".to_string(),
        username: "budi_s".to_string(),
        password: "Rahasia!123".to_string(),
        gender: Gender::Male,
        birthdate: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
    }
}

#[test]
fn valid_request_passes() {
    assert!(base_request().validate().is_ok());
}

#[test]
fn short_name_is_rejected() {
    let mut request = base_request();
    request.name = "Bo".to_string();

    assert!(matches!(
        request.validate(),
        Err(AppError::Validation { code: "employee/validation-error", .. })
    ));
}

#[test]
fn username_with_spaces_is_rejected() {
    let mut request = base_request();
    request.username = "budi santoso".to_string();

    assert!(request.validate().is_err());
}

#[test]
fn weak_password_is_rejected() {
    let mut request = base_request();
    request.password = "password".to_string();

    assert!(request.validate().is_err());
}

#[test]
fn empty_patch_is_valid() {
    let patch = UpdateEmployeeRequest::default();

    assert!(patch.validate().is_ok());
}

#[test]
fn patch_validates_only_provided_fields() {
    let patch = UpdateEmployeeRequest {
        username: Some("x".to_string()),
        ..Default::default()
    };

    assert!(patch.validate().is_err());

    let patch = UpdateEmployeeRequest {
        name: Some("Siti Aminah".to_string()),
        ..Default::default()
    };

    assert!(patch.validate().is_ok());
}
