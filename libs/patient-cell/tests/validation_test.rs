use chrono::NaiveDate;

use patient_cell::models::{CreatePatientRequest, UpdatePatientRequest};
use shared_models::error::AppError;
use shared_models::gender::Gender;

fn base_request() -> CreatePatientRequest {
    CreatePatientRequest {
        name: "Siti Aminah".to_string(),
        gender: Gender::Female,
        birthdate: NaiveDate::from_ymd_opt(1994, 7, 20).unwrap(),
        no_ktp: "1234567890123456".to_string(),
        address: "Jl. Merdeka No. 5, Jakarta".to_string(),
    }
}

#[test]
fn valid_request_passes() {
    assert!(base_request().validate().is_ok());
}

#[test]
fn ktp_must_be_sixteen_digits() {
    for bad in ["123456789012345", "12345678901234567", "12345678901234ab", ""] {
        let mut request = base_request();
        request.no_ktp = bad.to_string();

        assert!(
            matches!(
                request.validate(),
                Err(AppError::Validation { code: "patient/validation-error", .. })
            ),
            "expected rejection for KTP {:?}",
            bad
        );
    }
}

#[test]
fn short_address_is_rejected() {
    let mut request = base_request();
    request.address = "Jl.".to_string();

    assert!(request.validate().is_err());
}

#[test]
fn patch_validates_only_provided_fields() {
    let patch = UpdatePatientRequest {
        no_ktp: Some("not-a-ktp".to_string()),
        ..Default::default()
    };
    assert!(patch.validate().is_err());

    let patch = UpdatePatientRequest {
        address: Some("Jl. Sudirman Kav. 10".to_string()),
        ..Default::default()
    };
    assert!(patch.validate().is_ok());
}
