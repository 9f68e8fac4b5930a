use super::Error;

fn create_test_json_error() -> serde_json::Error {
    serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err()
}

#[test]
fn test_crop_not_found_message_keeps_original_casing() {
    let err = Error::CropNotFound {
        crop: "BaNaNa".to_string(),
    };
    assert_eq!(err.to_string(), "Price data not found for crop: BaNaNa");
    assert_eq!(err.error_type(), "CROP_NOT_FOUND");
}

#[test]
fn test_error_types() {
    assert_eq!(Error::MissingCredential.error_type(), "MISSING_CREDENTIAL");
    assert_eq!(
        Error::InvalidCredential {
            reason: "blank".to_string()
        }
        .error_type(),
        "INVALID_CREDENTIAL"
    );
    assert_eq!(
        Error::Completion {
            status: 429,
            message: "quota".to_string()
        }
        .error_type(),
        "COMPLETION_FAILED"
    );
    assert_eq!(Error::EmptyCompletion.error_type(), "EMPTY_COMPLETION");
    assert_eq!(
        Error::from(create_test_json_error()).error_type(),
        "JSON_ERROR"
    );
}

#[test]
fn test_completion_error_display() {
    let err = Error::Completion {
        status: 403,
        message: "API key not valid".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Completion API returned 403: API key not valid"
    );
}

#[test]
fn test_external_classification() {
    assert!(Error::EmptyCompletion.is_external());
    assert!(Error::Completion {
        status: 500,
        message: String::new()
    }
    .is_external());
    assert!(Error::from(create_test_json_error()).is_external());

    assert!(!Error::MissingCredential.is_external());
    assert!(!Error::CropNotFound {
        crop: "banana".to_string()
    }
    .is_external());
}
