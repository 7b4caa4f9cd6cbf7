// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error-detail resolver
//!
//! Discriminated decode driven by the error's `code` field. A known
//! discriminator decodes `details` and fails loudly when the payload is
//! present but wrongly typed; absent or null `details` mean "no field
//! breakdown". An unknown discriminator passes `details` through opaque
//! and never fails. Supporting a new discriminator means adding a match
//! arm here, nothing else.

use tracing::debug;

use crate::domain::{ApiError, ErrorCode, ErrorDetails, InvalidInputField};
use crate::errors::ConversionError;
use crate::schema;

impl TryFrom<schema::Error> for ApiError {
    type Error = ConversionError;

    fn try_from(s: schema::Error) -> Result<Self, Self::Error> {
        let code = ErrorCode::from(s.code.as_str());

        let details = match &code {
            ErrorCode::InvalidInput => {
                let fields = match s.details {
                    None | Some(serde_json::Value::Null) => Vec::new(),
                    Some(raw) => {
                        let decoded: schema::ErrorDetailsInvalidInput =
                            serde_json::from_value(raw).map_err(|err| {
                                ConversionError::MalformedErrorDetails {
                                    code: s.code,
                                    reason: err.to_string(),
                                }
                            })?;
                        decoded.fields
                    }
                };
                ErrorDetails::InvalidInput {
                    fields: fields
                        .into_iter()
                        .map(|f| InvalidInputField {
                            name: f.name,
                            messages: f.messages,
                        })
                        .collect(),
                }
            }
            other => {
                if let ErrorCode::Unknown(raw) = other {
                    debug!(code = %raw, "unrecognized error code, leaving details opaque");
                }
                ErrorDetails::Opaque(s.details.unwrap_or(serde_json::Value::Null))
            }
        };

        Ok(ApiError {
            code,
            message: s.message,
            details,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn service_error_keeps_details_opaque() {
        let wire: schema::Error = serde_json::from_str(
            r#"{"code": "service_error", "message": "An error occured", "details": {}}"#,
        )
        .unwrap();

        let err = ApiError::try_from(wire).unwrap();
        assert_eq!(err.code, ErrorCode::ServiceError);
        assert_eq!(err.message, "An error occured");
        assert_eq!(err.details, ErrorDetails::Opaque(serde_json::json!({})));
        assert_eq!(err.invalid_input_fields(), None);
    }

    #[test]
    fn invalid_input_decodes_field_failures() {
        let wire: schema::Error = serde_json::from_str(
            r#"{
                "code": "invalid_input",
                "message": "invalid input",
                "details": {
                    "fields": [
                        {"name": "broken_field", "messages": ["is required"]}
                    ]
                }
            }"#,
        )
        .unwrap();

        let err = ApiError::try_from(wire).unwrap();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        let fields = err.invalid_input_fields().unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "broken_field");
        assert_eq!(fields[0].messages, vec!["is required".to_string()]);
    }

    #[test]
    fn invalid_input_with_mismatched_details_fails_distinctly() {
        let wire: schema::Error = serde_json::from_str(
            r#"{"code": "invalid_input", "message": "invalid input", "details": {"fields": "oops"}}"#,
        )
        .unwrap();

        let err = ApiError::try_from(wire).unwrap_err();
        assert!(matches!(
            err,
            ConversionError::MalformedErrorDetails { ref code, .. } if code == "invalid_input"
        ));
    }

    #[test]
    fn invalid_input_without_field_breakdown_yields_empty_list() {
        for raw in [
            r#"{"code": "invalid_input", "message": "invalid input"}"#,
            r#"{"code": "invalid_input", "message": "invalid input", "details": null}"#,
            r#"{"code": "invalid_input", "message": "invalid input", "details": {}}"#,
        ] {
            let wire: schema::Error = serde_json::from_str(raw).unwrap();
            let err = ApiError::try_from(wire).unwrap();
            assert_eq!(err.code, ErrorCode::InvalidInput);
            assert_eq!(err.invalid_input_fields(), Some(&[][..]));
        }
    }

    #[test]
    fn unknown_code_never_fails() {
        let wire: schema::Error = serde_json::from_str(
            r#"{"code": "quota_exceeded_2040", "message": "too much", "details": [1, 2]}"#,
        )
        .unwrap();

        let err = ApiError::try_from(wire).unwrap();
        assert_eq!(err.code, ErrorCode::Unknown("quota_exceeded_2040".to_string()));
        assert_eq!(err.details, ErrorDetails::Opaque(serde_json::json!([1, 2])));
    }

    #[test]
    fn missing_details_becomes_opaque_null() {
        let wire: schema::Error =
            serde_json::from_str(r#"{"code": "locked", "message": "resource locked"}"#).unwrap();

        let err = ApiError::try_from(wire).unwrap();
        assert_eq!(err.code, ErrorCode::Locked);
        assert_eq!(err.details, ErrorDetails::Opaque(serde_json::Value::Null));
    }
}
