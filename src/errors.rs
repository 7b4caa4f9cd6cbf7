// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for wire-to-domain conversion

use thiserror::Error;

/// Errors that can occur while converting a wire-schema record into a
/// domain entity.
///
/// Conversion is total for everything the provider is allowed to vary
/// (unknown enum codes, null optionals, duplicate list entries); only a
/// mandatory field whose raw value cannot be parsed, or an error-detail
/// payload whose shape contradicts its discriminator, produces an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// A mandatory field's raw wire value could not be parsed into its
    /// declared domain type.
    #[error("{entity}: field `{field}` has invalid value `{value}`: {reason}")]
    InvalidField {
        /// Domain entity being converted, e.g. `"Server"`
        entity: &'static str,
        /// Wire field name, e.g. `"ip_range"`
        field: &'static str,
        /// Offending raw value, verbatim from the wire
        value: String,
        /// What the parser rejected about it
        reason: String,
    },

    /// An error response carried a recognized `code` discriminator but its
    /// `details` payload did not match the shape that code promises.
    #[error("error details for code `{code}` do not match the expected shape: {reason}")]
    MalformedErrorDetails {
        /// The recognized discriminator code
        code: String,
        /// Decoder diagnostic
        reason: String,
    },
}

impl ConversionError {
    /// Build a field-scoped parse failure.
    pub fn invalid_field(
        entity: &'static str,
        field: &'static str,
        value: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self::InvalidField {
            entity,
            field,
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;
