// Copyright (c) 2025 - Cowboy AI, Inc.
//! API Error Domain Entity
//!
//! The provider's error payload carries a `code` discriminator and a
//! free-form `details` object whose shape is keyed by that code. The
//! resolved [`ApiError`] keeps `details` typed where the code is known
//! (`invalid_input`) and opaque everywhere else.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::open_enum;

open_enum! {
    /// Error codes the provider is known to return
    ErrorCode {
        ServiceError => "service_error",
        RateLimitExceeded => "rate_limit_exceeded",
        UnknownError => "unknown_error",
        NotFound => "not_found",
        /// Request payload failed validation; `details` carries per-field failures
        InvalidInput => "invalid_input",
        Forbidden => "forbidden",
        Locked => "locked",
        ResourceLimitExceeded => "resource_limit_exceeded",
        ResourceUnavailable => "resource_unavailable",
        UniquenessError => "uniqueness_error",
        Protected => "protected",
    }
}

/// Error returned by the provider API
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{message} ({code})")]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
    pub details: ErrorDetails,
}

impl ApiError {
    /// Per-field validation failures, when this is an `invalid_input` error
    /// with decoded details.
    pub fn invalid_input_fields(&self) -> Option<&[InvalidInputField]> {
        match &self.details {
            ErrorDetails::InvalidInput { fields } => Some(fields),
            ErrorDetails::Opaque(_) => None,
        }
    }
}

/// Resolved error details, keyed by [`ErrorCode`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ErrorDetails {
    /// `invalid_input`: ordered per-field validation failures
    InvalidInput { fields: Vec<InvalidInputField> },
    /// Any other code: raw payload, untouched (null when the wire omitted it)
    Opaque(serde_json::Value),
}

/// One rejected input field with its validation messages, in wire order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidInputField {
    pub name: String,
    pub messages: Vec<String>,
}
