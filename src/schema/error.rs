// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error response wire records
//!
//! `details` is polymorphic: its shape is keyed by `code`, so it stays an
//! untyped [`serde_json::Value`] until the resolver in
//! [`crate::convert::error`] inspects the discriminator.

use serde::{Deserialize, Serialize};

/// Error response payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Error {
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// `details` shape promised by `code == "invalid_input"`
///
/// A missing `fields` key decodes to an empty list, matching a provider
/// that reports the code without per-field breakdowns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorDetailsInvalidInput {
    pub fields: Vec<ErrorDetailsInvalidInputField>,
}

/// One failed input field with its validation messages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorDetailsInvalidInputField {
    pub name: String,
    pub messages: Vec<String>,
}
