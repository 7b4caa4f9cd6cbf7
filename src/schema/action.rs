// Copyright (c) 2025 - Cowboy AI, Inc.
//! Action wire records

use serde::{Deserialize, Serialize};

/// Action response payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Action {
    pub id: u64,
    pub command: String,
    pub status: String,
    pub progress: i32,
    pub started: Option<String>,
    pub finished: Option<String>,
    pub error: Option<ActionError>,
    pub resources: Option<Vec<ActionResourceReference>>,
}

/// Error sub-object of a failed action
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionError {
    pub code: String,
    pub message: String,
}

/// Resource an action operates on
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionResourceReference {
    pub id: u64,
    #[serde(rename = "type")]
    pub resource_type: String,
}
