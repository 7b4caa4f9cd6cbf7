// Copyright (c) 2025 - Cowboy AI, Inc.
//! SSH key wire records

use serde::{Deserialize, Serialize};

use crate::domain::Labels;

/// SSH key response payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SshKey {
    pub id: u64,
    pub name: String,
    pub fingerprint: String,
    pub public_key: String,
    pub labels: Labels,
    pub created: Option<String>,
}
