// Copyright (c) 2025 - Cowboy AI, Inc.
//! SSH Key Domain Entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::primitives::Labels;

/// SSH public key known to the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SshKey {
    pub id: u64,
    pub name: String,
    /// MD5 fingerprint, colon-separated hex
    pub fingerprint: String,
    pub public_key: String,
    pub labels: Labels,
    pub created: Option<DateTime<Utc>>,
}
