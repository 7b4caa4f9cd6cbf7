// Copyright (c) 2025 - Cowboy AI, Inc.
//! Server type wire records

use serde::{Deserialize, Serialize};

use super::pricing::PricingServerTypePrice;

/// Server type response payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerType {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub cores: u32,
    pub memory: f64,
    pub disk: u32,
    pub storage_type: String,
    pub cpu_type: String,
    pub prices: Vec<PricingServerTypePrice>,
}
