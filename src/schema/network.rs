// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network wire records

use serde::{Deserialize, Serialize};

use super::Protection;
use crate::domain::Labels;

/// Network response payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Network {
    pub id: u64,
    pub name: String,
    pub created: Option<String>,
    pub ip_range: String,
    pub subnets: Vec<NetworkSubnet>,
    pub routes: Vec<NetworkRoute>,
    pub servers: Vec<u64>,
    pub protection: Protection,
    pub labels: Labels,
}

/// Subnet within a network
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkSubnet {
    #[serde(rename = "type")]
    pub subnet_type: String,
    pub ip_range: String,
    pub network_zone: String,
    pub gateway: Option<String>,
}

/// Static route within a network
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkRoute {
    pub destination: String,
    pub gateway: String,
}
