// Copyright (c) 2025 - Cowboy AI, Inc.
//! Datacenter and Location wire records

use serde::{Deserialize, Serialize};

/// Datacenter response payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Datacenter {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub location: Option<Location>,
    pub server_types: DatacenterServerTypes,
}

/// Server types offered by a datacenter.
///
/// The provider is allowed to repeat ids here; duplicates are part of the
/// payload and pass through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatacenterServerTypes {
    pub supported: Vec<u64>,
    pub available: Vec<u64>,
}

/// Location response payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub country: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub network_zone: String,
}
