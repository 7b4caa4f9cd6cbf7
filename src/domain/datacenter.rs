// Copyright (c) 2025 - Cowboy AI, Inc.
//! Datacenter and Location Domain Entities

use serde::{Deserialize, Serialize};

/// Physical datacenter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Datacenter {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub location: Option<Location>,
    pub server_types: DatacenterServerTypes,
}

/// Server-type ids offered by a datacenter.
///
/// Copied verbatim from the wire, duplicates included; whether repeats are
/// an upstream signal or an artifact is not this layer's call to make.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatacenterServerTypes {
    pub supported: Vec<u64>,
    pub available: Vec<u64>,
}

/// Geographic location of a datacenter park
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: u64,
    pub name: String,
    pub description: String,
    /// ISO 3166-1 alpha-2 country code
    pub country: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub network_zone: String,
}
