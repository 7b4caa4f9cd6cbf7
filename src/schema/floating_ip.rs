// Copyright (c) 2025 - Cowboy AI, Inc.
//! Floating IP wire records

use serde::{Deserialize, Serialize};

use super::datacenter::Location;
use super::Protection;
use crate::domain::Labels;

/// Floating IP response payload
///
/// `ip` is an address for `type == "ipv4"` and a CIDR range for
/// `type == "ipv6"`; `dns_ptr` always arrives as a list here, with at most
/// one entry for IPv4.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatingIp {
    pub id: u64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub created: Option<String>,
    pub ip: String,
    #[serde(rename = "type")]
    pub ip_type: String,
    pub server: Option<u64>,
    pub dns_ptr: Vec<DnsPtr>,
    pub blocked: bool,
    pub home_location: Option<Location>,
    pub protection: Protection,
    pub labels: Labels,
}

/// Reverse-DNS pointer for one address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DnsPtr {
    pub ip: String,
    pub dns_ptr: String,
}
