// Copyright (c) 2025 - Cowboy AI, Inc.
//! Server wire records

use serde::{Deserialize, Serialize};

use super::datacenter::Datacenter;
use super::floating_ip::DnsPtr;
use super::image::{Image, Iso};
use super::server_type::ServerType;
use super::ServerProtection;
use crate::domain::Labels;

/// Server response payload
///
/// Traffic counters are null until the provider has measured anything;
/// null is not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Server {
    pub id: u64,
    pub name: String,
    pub status: String,
    pub created: Option<String>,
    pub public_net: ServerPublicNet,
    pub private_net: Vec<ServerPrivateNet>,
    pub server_type: Option<ServerType>,
    pub datacenter: Option<Datacenter>,
    pub image: Option<Image>,
    pub iso: Option<Iso>,
    pub rescue_enabled: bool,
    pub locked: bool,
    pub backup_window: Option<String>,
    pub outgoing_traffic: Option<u64>,
    pub ingoing_traffic: Option<u64>,
    pub included_traffic: u64,
    pub protection: ServerProtection,
    pub labels: Labels,
    pub volumes: Vec<u64>,
}

/// Public network configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerPublicNet {
    pub ipv4: Option<ServerPublicNetIpv4>,
    pub ipv6: Option<ServerPublicNetIpv6>,
    pub floating_ips: Vec<u64>,
}

/// Public IPv4 assignment: single address, single reverse-DNS pointer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerPublicNetIpv4 {
    pub ip: String,
    pub blocked: bool,
    pub dns_ptr: String,
}

/// Public IPv6 assignment: a /64 range with per-address pointers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerPublicNetIpv6 {
    pub ip: String,
    pub blocked: bool,
    pub dns_ptr: Vec<DnsPtr>,
}

/// Attachment of a server to a private network
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerPrivateNet {
    pub network: u64,
    pub ip: String,
    pub alias_ips: Vec<String>,
    pub mac_address: Option<String>,
}
