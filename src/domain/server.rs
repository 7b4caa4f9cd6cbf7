// Copyright (c) 2025 - Cowboy AI, Inc.
//! Server Domain Entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use super::datacenter::Datacenter;
use super::floating_ip::DnsPointer;
use super::image::{Image, Iso};
use super::primitives::{IpCidr, Labels};
use super::server_type::ServerType;
use super::{open_enum, FloatingIpRef, NetworkRef, ServerProtection};

open_enum! {
    /// Lifecycle status of a server
    ServerStatus {
        Initializing => "initializing",
        Starting => "starting",
        Running => "running",
        Stopping => "stopping",
        Off => "off",
        Deleting => "deleting",
        Migrating => "migrating",
        Rebuilding => "rebuilding",
    }
}

/// Virtual machine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Server {
    pub id: u64,
    pub name: String,
    pub status: ServerStatus,
    pub created: Option<DateTime<Utc>>,
    pub public_net: ServerPublicNet,
    /// Private network attachments, in wire order
    pub private_net: Vec<ServerPrivateNet>,
    pub server_type: Option<ServerType>,
    pub datacenter: Option<Datacenter>,
    pub image: Option<Image>,
    pub iso: Option<Iso>,
    pub rescue_enabled: bool,
    pub locked: bool,
    /// Backup window in UTC hours, e.g. `22-02`; empty when backups are off
    pub backup_window: String,
    /// Bytes sent; 0 when the provider has not measured anything yet
    pub outgoing_traffic: u64,
    /// Bytes received; 0 when the provider has not measured anything yet
    pub ingoing_traffic: u64,
    /// Free traffic quota in bytes
    pub included_traffic: u64,
    pub protection: ServerProtection,
    pub labels: Labels,
    /// Attached volume ids, in wire order; resolving them is the caller's job
    pub volumes: Vec<u64>,
}

/// Public network configuration of a server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerPublicNet {
    pub ipv4: Option<PublicIpv4>,
    pub ipv6: Option<PublicIpv6>,
    /// Attached floating IPs, by identifier, in wire order
    pub floating_ips: Vec<FloatingIpRef>,
}

/// Primary public IPv4 address of a server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicIpv4 {
    pub ip: IpAddr,
    pub blocked: bool,
    pub dns_ptr: String,
}

/// Public IPv6 range of a server with per-address pointers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicIpv6 {
    pub network: IpCidr,
    pub blocked: bool,
    /// Reverse-DNS pointers, in wire order
    pub dns_ptr: Vec<DnsPointer>,
}

impl PublicIpv6 {
    /// Reverse-DNS pointer for `ip`, or `""` when no pointer is mapped.
    pub fn dns_ptr_for(&self, ip: IpAddr) -> &str {
        self.dns_ptr
            .iter()
            .find(|entry| entry.ip == ip)
            .map(|entry| entry.dns_ptr.as_str())
            .unwrap_or("")
    }
}

/// Attachment of a server to a private network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerPrivateNet {
    pub network: NetworkRef,
    pub ip: IpAddr,
    /// Alias addresses, in wire order
    pub aliases: Vec<IpAddr>,
    /// MAC address string, verbatim; absent for some attachment states
    pub mac_address: Option<String>,
}
