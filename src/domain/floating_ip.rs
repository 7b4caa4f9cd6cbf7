// Copyright (c) 2025 - Cowboy AI, Inc.
//! Floating IP Domain Entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;

use super::datacenter::Location;
use super::primitives::{IpCidr, Labels};
use super::{open_enum, Protection, ServerRef};

open_enum! {
    /// Address family of a floating IP
    FloatingIpType {
        Ipv4 => "ipv4",
        Ipv6 => "ipv6",
    }
}

/// What a floating IP actually addresses.
///
/// IPv4 floating IPs are single addresses; IPv6 floating IPs are /64
/// ranges, so the two are distinct shapes rather than one string field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FloatingIpAddress {
    /// Single address (IPv4)
    Address(IpAddr),
    /// Routed range (IPv6 /64)
    Range(IpCidr),
}

impl FloatingIpAddress {
    /// The address itself, or the range's base address.
    pub fn addr(&self) -> IpAddr {
        match self {
            Self::Address(addr) => *addr,
            Self::Range(range) => range.address(),
        }
    }

    /// The routed range, when this is an IPv6 floating IP.
    pub fn range(&self) -> Option<IpCidr> {
        match self {
            Self::Address(_) => None,
            Self::Range(range) => Some(*range),
        }
    }
}

impl fmt::Display for FloatingIpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address(addr) => addr.fmt(f),
            Self::Range(range) => range.address().fmt(f),
        }
    }
}

/// Reverse-DNS pointer for one address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsPointer {
    pub ip: IpAddr,
    pub dns_ptr: String,
}

/// Floating IP that can move between servers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatingIp {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub created: Option<DateTime<Utc>>,
    pub ip: FloatingIpAddress,
    pub ip_type: FloatingIpType,
    /// Server the IP is bound to; `None` while unassigned
    pub server: Option<ServerRef>,
    /// Reverse-DNS pointers, in wire order (at most one entry for IPv4)
    pub dns_ptr: Vec<DnsPointer>,
    pub blocked: bool,
    pub home_location: Option<Location>,
    pub protection: Protection,
    pub labels: Labels,
}

impl FloatingIp {
    /// Reverse-DNS pointer for `ip`, or `""` when no pointer is mapped.
    pub fn dns_ptr_for(&self, ip: IpAddr) -> &str {
        self.dns_ptr
            .iter()
            .find(|entry| entry.ip == ip)
            .map(|entry| entry.dns_ptr.as_str())
            .unwrap_or("")
    }
}
