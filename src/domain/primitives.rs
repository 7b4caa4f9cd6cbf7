// Copyright (c) 2025 - Cowboy AI, Inc.
//! Primitive Value Objects Shared Across Domain Entities
//!
//! Typed wrappers for the scalar values the provider transmits as strings:
//! CIDR ranges, RFC 3339 timestamps, and label maps. MAC addresses and
//! monetary amounts stay verbatim strings at this layer (prices must never
//! pass through binary floating point).

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;
use thiserror::Error;

/// Label map attached to most provider resources.
///
/// Keys are unique; iteration order is the wire payload's insertion order.
pub type Labels = IndexMap<String, String>;

/// Primitive parse error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PrimitiveError {
    #[error("invalid IP address format: {0}")]
    InvalidIpAddress(String),

    #[error("invalid CIDR notation: {0}")]
    InvalidCidr(String),

    #[error("invalid prefix length: {0} (must be 0-32 for IPv4, 0-128 for IPv6)")]
    InvalidPrefixLength(u8),

    #[error("invalid RFC 3339 timestamp: {0}")]
    InvalidTimestamp(String),
}

/// IP network in CIDR notation value object
///
/// Represents an IPv4 or IPv6 range as `address/prefix`. The address family
/// is decided by syntax and the prefix length validated against it.
/// Re-stringifying produces the canonical form (IPv6 zero-compression), not
/// necessarily the input bytes.
///
/// # Examples
///
/// ```rust
/// use cim_cloud_schema::domain::IpCidr;
///
/// let range = IpCidr::new("10.0.1.0/24").unwrap();
/// assert_eq!(range.address().to_string(), "10.0.1.0");
/// assert_eq!(range.prefix_len(), 24);
/// assert_eq!(range.to_string(), "10.0.1.0/24");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IpCidr {
    address: IpAddr,
    prefix_len: u8,
}

impl IpCidr {
    /// Parse CIDR notation with validation
    ///
    /// # Invariants
    /// - Address and prefix separated by exactly one `/`
    /// - Prefix length 0-32 for IPv4, 0-128 for IPv6
    pub fn new(cidr: impl AsRef<str>) -> Result<Self, PrimitiveError> {
        let cidr = cidr.as_ref();

        let Some((addr_str, prefix_str)) = cidr.split_once('/') else {
            return Err(PrimitiveError::InvalidCidr(cidr.to_string()));
        };

        let address = IpAddr::from_str(addr_str)
            .map_err(|_| PrimitiveError::InvalidIpAddress(addr_str.to_string()))?;

        let prefix_len = prefix_str
            .parse::<u8>()
            .map_err(|_| PrimitiveError::InvalidCidr(cidr.to_string()))?;

        // Invariant: prefix bound depends on the address family
        let max_prefix = match address {
            IpAddr::V4(_) => 32,
            IpAddr::V6(_) => 128,
        };
        if prefix_len > max_prefix {
            return Err(PrimitiveError::InvalidPrefixLength(prefix_len));
        }

        Ok(Self {
            address,
            prefix_len,
        })
    }

    /// The range's base address
    pub fn address(&self) -> IpAddr {
        self.address
    }

    /// Prefix length in bits
    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// Is this an IPv4 range?
    pub fn is_ipv4(&self) -> bool {
        self.address.is_ipv4()
    }

    /// Is this an IPv6 range?
    pub fn is_ipv6(&self) -> bool {
        self.address.is_ipv6()
    }
}

impl fmt::Display for IpCidr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix_len)
    }
}

impl FromStr for IpCidr {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for IpCidr {
    type Error = PrimitiveError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<IpCidr> for String {
    fn from(value: IpCidr) -> Self {
        value.to_string()
    }
}

/// Parse an RFC 3339 timestamp, with or without an explicit offset,
/// normalized to UTC.
pub fn parse_rfc3339(raw: &str) -> Result<DateTime<Utc>, PrimitiveError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| PrimitiveError::InvalidTimestamp(raw.to_string()))
}
