// Copyright (c) 2025 - Cowboy AI, Inc.
//! Floating IP conversion
//!
//! The `ip` field's shape follows the declared `type`: an address for
//! `ipv4`, a /64 CIDR range for `ipv6`. For a type this client does not
//! know, syntax decides.

use tracing::debug;

use crate::domain::{
    DnsPointer, FloatingIp, FloatingIpAddress, FloatingIpType, Location, Protection, ServerRef,
};
use crate::errors::{ConversionError, ConversionResult};
use crate::schema;

use super::{parse_cidr, parse_host_ip, parse_ip, parse_timestamp};

impl TryFrom<schema::FloatingIp> for FloatingIp {
    type Error = ConversionError;

    fn try_from(s: schema::FloatingIp) -> Result<Self, Self::Error> {
        let ip_type = FloatingIpType::from(s.ip_type);

        let ip = match &ip_type {
            FloatingIpType::Ipv6 => {
                FloatingIpAddress::Range(parse_cidr("FloatingIp", "ip", &s.ip)?)
            }
            FloatingIpType::Ipv4 => {
                FloatingIpAddress::Address(parse_ip("FloatingIp", "ip", &s.ip)?)
            }
            FloatingIpType::Unknown(raw) => {
                debug!(ip_type = %raw, "unrecognized floating IP type, deciding shape from syntax");
                if s.ip.contains('/') {
                    FloatingIpAddress::Range(parse_cidr("FloatingIp", "ip", &s.ip)?)
                } else {
                    FloatingIpAddress::Address(parse_ip("FloatingIp", "ip", &s.ip)?)
                }
            }
        };

        let dns_ptr = convert_pointers("FloatingIp", s.dns_ptr)?;

        Ok(FloatingIp {
            id: s.id,
            name: s.name.unwrap_or_default(),
            description: s.description.unwrap_or_default(),
            created: parse_timestamp("FloatingIp", "created", s.created.as_deref())?,
            ip,
            ip_type,
            server: s.server.map(|id| ServerRef { id }),
            dns_ptr,
            blocked: s.blocked,
            home_location: s.home_location.map(Location::from),
            protection: Protection {
                delete: s.protection.delete,
            },
            labels: s.labels,
        })
    }
}

/// Convert a DNS-pointer list, preserving order.
///
/// IPv6 pointer entries carry the address in `addr/prefix` notation; the
/// prefix is dropped and the bare address kept.
pub(crate) fn convert_pointers(
    entity: &'static str,
    pointers: Vec<schema::DnsPtr>,
) -> ConversionResult<Vec<DnsPointer>> {
    pointers
        .into_iter()
        .map(|entry| {
            Ok(DnsPointer {
                ip: parse_host_ip(entity, "dns_ptr", &entry.ip)?,
                dns_ptr: entry.dns_ptr,
            })
        })
        .collect()
}
