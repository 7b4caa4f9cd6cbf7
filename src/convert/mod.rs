// Copyright (c) 2025 - Cowboy AI, Inc.
//! Entity Converters
//!
//! One conversion per domain entity, wire record in, domain entity out.
//! Fallible conversions are `TryFrom<schema::X> for domain::X` returning
//! [`ConversionError`]; conversions with nothing to parse (locations,
//! pricing tables, pagination) are plain `From`.
//!
//! Failure policy: a mandatory field whose raw value does not parse aborts
//! that entity's conversion with a field-scoped error. Everything the
//! provider may legitimately vary — unknown enum codes, null optionals,
//! duplicate id lists — converts without error via the fallback policies
//! on the domain types.

mod action;
mod datacenter;
mod error;
mod floating_ip;
mod image;
mod meta;
mod network;
mod pricing;
mod server;
mod server_type;
mod ssh_key;
mod volume;

use chrono::{DateTime, Utc};
use std::net::IpAddr;

use crate::domain::{parse_rfc3339, IpCidr};
use crate::errors::{ConversionError, ConversionResult};

/// Convert an ordered sequence of wire records, preserving order.
///
/// Fails on the first record whose conversion fails; partial output is
/// never returned.
pub fn convert_all<W, D>(records: impl IntoIterator<Item = W>) -> ConversionResult<Vec<D>>
where
    D: TryFrom<W, Error = ConversionError>,
{
    records.into_iter().map(D::try_from).collect()
}

/// Parse a mandatory IP address field.
pub(crate) fn parse_ip(
    entity: &'static str,
    field: &'static str,
    raw: &str,
) -> ConversionResult<IpAddr> {
    raw.parse()
        .map_err(|_| ConversionError::invalid_field(entity, field, raw, "invalid IP address"))
}

/// Parse a mandatory IP address field that may carry an `addr/prefix`
/// suffix, keeping only the address part.
///
/// Reverse-DNS entries on IPv6 networks arrive in this notation.
pub(crate) fn parse_host_ip(
    entity: &'static str,
    field: &'static str,
    raw: &str,
) -> ConversionResult<IpAddr> {
    let addr = raw.split_once('/').map_or(raw, |(addr, _)| addr);
    addr.parse()
        .map_err(|_| ConversionError::invalid_field(entity, field, raw, "invalid IP address"))
}

/// Parse a mandatory CIDR range field.
pub(crate) fn parse_cidr(
    entity: &'static str,
    field: &'static str,
    raw: &str,
) -> ConversionResult<IpCidr> {
    IpCidr::new(raw).map_err(|err| ConversionError::invalid_field(entity, field, raw, err))
}

/// Parse an optional RFC 3339 timestamp field.
///
/// Absent and empty-string values both mean "not set"; anything else must
/// parse.
pub(crate) fn parse_timestamp(
    entity: &'static str,
    field: &'static str,
    raw: Option<&str>,
) -> ConversionResult<Option<DateTime<Utc>>> {
    match raw {
        None | Some("") => Ok(None),
        Some(value) => parse_rfc3339(value)
            .map(Some)
            .map_err(|err| ConversionError::invalid_field(entity, field, value, err)),
    }
}
