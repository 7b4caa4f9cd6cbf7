// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pricing Domain Entities
//!
//! All monetary amounts are exact decimal strings, verbatim from the wire.
//! They never pass through binary floating point at this layer.

use serde::{Deserialize, Serialize};

use super::server_type::ServerTypeLocationPricing;
use super::ServerTypeRef;

/// One price with currency and VAT context
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// ISO 4217 currency code, e.g. `EUR`
    pub currency: String,
    /// VAT percentage as a decimal string, e.g. `19.00`
    pub vat_rate: String,
    /// Net amount, exact decimal string
    pub net: String,
    /// Gross amount, exact decimal string
    pub gross: String,
}

/// Complete pricing table for the account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    pub image: ImagePricing,
    pub floating_ip: FloatingIpPricing,
    pub traffic: TrafficPricing,
    pub server_backup: ServerBackupPricing,
    /// Per-server-type pricing blocks, in wire order
    pub server_types: Vec<ServerTypePricing>,
}

/// Image pricing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePricing {
    /// Price per GB of image size per month
    pub per_gb_month: Price,
}

/// Floating IP pricing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloatingIpPricing {
    pub monthly: Price,
}

/// Traffic pricing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficPricing {
    /// Price per TB of outgoing traffic
    pub per_tb: Price,
}

/// Backup pricing as a percentage of the server price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerBackupPricing {
    /// Percentage as a decimal string, e.g. `20`
    pub percentage: String,
}

/// Pricing block for one server type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerTypePricing {
    pub server_type: ServerTypeRef,
    /// Per-location prices, in wire order
    pub pricings: Vec<ServerTypeLocationPricing>,
}
