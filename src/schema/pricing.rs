// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pricing wire records
//!
//! Currency and VAT rate arrive once at the top level; the converter
//! injects them into every nested price. Amounts are decimal strings and
//! stay that way.

use serde::{Deserialize, Serialize};

/// Pricing response payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pricing {
    pub currency: String,
    pub vat_rate: String,
    pub image: PricingImage,
    pub floating_ip: PricingFloatingIp,
    pub traffic: PricingTraffic,
    pub server_backup: PricingServerBackup,
    pub server_types: Vec<PricingServerType>,
}

/// Net/gross amount pair, exact decimal strings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Price {
    pub net: String,
    pub gross: String,
}

/// Image pricing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingImage {
    pub price_per_gb_month: Price,
}

/// Floating IP pricing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingFloatingIp {
    pub price_monthly: Price,
}

/// Traffic pricing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingTraffic {
    pub price_per_tb: Price,
}

/// Backup pricing as a percentage of the server price
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingServerBackup {
    pub percentage: String,
}

/// Per-server-type pricing block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingServerType {
    pub id: u64,
    pub name: String,
    pub prices: Vec<PricingServerTypePrice>,
}

/// Hourly and monthly prices at one location
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingServerTypePrice {
    pub location: String,
    pub price_hourly: Price,
    pub price_monthly: Price,
}
