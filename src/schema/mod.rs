// Copyright (c) 2025 - Cowboy AI, Inc.
//! Wire-Schema Records
//!
//! Serde mirrors of the provider's JSON response payloads. These are the
//! transport collaborator's contract: every field may be absent or null
//! where the API allows it, a few fields carry more than one on-wire shape
//! (DNS pointers, error details), and nothing here is validated beyond
//! JSON well-formedness. Validation and typing happen in [`crate::convert`].
//!
//! All records derive `Default` with container-level `#[serde(default)]`
//! so partially-populated payloads (list endpoints, nested references)
//! decode without ceremony.

pub mod action;
pub mod datacenter;
pub mod error;
pub mod floating_ip;
pub mod image;
pub mod meta;
pub mod network;
pub mod pricing;
pub mod server;
pub mod server_type;
pub mod ssh_key;
pub mod volume;

pub use action::{Action, ActionError, ActionResourceReference};
pub use datacenter::{Datacenter, DatacenterServerTypes, Location};
pub use error::{Error, ErrorDetailsInvalidInput, ErrorDetailsInvalidInputField};
pub use floating_ip::{DnsPtr, FloatingIp};
pub use image::{Image, ImageCreatedFrom, Iso};
pub use meta::{Meta, MetaPagination};
pub use network::{Network, NetworkRoute, NetworkSubnet};
pub use pricing::{
    Price, Pricing, PricingFloatingIp, PricingImage, PricingServerBackup, PricingServerType,
    PricingServerTypePrice, PricingTraffic,
};
pub use server::{Server, ServerPrivateNet, ServerPublicNet, ServerPublicNetIpv4, ServerPublicNetIpv6};
pub use server_type::ServerType;
pub use ssh_key::SshKey;
pub use volume::Volume;

use serde::{Deserialize, Serialize};

/// Protection flags common to most resources (servers add `rebuild`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Protection {
    pub delete: bool,
}

/// Server protection flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerProtection {
    pub delete: bool,
    pub rebuild: bool,
}
