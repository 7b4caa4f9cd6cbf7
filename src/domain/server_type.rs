// Copyright (c) 2025 - Cowboy AI, Inc.
//! Server Type Domain Entity

use serde::{Deserialize, Serialize};

use super::pricing::Price;
use super::{open_enum, LocationRef};

open_enum! {
    /// Where a server type's disk lives
    StorageType {
        Local => "local",
        Network => "network",
    }
}

open_enum! {
    /// CPU allocation model of a server type
    CpuType {
        Shared => "shared",
        Dedicated => "dedicated",
    }
}

/// Hardware configuration offered by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerType {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub cores: u32,
    /// Memory in GB
    pub memory: f64,
    /// Disk size in GB
    pub disk: u32,
    pub storage_type: StorageType,
    pub cpu_type: CpuType,
    /// Per-location prices, in wire order
    pub pricings: Vec<ServerTypeLocationPricing>,
}

/// Hourly and monthly prices of a server type at one location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerTypeLocationPricing {
    pub location: LocationRef,
    pub hourly: Price,
    pub monthly: Price,
}
