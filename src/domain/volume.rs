// Copyright (c) 2025 - Cowboy AI, Inc.
//! Volume Domain Entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::datacenter::Location;
use super::primitives::Labels;
use super::{open_enum, Protection, ServerRef};

open_enum! {
    /// Lifecycle status of a volume
    VolumeStatus {
        Creating => "creating",
        Available => "available",
    }
}

/// Block storage volume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    pub id: u64,
    pub created: Option<DateTime<Utc>>,
    pub name: String,
    pub status: VolumeStatus,
    /// Server the volume is attached to; `None` while detached
    pub server: Option<ServerRef>,
    pub location: Option<Location>,
    /// Size in GB
    pub size: u64,
    /// Device path under `/dev/disk/by-id`
    pub linux_device: String,
    pub protection: Protection,
    pub labels: Labels,
}
