// Copyright (c) 2025 - Cowboy AI, Inc.
//! Image and ISO Domain Entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::primitives::Labels;
use super::{open_enum, Protection, ServerRef};

open_enum! {
    /// How an image came to exist
    ImageType {
        /// Provider-supplied OS image
        System => "system",
        Snapshot => "snapshot",
        Backup => "backup",
    }
}

open_enum! {
    /// Availability of an image
    ImageStatus {
        Creating => "creating",
        Available => "available",
    }
}

open_enum! {
    /// Visibility of an ISO
    IsoType {
        Public => "public",
        Private => "private",
    }
}

/// Disk image a server can be created from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub id: u64,
    pub image_type: ImageType,
    pub status: ImageStatus,
    /// Only system images carry a name; empty otherwise
    pub name: String,
    pub description: String,
    /// Actual size in GB; 0 until the image is fully created
    pub image_size: f64,
    /// Minimum disk size in GB required to use the image
    pub disk_size: f64,
    pub created: Option<DateTime<Utc>>,
    pub created_from: Option<ImageCreatedFrom>,
    /// Server a backup image is bound to
    pub bound_to: Option<ServerRef>,
    pub os_flavor: String,
    pub os_version: String,
    pub rapid_deploy: bool,
    pub protection: Protection,
    /// Set once the provider schedules the image for removal
    pub deprecated: Option<DateTime<Utc>>,
    pub labels: Labels,
}

/// Server an image was created from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageCreatedFrom {
    pub id: u64,
    pub name: String,
}

/// Installation media attachable to a server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Iso {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub iso_type: IsoType,
    pub deprecated: Option<DateTime<Utc>>,
}
