// Copyright (c) 2025 - Cowboy AI, Inc.
//! Datacenter and Location conversion
//!
//! Nothing here can fail: every field is a verbatim copy. Server-type id
//! lists keep duplicates exactly as transmitted.

use crate::domain::{Datacenter, DatacenterServerTypes, Location};
use crate::schema;

impl From<schema::Location> for Location {
    fn from(s: schema::Location) -> Self {
        Location {
            id: s.id,
            name: s.name,
            description: s.description,
            country: s.country,
            city: s.city,
            latitude: s.latitude,
            longitude: s.longitude,
            network_zone: s.network_zone,
        }
    }
}

impl From<schema::Datacenter> for Datacenter {
    fn from(s: schema::Datacenter) -> Self {
        Datacenter {
            id: s.id,
            name: s.name,
            description: s.description,
            location: s.location.map(Location::from),
            server_types: DatacenterServerTypes {
                supported: s.server_types.supported,
                available: s.server_types.available,
            },
        }
    }
}
