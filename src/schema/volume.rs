// Copyright (c) 2025 - Cowboy AI, Inc.
//! Volume wire records

use serde::{Deserialize, Serialize};

use super::datacenter::Location;
use super::Protection;
use crate::domain::Labels;

/// Volume response payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Volume {
    pub id: u64,
    pub created: Option<String>,
    pub name: String,
    pub status: String,
    pub server: Option<u64>,
    pub location: Option<Location>,
    pub size: u64,
    pub linux_device: String,
    pub protection: Protection,
    pub labels: Labels,
}
