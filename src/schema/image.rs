// Copyright (c) 2025 - Cowboy AI, Inc.
//! Image and ISO wire records

use serde::{Deserialize, Serialize};

use super::Protection;
use crate::domain::Labels;

/// Image response payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub id: u64,
    #[serde(rename = "type")]
    pub image_type: String,
    pub status: String,
    pub name: Option<String>,
    pub description: String,
    pub image_size: Option<f64>,
    pub disk_size: f64,
    pub created: Option<String>,
    pub created_from: Option<ImageCreatedFrom>,
    pub bound_to: Option<u64>,
    pub os_flavor: String,
    pub os_version: Option<String>,
    pub rapid_deploy: bool,
    pub protection: Protection,
    pub deprecated: Option<String>,
    pub labels: Labels,
}

/// Server an image was created from (id and name only)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageCreatedFrom {
    pub id: u64,
    pub name: String,
}

/// ISO response payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Iso {
    pub id: u64,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub iso_type: String,
    pub deprecated: Option<String>,
}
