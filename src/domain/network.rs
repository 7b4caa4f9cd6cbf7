// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network Domain Entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use super::primitives::{IpCidr, Labels};
use super::{open_enum, Protection, ServerRef};

open_enum! {
    /// What a subnet attaches
    SubnetType {
        Server => "server",
    }
}

/// Private network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub id: u64,
    pub name: String,
    pub created: Option<DateTime<Utc>>,
    pub ip_range: IpCidr,
    /// Subnets in wire order
    pub subnets: Vec<NetworkSubnet>,
    /// Static routes in wire order
    pub routes: Vec<NetworkRoute>,
    /// Attached servers, by identifier, in wire order
    pub servers: Vec<ServerRef>,
    pub protection: Protection,
    pub labels: Labels,
}

/// Subnet of a network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSubnet {
    pub subnet_type: SubnetType,
    pub ip_range: IpCidr,
    pub network_zone: String,
    pub gateway: Option<IpAddr>,
}

/// Static route of a network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkRoute {
    pub destination: IpCidr,
    pub gateway: IpAddr,
}
