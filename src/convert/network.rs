// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network conversion

use crate::domain::{Network, NetworkRoute, NetworkSubnet, Protection, ServerRef, SubnetType};
use crate::errors::ConversionError;
use crate::schema;

use super::{convert_all, parse_cidr, parse_ip, parse_timestamp};

impl TryFrom<schema::Network> for Network {
    type Error = ConversionError;

    fn try_from(s: schema::Network) -> Result<Self, Self::Error> {
        Ok(Network {
            id: s.id,
            name: s.name,
            created: parse_timestamp("Network", "created", s.created.as_deref())?,
            ip_range: parse_cidr("Network", "ip_range", &s.ip_range)?,
            subnets: convert_all(s.subnets)?,
            routes: convert_all(s.routes)?,
            servers: s.servers.into_iter().map(|id| ServerRef { id }).collect(),
            protection: Protection {
                delete: s.protection.delete,
            },
            labels: s.labels,
        })
    }
}

impl TryFrom<schema::NetworkSubnet> for NetworkSubnet {
    type Error = ConversionError;

    fn try_from(s: schema::NetworkSubnet) -> Result<Self, Self::Error> {
        let gateway = match s.gateway.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(parse_ip("NetworkSubnet", "gateway", raw)?),
        };

        Ok(NetworkSubnet {
            subnet_type: SubnetType::from(s.subnet_type),
            ip_range: parse_cidr("NetworkSubnet", "ip_range", &s.ip_range)?,
            network_zone: s.network_zone,
            gateway,
        })
    }
}

impl TryFrom<schema::NetworkRoute> for NetworkRoute {
    type Error = ConversionError;

    fn try_from(s: schema::NetworkRoute) -> Result<Self, Self::Error> {
        Ok(NetworkRoute {
            destination: parse_cidr("NetworkRoute", "destination", &s.destination)?,
            gateway: parse_ip("NetworkRoute", "gateway", &s.gateway)?,
        })
    }
}
