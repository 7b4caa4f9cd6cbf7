// Copyright (c) 2025 - Cowboy AI, Inc.
//! Server conversion

use crate::domain::{
    Datacenter, FloatingIpRef, Image, Iso, NetworkRef, PublicIpv4, PublicIpv6, Server,
    ServerPrivateNet, ServerProtection, ServerPublicNet, ServerStatus, ServerType,
};
use crate::errors::ConversionError;
use crate::schema;

use super::floating_ip::convert_pointers;
use super::{convert_all, parse_cidr, parse_ip, parse_timestamp};

impl TryFrom<schema::Server> for Server {
    type Error = ConversionError;

    fn try_from(s: schema::Server) -> Result<Self, Self::Error> {
        Ok(Server {
            id: s.id,
            name: s.name,
            status: ServerStatus::from(s.status),
            created: parse_timestamp("Server", "created", s.created.as_deref())?,
            public_net: s.public_net.try_into()?,
            private_net: convert_all(s.private_net)?,
            server_type: s.server_type.map(ServerType::from),
            datacenter: s.datacenter.map(Datacenter::from),
            image: s.image.map(Image::try_from).transpose()?,
            iso: s.iso.map(Iso::try_from).transpose()?,
            rescue_enabled: s.rescue_enabled,
            locked: s.locked,
            backup_window: s.backup_window.unwrap_or_default(),
            // Null traffic counters mean "not yet measured", not an error
            outgoing_traffic: s.outgoing_traffic.unwrap_or_default(),
            ingoing_traffic: s.ingoing_traffic.unwrap_or_default(),
            included_traffic: s.included_traffic,
            protection: ServerProtection {
                delete: s.protection.delete,
                rebuild: s.protection.rebuild,
            },
            labels: s.labels,
            volumes: s.volumes,
        })
    }
}

impl TryFrom<schema::ServerPublicNet> for ServerPublicNet {
    type Error = ConversionError;

    fn try_from(s: schema::ServerPublicNet) -> Result<Self, Self::Error> {
        Ok(ServerPublicNet {
            ipv4: s.ipv4.map(PublicIpv4::try_from).transpose()?,
            ipv6: s.ipv6.map(PublicIpv6::try_from).transpose()?,
            floating_ips: s
                .floating_ips
                .into_iter()
                .map(|id| FloatingIpRef { id })
                .collect(),
        })
    }
}

impl TryFrom<schema::ServerPublicNetIpv4> for PublicIpv4 {
    type Error = ConversionError;

    fn try_from(s: schema::ServerPublicNetIpv4) -> Result<Self, Self::Error> {
        Ok(PublicIpv4 {
            ip: parse_ip("ServerPublicNet", "ipv4.ip", &s.ip)?,
            blocked: s.blocked,
            dns_ptr: s.dns_ptr,
        })
    }
}

impl TryFrom<schema::ServerPublicNetIpv6> for PublicIpv6 {
    type Error = ConversionError;

    fn try_from(s: schema::ServerPublicNetIpv6) -> Result<Self, Self::Error> {
        Ok(PublicIpv6 {
            network: parse_cidr("ServerPublicNet", "ipv6.ip", &s.ip)?,
            blocked: s.blocked,
            dns_ptr: convert_pointers("ServerPublicNet", s.dns_ptr)?,
        })
    }
}

impl TryFrom<schema::ServerPrivateNet> for ServerPrivateNet {
    type Error = ConversionError;

    fn try_from(s: schema::ServerPrivateNet) -> Result<Self, Self::Error> {
        Ok(ServerPrivateNet {
            network: NetworkRef { id: s.network },
            ip: parse_ip("ServerPrivateNet", "ip", &s.ip)?,
            aliases: s
                .alias_ips
                .iter()
                .map(|raw| parse_ip("ServerPrivateNet", "alias_ips", raw))
                .collect::<Result<_, _>>()?,
            mac_address: s.mac_address,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    #[test]
    fn converts_complete_server() {
        let wire: schema::Server = serde_json::from_str(
            r#"{
                "id": 1,
                "name": "server.example.com",
                "status": "running",
                "created": "2017-08-16T17:29:14+00:00",
                "public_net": {
                    "ipv4": {
                        "ip": "1.2.3.4",
                        "blocked": false,
                        "dns_ptr": "server01.example.com"
                    },
                    "ipv6": {
                        "ip": "2a01:4f8:1c11:3400::/64",
                        "blocked": false,
                        "dns_ptr": [
                            {"ip": "2a01:4f8:1c11:3400::1/64", "dns_ptr": "server01.example.com"}
                        ]
                    }
                },
                "private_net": [
                    {
                        "network": 4711,
                        "ip": "10.0.1.1",
                        "alias_ips": ["10.0.1.2"]
                    }
                ],
                "server_type": {"id": 2},
                "outgoing_traffic": 123456,
                "ingoing_traffic": 7891011,
                "included_traffic": 654321,
                "backup_window": "22-02",
                "rescue_enabled": true,
                "image": {
                    "id": 4711,
                    "type": "system",
                    "status": "available",
                    "name": "ubuntu16.04-standard-x64",
                    "description": "Ubuntu 16.04 Standard 64 bit",
                    "image_size": 2.3,
                    "disk_size": 10,
                    "created": "2017-08-16T17:29:14+00:00",
                    "created_from": {"id": 1, "name": "Server"},
                    "bound_to": 1,
                    "os_flavor": "ubuntu",
                    "os_version": "16.04",
                    "rapid_deploy": false
                },
                "iso": {
                    "id": 4711,
                    "name": "FreeBSD-11.0-RELEASE-amd64-dvd1",
                    "description": "FreeBSD 11.0 x64",
                    "type": "public"
                },
                "datacenter": {
                    "id": 1,
                    "name": "fsn1-dc8",
                    "description": "Falkenstein 1 DC 8",
                    "location": {
                        "id": 1,
                        "name": "fsn1",
                        "description": "Falkenstein DC Park 1",
                        "country": "DE",
                        "city": "Falkenstein",
                        "latitude": 50.47612,
                        "longitude": 12.370071,
                        "network_zone": "eu-central"
                    }
                },
                "protection": {"delete": true, "rebuild": true},
                "locked": true,
                "labels": {"key": "value", "key2": "value2"},
                "volumes": [123, 456, 789]
            }"#,
        )
        .unwrap();

        let server = Server::try_from(wire).unwrap();
        assert_eq!(server.id, 1);
        assert_eq!(server.name, "server.example.com");
        assert_eq!(server.status, ServerStatus::Running);
        assert_eq!(
            server.created,
            Some(Utc.with_ymd_and_hms(2017, 8, 16, 17, 29, 14).unwrap())
        );
        let ipv4 = server.public_net.ipv4.as_ref().unwrap();
        assert_eq!(ipv4.ip.to_string(), "1.2.3.4");
        let ipv6 = server.public_net.ipv6.as_ref().unwrap();
        assert_eq!(
            ipv6.dns_ptr_for("2a01:4f8:1c11:3400::1".parse().unwrap()),
            "server01.example.com"
        );
        assert_eq!(server.server_type.as_ref().unwrap().id, 2);
        assert_eq!(server.included_traffic, 654321);
        assert_eq!(server.outgoing_traffic, 123456);
        assert_eq!(server.ingoing_traffic, 7891011);
        assert_eq!(server.backup_window, "22-02");
        assert!(server.rescue_enabled);
        assert_eq!(server.image.as_ref().unwrap().id, 4711);
        assert_eq!(server.iso.as_ref().unwrap().id, 4711);
        assert_eq!(server.datacenter.as_ref().unwrap().id, 1);
        assert!(server.locked);
        assert!(server.protection.delete);
        assert!(server.protection.rebuild);
        assert_eq!(server.labels["key"], "value");
        assert_eq!(server.labels["key2"], "value2");
        assert_eq!(server.volumes, vec![123, 456, 789]);
        assert_eq!(server.private_net.len(), 1);
        assert_eq!(server.private_net[0].network.id, 4711);
    }

    #[test]
    fn null_traffic_counters_default_to_zero() {
        let wire: schema::Server = serde_json::from_str(
            r#"{
                "public_net": {
                    "ipv4": {
                        "ip": "1.2.3.4",
                        "blocked": false,
                        "dns_ptr": "server01.example.com"
                    }
                },
                "outgoing_traffic": null,
                "ingoing_traffic": null
            }"#,
        )
        .unwrap();

        let server = Server::try_from(wire).unwrap();
        assert_eq!(server.outgoing_traffic, 0);
        assert_eq!(server.ingoing_traffic, 0);
    }

    #[test]
    fn converts_public_net_with_floating_ips() {
        let wire: schema::ServerPublicNet = serde_json::from_str(
            r#"{
                "ipv4": {
                    "ip": "1.2.3.4",
                    "blocked": false,
                    "dns_ptr": "server.example.com"
                },
                "ipv6": {
                    "ip": "2a01:4f8:1c19:1403::/64",
                    "blocked": false,
                    "dns_ptr": []
                },
                "floating_ips": [4]
            }"#,
        )
        .unwrap();

        let public_net = ServerPublicNet::try_from(wire).unwrap();
        assert_eq!(public_net.ipv4.as_ref().unwrap().ip.to_string(), "1.2.3.4");
        assert_eq!(
            public_net.ipv6.as_ref().unwrap().network.to_string(),
            "2a01:4f8:1c19:1403::/64"
        );
        assert_eq!(public_net.floating_ips, vec![FloatingIpRef { id: 4 }]);
    }

    #[test]
    fn converts_public_ipv4_blocked() {
        let wire: schema::ServerPublicNetIpv4 = serde_json::from_str(
            r#"{"ip": "1.2.3.4", "blocked": true, "dns_ptr": "server.example.com"}"#,
        )
        .unwrap();

        let ipv4 = PublicIpv4::try_from(wire).unwrap();
        assert_eq!(ipv4.ip.to_string(), "1.2.3.4");
        assert!(ipv4.blocked);
        assert_eq!(ipv4.dns_ptr, "server.example.com");
    }

    #[test]
    fn converts_public_ipv6_with_pointer_list() {
        let wire: schema::ServerPublicNetIpv6 = serde_json::from_str(
            r#"{
                "ip": "2a01:4f8:1c11:3400::/64",
                "blocked": true,
                "dns_ptr": [
                    {"ip": "2a01:4f8:1c11:3400::1/64", "dns_ptr": "server01.example.com"}
                ]
            }"#,
        )
        .unwrap();

        let ipv6 = PublicIpv6::try_from(wire).unwrap();
        assert_eq!(ipv6.network.to_string(), "2a01:4f8:1c11:3400::/64");
        assert!(ipv6.blocked);
        assert_eq!(ipv6.dns_ptr.len(), 1);
        assert_eq!(ipv6.dns_ptr[0].ip.to_string(), "2a01:4f8:1c11:3400::1");
    }

    #[test]
    fn converts_private_net_attachment() {
        let wire: schema::ServerPrivateNet = serde_json::from_str(
            r#"{
                "network": 4711,
                "ip": "10.0.1.1",
                "alias_ips": ["10.0.1.2"],
                "mac_address": "86:00:ff:2a:7d:e1"
            }"#,
        )
        .unwrap();

        let private_net = ServerPrivateNet::try_from(wire).unwrap();
        assert_eq!(private_net.network.id, 4711);
        assert_eq!(private_net.ip.to_string(), "10.0.1.1");
        assert_eq!(private_net.aliases.len(), 1);
        assert_eq!(private_net.aliases[0].to_string(), "10.0.1.2");
        assert_eq!(private_net.mac_address.as_deref(), Some("86:00:ff:2a:7d:e1"));
    }
}
