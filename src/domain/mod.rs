// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cloud Domain Entities
//!
//! Strongly-typed, application-facing structures produced from
//! [`crate::schema`] wire records. Each entity owns semantic value types
//! (concrete IP addresses instead of strings, UTC timestamps, closed
//! enumerations with an explicit unknown arm) and models nullable wire
//! relations as `Option` so "not present" can never alias a zero value.
//!
//! Entities are immutable value objects: converters build them once and
//! never touch them again.

pub mod action;
pub mod datacenter;
pub mod error;
pub mod floating_ip;
pub mod image;
pub mod meta;
pub mod network;
pub mod pricing;
pub mod primitives;
pub mod server;
pub mod server_type;
pub mod ssh_key;
pub mod volume;

pub use action::{Action, ActionResource, ActionResourceType, ActionStatus};
pub use datacenter::{Datacenter, DatacenterServerTypes, Location};
pub use error::{ApiError, ErrorCode, ErrorDetails, InvalidInputField};
pub use floating_ip::{DnsPointer, FloatingIp, FloatingIpAddress, FloatingIpType};
pub use image::{Image, ImageCreatedFrom, ImageStatus, ImageType, Iso, IsoType};
pub use meta::{Meta, Pagination};
pub use network::{Network, NetworkRoute, NetworkSubnet, SubnetType};
pub use pricing::{
    FloatingIpPricing, ImagePricing, Price, Pricing, ServerBackupPricing, ServerTypePricing,
    TrafficPricing,
};
pub use primitives::{parse_rfc3339, IpCidr, Labels, PrimitiveError};
pub use server::{
    PublicIpv4, PublicIpv6, Server, ServerPrivateNet, ServerPublicNet, ServerStatus,
};
pub use server_type::{CpuType, ServerType, ServerTypeLocationPricing, StorageType};
pub use ssh_key::SshKey;
pub use volume::{Volume, VolumeStatus};

use serde::{Deserialize, Serialize};

/// Open enumeration over provider wire codes.
///
/// Generates an enum with one variant per known code plus an
/// `Unknown(String)` arm that preserves any code this client has not
/// learned yet, so unrecognized future values survive a round trip instead
/// of failing the conversion. Normalization is total: `From<&str>` and
/// `From<String>` never error, and `as_str` restores the wire code.
macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $code:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Code this client does not recognize; raw wire string preserved
            Unknown(String),
        }

        impl $name {
            /// The wire code for this value
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $code, )+
                    Self::Unknown(raw) => raw,
                }
            }
        }

        impl From<&str> for $name {
            fn from(code: &str) -> Self {
                match code {
                    $( $code => Self::$variant, )+
                    other => Self::Unknown(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(code: String) -> Self {
                match code.as_str() {
                    $( $code => Self::$variant, )+
                    _ => Self::Unknown(code),
                }
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_owned()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}
pub(crate) use open_enum;

/// Protection flags shared by most resources
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Protection {
    pub delete: bool,
}

/// Server protection flags; `delete` and `rebuild` are independent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerProtection {
    pub delete: bool,
    pub rebuild: bool,
}

/// Minimal reference to a server, by identifier only.
///
/// Resolving the full entity is the caller's job; this layer never
/// fabricates partially-filled placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerRef {
    pub id: u64,
}

/// Minimal reference to a network, by identifier only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkRef {
    pub id: u64,
}

/// Minimal reference to a floating IP, by identifier only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloatingIpRef {
    pub id: u64,
}

/// Reference to a location by name (pricing tables key on the name)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRef {
    pub name: String,
}

/// Reference to a server type by identifier and name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerTypeRef {
    pub id: u64,
    pub name: String,
}
