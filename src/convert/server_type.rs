// Copyright (c) 2025 - Cowboy AI, Inc.
//! Server type conversion
//!
//! A standalone server-type payload carries no currency or VAT context;
//! those fields stay empty here and are only filled when the pricing
//! endpoint's top-level payload provides them.

use crate::domain::{
    CpuType, LocationRef, Price, ServerType, ServerTypeLocationPricing, StorageType,
};
use crate::schema;

impl From<schema::ServerType> for ServerType {
    fn from(s: schema::ServerType) -> Self {
        ServerType {
            id: s.id,
            name: s.name,
            description: s.description,
            cores: s.cores,
            memory: s.memory,
            disk: s.disk,
            storage_type: StorageType::from(s.storage_type),
            cpu_type: CpuType::from(s.cpu_type),
            pricings: s
                .prices
                .into_iter()
                .map(|p| ServerTypeLocationPricing {
                    location: LocationRef { name: p.location },
                    hourly: Price {
                        currency: String::new(),
                        vat_rate: String::new(),
                        net: p.price_hourly.net,
                        gross: p.price_hourly.gross,
                    },
                    monthly: Price {
                        currency: String::new(),
                        vat_rate: String::new(),
                        net: p.price_monthly.net,
                        gross: p.price_monthly.gross,
                    },
                })
                .collect(),
        }
    }
}
