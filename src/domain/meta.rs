// Copyright (c) 2025 - Cowboy AI, Inc.
//! Response Meta Domain Entities

use serde::{Deserialize, Serialize};

/// Meta envelope of a list response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub pagination: Option<Pagination>,
}

/// Pagination counters, copied verbatim from the wire.
///
/// Boundary pages transmit null for previous/next/last/total; those become 0
/// here. No counter is derived from another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u64,
    pub per_page: u64,
    pub previous_page: u64,
    pub next_page: u64,
    pub last_page: u64,
    pub total_entries: u64,
}
