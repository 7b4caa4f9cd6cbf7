// Copyright (c) 2025 - Cowboy AI, Inc.
//! Response meta wire records

use serde::{Deserialize, Serialize};

/// `meta` envelope carried by list responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meta {
    pub pagination: Option<MetaPagination>,
}

/// Pagination counters; previous/next/last/total are null on boundary pages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaPagination {
    pub page: u64,
    pub per_page: u64,
    pub previous_page: Option<u64>,
    pub next_page: Option<u64>,
    pub last_page: Option<u64>,
    pub total_entries: Option<u64>,
}
