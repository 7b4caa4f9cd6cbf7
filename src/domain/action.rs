// Copyright (c) 2025 - Cowboy AI, Inc.
//! Action Domain Entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::open_enum;

open_enum! {
    /// Lifecycle status of an action
    ActionStatus {
        /// Still executing
        Running => "running",
        Success => "success",
        Error => "error",
    }
}

open_enum! {
    /// Kind of resource an action operates on
    ActionResourceType {
        Server => "server",
        Image => "image",
        Iso => "iso",
        FloatingIp => "floating_ip",
        Volume => "volume",
    }
}

/// Asynchronous provider-side operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub id: u64,
    pub command: String,
    pub status: ActionStatus,
    /// Completion percentage, 0-100
    pub progress: i32,
    pub started: Option<DateTime<Utc>>,
    pub finished: Option<DateTime<Utc>>,
    /// Error code when the action failed, empty otherwise
    pub error_code: String,
    /// Human-readable error message when the action failed, empty otherwise
    pub error_message: String,
    /// Resources touched by this action, in wire order
    pub resources: Vec<ActionResource>,
}

/// Resource touched by an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResource {
    pub id: u64,
    pub resource_type: ActionResourceType,
}
