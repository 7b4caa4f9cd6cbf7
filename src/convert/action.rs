// Copyright (c) 2025 - Cowboy AI, Inc.
//! Action conversion

use crate::domain::{Action, ActionResource, ActionResourceType, ActionStatus};
use crate::errors::ConversionError;
use crate::schema;

use super::parse_timestamp;

impl TryFrom<schema::Action> for Action {
    type Error = ConversionError;

    fn try_from(s: schema::Action) -> Result<Self, Self::Error> {
        let started = parse_timestamp("Action", "started", s.started.as_deref())?;
        let finished = parse_timestamp("Action", "finished", s.finished.as_deref())?;

        let (error_code, error_message) = match s.error {
            Some(err) => (err.code, err.message),
            None => (String::new(), String::new()),
        };

        let resources = s
            .resources
            .unwrap_or_default()
            .into_iter()
            .map(|r| ActionResource {
                id: r.id,
                resource_type: ActionResourceType::from(r.resource_type),
            })
            .collect();

        Ok(Action {
            id: s.id,
            command: s.command,
            status: ActionStatus::from(s.status),
            progress: s.progress,
            started,
            finished,
            error_code,
            error_message,
            resources,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    #[test]
    fn converts_complete_action() {
        let wire: schema::Action = serde_json::from_str(
            r#"{
                "id": 1,
                "command": "create_server",
                "status": "success",
                "progress": 100,
                "started": "2016-01-30T23:55:00Z",
                "finished": "2016-01-30T23:56:13Z",
                "resources": [
                    {"id": 42, "type": "server"}
                ],
                "error": {
                    "code": "action_failed",
                    "message": "Action failed"
                }
            }"#,
        )
        .unwrap();

        let action = Action::try_from(wire).unwrap();
        assert_eq!(action.id, 1);
        assert_eq!(action.command, "create_server");
        assert_eq!(action.status, ActionStatus::Success);
        assert_eq!(action.progress, 100);
        assert_eq!(
            action.started,
            Some(Utc.with_ymd_and_hms(2016, 1, 30, 23, 55, 0).unwrap())
        );
        assert_eq!(
            action.finished,
            Some(Utc.with_ymd_and_hms(2016, 1, 30, 23, 56, 13).unwrap())
        );
        assert_eq!(action.error_code, "action_failed");
        assert_eq!(action.error_message, "Action failed");
        assert_eq!(action.resources.len(), 1);
        assert_eq!(action.resources[0].id, 42);
        assert_eq!(action.resources[0].resource_type, ActionResourceType::Server);
    }

    #[test]
    fn pending_action_has_no_timestamps_or_error() {
        let wire: schema::Action = serde_json::from_str(
            r#"{"id": 2, "command": "start_server", "status": "running", "progress": 50}"#,
        )
        .unwrap();

        let action = Action::try_from(wire).unwrap();
        assert_eq!(action.status, ActionStatus::Running);
        assert_eq!(action.started, None);
        assert_eq!(action.finished, None);
        assert_eq!(action.error_code, "");
        assert_eq!(action.error_message, "");
        assert!(action.resources.is_empty());
    }

    #[test]
    fn malformed_started_timestamp_is_a_field_error() {
        let wire: schema::Action = serde_json::from_str(
            r#"{"id": 3, "command": "create_server", "started": "soon"}"#,
        )
        .unwrap();

        let err = Action::try_from(wire).unwrap_err();
        assert_eq!(
            err,
            ConversionError::invalid_field(
                "Action",
                "started",
                "soon",
                "invalid RFC 3339 timestamp: soon"
            )
        );
    }
}
