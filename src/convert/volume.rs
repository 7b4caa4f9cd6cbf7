// Copyright (c) 2025 - Cowboy AI, Inc.
//! Volume conversion

use crate::domain::{Location, Protection, ServerRef, Volume, VolumeStatus};
use crate::errors::ConversionError;
use crate::schema;

use super::parse_timestamp;

impl TryFrom<schema::Volume> for Volume {
    type Error = ConversionError;

    fn try_from(s: schema::Volume) -> Result<Self, Self::Error> {
        Ok(Volume {
            id: s.id,
            created: parse_timestamp("Volume", "created", s.created.as_deref())?,
            name: s.name,
            status: VolumeStatus::from(s.status),
            server: s.server.map(|id| ServerRef { id }),
            location: s.location.map(Location::from),
            size: s.size,
            linux_device: s.linux_device,
            protection: Protection {
                delete: s.protection.delete,
            },
            labels: s.labels,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    #[test]
    fn converts_volume_with_attached_server() {
        let wire: schema::Volume = serde_json::from_str(
            r#"{
                "id": 4711,
                "created": "2016-01-30T23:50:11+00:00",
                "name": "db-storage",
                "status": "creating",
                "server": 2,
                "location": {
                    "id": 1,
                    "name": "fsn1",
                    "description": "Falkenstein DC Park 1",
                    "country": "DE",
                    "city": "Falkenstein",
                    "latitude": 50.47612,
                    "longitude": 12.370071
                },
                "size": 42,
                "linux_device": "/dev/disk/by-id/scsi-0HC_volume_1",
                "protection": {"delete": true},
                "labels": {"key": "value", "key2": "value2"}
            }"#,
        )
        .unwrap();

        let volume = Volume::try_from(wire).unwrap();
        assert_eq!(volume.id, 4711);
        assert_eq!(volume.name, "db-storage");
        assert_eq!(volume.status, VolumeStatus::Creating);
        assert_eq!(
            volume.created,
            Some(Utc.with_ymd_and_hms(2016, 1, 30, 23, 50, 11).unwrap())
        );
        assert_eq!(volume.server, Some(ServerRef { id: 2 }));
        assert_eq!(volume.location.as_ref().unwrap().id, 1);
        assert_eq!(volume.size, 42);
        assert_eq!(volume.linux_device, "/dev/disk/by-id/scsi-0HC_volume_1");
        assert!(volume.protection.delete);
        assert_eq!(volume.labels.len(), 2);
        assert_eq!(volume.labels["key"], "value");
    }

    #[test]
    fn detached_volume_has_no_server() {
        let wire: schema::Volume = serde_json::from_str(
            r#"{"id": 1, "name": "scratch", "status": "available", "server": null, "size": 10}"#,
        )
        .unwrap();

        let volume = Volume::try_from(wire).unwrap();
        assert_eq!(volume.status, VolumeStatus::Available);
        assert_eq!(volume.server, None);
    }
}
