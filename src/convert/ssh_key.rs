// Copyright (c) 2025 - Cowboy AI, Inc.
//! SSH key conversion

use crate::domain::SshKey;
use crate::errors::ConversionError;
use crate::schema;

use super::parse_timestamp;

impl TryFrom<schema::SshKey> for SshKey {
    type Error = ConversionError;

    fn try_from(s: schema::SshKey) -> Result<Self, Self::Error> {
        Ok(SshKey {
            id: s.id,
            name: s.name,
            fingerprint: s.fingerprint,
            public_key: s.public_key,
            labels: s.labels,
            created: parse_timestamp("SshKey", "created", s.created.as_deref())?,
        })
    }
}
