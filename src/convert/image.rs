// Copyright (c) 2025 - Cowboy AI, Inc.
//! Image and ISO conversion

use crate::domain::{
    Image, ImageCreatedFrom, ImageStatus, ImageType, Iso, IsoType, Protection, ServerRef,
};
use crate::errors::ConversionError;
use crate::schema;

use super::parse_timestamp;

impl TryFrom<schema::Image> for Image {
    type Error = ConversionError;

    fn try_from(s: schema::Image) -> Result<Self, Self::Error> {
        Ok(Image {
            id: s.id,
            image_type: ImageType::from(s.image_type),
            status: ImageStatus::from(s.status),
            name: s.name.unwrap_or_default(),
            description: s.description,
            image_size: s.image_size.unwrap_or_default(),
            disk_size: s.disk_size,
            created: parse_timestamp("Image", "created", s.created.as_deref())?,
            created_from: s.created_from.map(|c| ImageCreatedFrom {
                id: c.id,
                name: c.name,
            }),
            bound_to: s.bound_to.map(|id| ServerRef { id }),
            os_flavor: s.os_flavor,
            os_version: s.os_version.unwrap_or_default(),
            rapid_deploy: s.rapid_deploy,
            protection: Protection {
                delete: s.protection.delete,
            },
            deprecated: parse_timestamp("Image", "deprecated", s.deprecated.as_deref())?,
            labels: s.labels,
        })
    }
}

impl TryFrom<schema::Iso> for Iso {
    type Error = ConversionError;

    fn try_from(s: schema::Iso) -> Result<Self, Self::Error> {
        Ok(Iso {
            id: s.id,
            name: s.name.unwrap_or_default(),
            description: s.description.unwrap_or_default(),
            iso_type: IsoType::from(s.iso_type),
            deprecated: parse_timestamp("Iso", "deprecated", s.deprecated.as_deref())?,
        })
    }
}
