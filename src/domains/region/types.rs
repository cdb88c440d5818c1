use crate::domains::core::row::{parse_optional_uuid, parse_uuid};
use crate::domains::core::{Entity, Patch, SqlValue};
use crate::errors::DomainResult;
use crate::validation::{Validate, ValidationBuilder};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: Uuid,
    pub name_region: String,
    pub status_id: Option<Uuid>,
}

impl Entity for Region {
    const LABEL: &'static str = "Region";
    const TABLE: &'static str = "regions";
    type Row = RegionRow;

    fn id(&self) -> Uuid {
        self.id
    }

    fn status_id(&self) -> Option<Uuid> {
        self.status_id
    }

    fn set_status_id(&mut self, status_id: Uuid) {
        self.status_id = Some(status_id);
    }

    fn from_row(row: RegionRow) -> DomainResult<Self> {
        row.into_entity()
    }

    fn columns(&self) -> Vec<(&'static str, SqlValue)> {
        vec![("name_region", self.name_region.clone().into())]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRegion {
    pub name_region: String,
    pub status_id: Option<Uuid>,
}

impl NewRegion {
    pub fn into_region(self) -> Region {
        Region {
            id: Uuid::new_v4(),
            name_region: self.name_region.trim().to_string(),
            status_id: self.status_id,
        }
    }
}

impl Validate for NewRegion {
    fn validate(&self) -> DomainResult<()> {
        ValidationBuilder::new("name_region", Some(self.name_region.clone()))
            .not_blank()
            .max_length(100)
            .validate()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRegion {
    pub name_region: Option<String>,
}

impl Validate for UpdateRegion {
    fn validate(&self) -> DomainResult<()> {
        if let Some(name) = &self.name_region {
            ValidationBuilder::new("name_region", Some(name.clone()))
                .not_blank()
                .max_length(100)
                .validate()?;
        }
        Ok(())
    }
}

impl Patch<Region> for UpdateRegion {
    fn apply_to(self, region: &mut Region) {
        if let Some(name_region) = self.name_region {
            region.name_region = name_region.trim().to_string();
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct RegionRow {
    pub id: String,
    pub name_region: String,
    pub status_id: Option<String>,
}

impl RegionRow {
    pub fn into_entity(self) -> DomainResult<Region> {
        Ok(Region {
            id: parse_uuid(&self.id, "id")?,
            name_region: self.name_region,
            status_id: parse_optional_uuid(self.status_id.as_deref(), "status_id")?,
        })
    }
}
