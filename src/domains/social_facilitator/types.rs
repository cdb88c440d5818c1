use crate::domains::core::row::{parse_optional_uuid, parse_uuid};
use crate::domains::core::{Entity, Patch, SqlValue};
use crate::errors::DomainResult;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A user doing field work in a region. At most one live row per user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialFacilitator {
    pub id: Uuid,
    pub id_user: Uuid,
    pub id_region: Uuid,
    pub status_id: Option<Uuid>,
}

impl Entity for SocialFacilitator {
    const LABEL: &'static str = "Social Facilitator";
    const TABLE: &'static str = "social_facilitators";
    type Row = SocialFacilitatorRow;

    fn id(&self) -> Uuid {
        self.id
    }

    fn status_id(&self) -> Option<Uuid> {
        self.status_id
    }

    fn set_status_id(&mut self, status_id: Uuid) {
        self.status_id = Some(status_id);
    }

    fn from_row(row: SocialFacilitatorRow) -> DomainResult<Self> {
        row.into_entity()
    }

    fn columns(&self) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("id_user", self.id_user.into()),
            ("id_region", self.id_region.into()),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSocialFacilitator {
    pub id_user: Uuid,
    pub id_region: Uuid,
    pub status_id: Option<Uuid>,
}

impl NewSocialFacilitator {
    pub fn into_social_facilitator(self) -> SocialFacilitator {
        SocialFacilitator {
            id: Uuid::new_v4(),
            id_user: self.id_user,
            id_region: self.id_region,
            status_id: self.status_id,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSocialFacilitator {
    pub id_region: Option<Uuid>,
}

impl Patch<SocialFacilitator> for UpdateSocialFacilitator {
    fn apply_to(self, facilitator: &mut SocialFacilitator) {
        if let Some(id_region) = self.id_region {
            facilitator.id_region = id_region;
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct SocialFacilitatorRow {
    pub id: String,
    pub id_user: String,
    pub id_region: String,
    pub status_id: Option<String>,
}

impl SocialFacilitatorRow {
    pub fn into_entity(self) -> DomainResult<SocialFacilitator> {
        Ok(SocialFacilitator {
            id: parse_uuid(&self.id, "id")?,
            id_user: parse_uuid(&self.id_user, "id_user")?,
            id_region: parse_uuid(&self.id_region, "id_region")?,
            status_id: parse_optional_uuid(self.status_id.as_deref(), "status_id")?,
        })
    }
}
