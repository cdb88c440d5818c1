use crate::domains::core::row::{parse_optional_uuid, parse_uuid};
use crate::domains::core::{Entity, Patch, SqlValue};
use crate::errors::DomainResult;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A user acting as coordinator for one region. At most one live row per user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinator {
    pub id: Uuid,
    pub id_user: Uuid,
    pub id_region: Uuid,
    pub status_id: Option<Uuid>,
}

impl Entity for Coordinator {
    const LABEL: &'static str = "Coordinator";
    const TABLE: &'static str = "coordinators";
    type Row = CoordinatorRow;

    fn id(&self) -> Uuid {
        self.id
    }

    fn status_id(&self) -> Option<Uuid> {
        self.status_id
    }

    fn set_status_id(&mut self, status_id: Uuid) {
        self.status_id = Some(status_id);
    }

    fn from_row(row: CoordinatorRow) -> DomainResult<Self> {
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
pub struct NewCoordinator {
    pub id_user: Uuid,
    pub id_region: Uuid,
    pub status_id: Option<Uuid>,
}

impl NewCoordinator {
    pub fn into_coordinator(self) -> Coordinator {
        Coordinator {
            id: Uuid::new_v4(),
            id_user: self.id_user,
            id_region: self.id_region,
            status_id: self.status_id,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCoordinator {
    pub id_region: Option<Uuid>,
}

impl Patch<Coordinator> for UpdateCoordinator {
    fn apply_to(self, coordinator: &mut Coordinator) {
        if let Some(id_region) = self.id_region {
            coordinator.id_region = id_region;
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct CoordinatorRow {
    pub id: String,
    pub id_user: String,
    pub id_region: String,
    pub status_id: Option<String>,
}

impl CoordinatorRow {
    pub fn into_entity(self) -> DomainResult<Coordinator> {
        Ok(Coordinator {
            id: parse_uuid(&self.id, "id")?,
            id_user: parse_uuid(&self.id_user, "id_user")?,
            id_region: parse_uuid(&self.id_region, "id_region")?,
            status_id: parse_optional_uuid(self.status_id.as_deref(), "status_id")?,
        })
    }
}
