use crate::domains::core::row::{parse_optional_uuid, parse_uuid};
use crate::domains::core::{Entity, Patch, SqlValue};
use crate::errors::DomainResult;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Links a photo to an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventPhoto {
    pub id: Uuid,
    pub id_event: Uuid,
    pub id_photo: Uuid,
    pub status_id: Option<Uuid>,
}

impl Entity for EventPhoto {
    const LABEL: &'static str = "EventPhoto";
    const TABLE: &'static str = "event_photos";
    type Row = EventPhotoRow;

    fn id(&self) -> Uuid {
        self.id
    }

    fn status_id(&self) -> Option<Uuid> {
        self.status_id
    }

    fn set_status_id(&mut self, status_id: Uuid) {
        self.status_id = Some(status_id);
    }

    fn from_row(row: EventPhotoRow) -> DomainResult<Self> {
        row.into_entity()
    }

    fn columns(&self) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("id_event", self.id_event.into()),
            ("id_photo", self.id_photo.into()),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEventPhoto {
    pub id_event: Uuid,
    pub id_photo: Uuid,
    pub status_id: Option<Uuid>,
}

impl NewEventPhoto {
    pub fn into_event_photo(self) -> EventPhoto {
        EventPhoto {
            id: Uuid::new_v4(),
            id_event: self.id_event,
            id_photo: self.id_photo,
            status_id: self.status_id,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEventPhoto {
    pub id_event: Option<Uuid>,
    pub id_photo: Option<Uuid>,
}

impl Patch<EventPhoto> for UpdateEventPhoto {
    fn apply_to(self, link: &mut EventPhoto) {
        if let Some(id_event) = self.id_event {
            link.id_event = id_event;
        }
        if let Some(id_photo) = self.id_photo {
            link.id_photo = id_photo;
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct EventPhotoRow {
    pub id: String,
    pub id_event: String,
    pub id_photo: String,
    pub status_id: Option<String>,
}

impl EventPhotoRow {
    pub fn into_entity(self) -> DomainResult<EventPhoto> {
        Ok(EventPhoto {
            id: parse_uuid(&self.id, "id")?,
            id_event: parse_uuid(&self.id_event, "id_event")?,
            id_photo: parse_uuid(&self.id_photo, "id_photo")?,
            status_id: parse_optional_uuid(self.status_id.as_deref(), "status_id")?,
        })
    }
}
