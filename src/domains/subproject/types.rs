use crate::domains::core::row::{parse_optional_uuid, parse_uuid};
use crate::domains::core::{Entity, Patch, SqlValue};
use crate::errors::DomainResult;
use crate::types::double_option;
use crate::validation::{Validate, ValidationBuilder};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A subproject. A coordinator leads at most one live subproject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subproject {
    pub id: Uuid,
    pub name_subproject: String,
    pub id_region: Option<Uuid>,
    pub id_social_facilitator: Option<Uuid>,
    pub id_coordinator: Option<Uuid>,
    pub status_id: Option<Uuid>,
}

impl Entity for Subproject {
    const LABEL: &'static str = "Subproject";
    const TABLE: &'static str = "subprojects";
    type Row = SubprojectRow;

    fn id(&self) -> Uuid {
        self.id
    }

    fn status_id(&self) -> Option<Uuid> {
        self.status_id
    }

    fn set_status_id(&mut self, status_id: Uuid) {
        self.status_id = Some(status_id);
    }

    fn from_row(row: SubprojectRow) -> DomainResult<Self> {
        row.into_entity()
    }

    fn columns(&self) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("name_subproject", self.name_subproject.clone().into()),
            ("id_region", self.id_region.into()),
            ("id_social_facilitator", self.id_social_facilitator.into()),
            ("id_coordinator", self.id_coordinator.into()),
        ]
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewSubproject {
    pub name_subproject: String,
    pub id_region: Option<Uuid>,
    pub id_social_facilitator: Option<Uuid>,
    pub id_coordinator: Option<Uuid>,
    pub status_id: Option<Uuid>,
}

impl NewSubproject {
    pub fn into_subproject(self) -> Subproject {
        Subproject {
            id: Uuid::new_v4(),
            name_subproject: self.name_subproject.trim().to_string(),
            id_region: self.id_region,
            id_social_facilitator: self.id_social_facilitator,
            id_coordinator: self.id_coordinator,
            status_id: self.status_id,
        }
    }
}

impl Validate for NewSubproject {
    fn validate(&self) -> DomainResult<()> {
        ValidationBuilder::new("name_subproject", Some(self.name_subproject.clone()))
            .not_blank()
            .max_length(150)
            .validate()
    }
}

/// References use `Some(None)` to clear and `None` to leave untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSubproject {
    pub name_subproject: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub id_region: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "double_option")]
    pub id_social_facilitator: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "double_option")]
    pub id_coordinator: Option<Option<Uuid>>,
}

impl Validate for UpdateSubproject {
    fn validate(&self) -> DomainResult<()> {
        if let Some(name) = &self.name_subproject {
            ValidationBuilder::new("name_subproject", Some(name.clone()))
                .not_blank()
                .max_length(150)
                .validate()?;
        }
        Ok(())
    }
}

impl Patch<Subproject> for UpdateSubproject {
    fn apply_to(self, subproject: &mut Subproject) {
        if let Some(name) = self.name_subproject {
            subproject.name_subproject = name.trim().to_string();
        }
        if let Some(id_region) = self.id_region {
            subproject.id_region = id_region;
        }
        if let Some(id_social_facilitator) = self.id_social_facilitator {
            subproject.id_social_facilitator = id_social_facilitator;
        }
        if let Some(id_coordinator) = self.id_coordinator {
            subproject.id_coordinator = id_coordinator;
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct SubprojectRow {
    pub id: String,
    pub name_subproject: String,
    pub id_region: Option<String>,
    pub id_social_facilitator: Option<String>,
    pub id_coordinator: Option<String>,
    pub status_id: Option<String>,
}

impl SubprojectRow {
    pub fn into_entity(self) -> DomainResult<Subproject> {
        Ok(Subproject {
            id: parse_uuid(&self.id, "id")?,
            name_subproject: self.name_subproject,
            id_region: parse_optional_uuid(self.id_region.as_deref(), "id_region")?,
            id_social_facilitator: parse_optional_uuid(self.id_social_facilitator.as_deref(), "id_social_facilitator")?,
            id_coordinator: parse_optional_uuid(self.id_coordinator.as_deref(), "id_coordinator")?,
            status_id: parse_optional_uuid(self.status_id.as_deref(), "status_id")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subproject() -> Subproject {
        Subproject {
            id: Uuid::new_v4(),
            name_subproject: "Huertos".to_string(),
            id_region: Some(Uuid::new_v4()),
            id_social_facilitator: Some(Uuid::new_v4()),
            id_coordinator: Some(Uuid::new_v4()),
            status_id: None,
        }
    }

    #[test]
    fn null_clears_and_absent_keeps() {
        let mut target = subproject();
        let facilitator = target.id_social_facilitator;

        let update: UpdateSubproject =
            serde_json::from_str(r#"{"id_region": null, "name_subproject": " Lectura "}"#).unwrap();
        update.apply_to(&mut target);

        assert_eq!(target.id_region, None);
        assert_eq!(target.id_social_facilitator, facilitator);
        assert!(target.id_coordinator.is_some());
        assert_eq!(target.name_subproject, "Lectura");
    }
}
