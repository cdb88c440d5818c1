use crate::domains::core::row::{parse_optional_date, parse_optional_uuid, parse_uuid};
use crate::domains::core::{Entity, Patch, SchoolYearTagged, SqlValue};
use crate::errors::DomainResult;
use crate::validation::{Validate, ValidationBuilder};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An intern's enrolment record. At most one live row per user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intern {
    pub id: Uuid,
    pub chid: String,
    pub id_user: Uuid,
    /// Program enrolment flag, unrelated to the lifecycle status.
    pub enrolled: bool,
    pub address: Option<String>,
    pub education_level: Option<String>,
    pub career_name: Option<String>,
    pub grade: Option<String>,
    pub name_tutor: Option<String>,
    pub service: Option<String>,
    pub documentation: Option<String>,
    pub id_subproject: Option<Uuid>,
    pub id_social_facilitator: Option<Uuid>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub school_year_id: Option<Uuid>,
    pub status_id: Option<Uuid>,
}

impl Entity for Intern {
    const LABEL: &'static str = "Intern";
    const TABLE: &'static str = "interns";
    type Row = InternRow;

    fn id(&self) -> Uuid {
        self.id
    }

    fn status_id(&self) -> Option<Uuid> {
        self.status_id
    }

    fn set_status_id(&mut self, status_id: Uuid) {
        self.status_id = Some(status_id);
    }

    fn from_row(row: InternRow) -> DomainResult<Self> {
        row.into_entity()
    }

    fn columns(&self) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("chid", self.chid.clone().into()),
            ("id_user", self.id_user.into()),
            ("enrolled", self.enrolled.into()),
            ("address", self.address.clone().into()),
            ("education_level", self.education_level.clone().into()),
            ("career_name", self.career_name.clone().into()),
            ("grade", self.grade.clone().into()),
            ("name_tutor", self.name_tutor.clone().into()),
            ("service", self.service.clone().into()),
            ("documentation", self.documentation.clone().into()),
            ("id_subproject", self.id_subproject.into()),
            ("id_social_facilitator", self.id_social_facilitator.into()),
            ("start_date", self.start_date.into()),
            ("end_date", self.end_date.into()),
            ("school_year_id", self.school_year_id.into()),
        ]
    }
}

impl SchoolYearTagged for Intern {}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewIntern {
    pub chid: String,
    pub id_user: Uuid,
    pub enrolled: Option<bool>,
    pub address: Option<String>,
    pub education_level: Option<String>,
    pub career_name: Option<String>,
    pub grade: Option<String>,
    pub name_tutor: Option<String>,
    pub service: Option<String>,
    pub documentation: Option<String>,
    pub id_subproject: Option<Uuid>,
    pub id_social_facilitator: Option<Uuid>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub school_year_id: Option<Uuid>,
    pub status_id: Option<Uuid>,
}

impl NewIntern {
    pub fn into_intern(self) -> Intern {
        Intern {
            id: Uuid::new_v4(),
            chid: self.chid.trim().to_string(),
            id_user: self.id_user,
            enrolled: self.enrolled.unwrap_or(true),
            address: self.address,
            education_level: self.education_level,
            career_name: self.career_name,
            grade: self.grade,
            name_tutor: self.name_tutor,
            service: self.service,
            documentation: self.documentation,
            id_subproject: self.id_subproject,
            id_social_facilitator: self.id_social_facilitator,
            start_date: self.start_date,
            end_date: self.end_date,
            school_year_id: self.school_year_id,
            status_id: self.status_id,
        }
    }
}

impl Validate for NewIntern {
    fn validate(&self) -> DomainResult<()> {
        ValidationBuilder::new("chid", Some(self.chid.clone()))
            .not_blank()
            .max_length(50)
            .validate()?;

        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            ValidationBuilder::new("end_date", Some(end))
                .not_before(start)
                .validate()?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateIntern {
    pub enrolled: Option<bool>,
    pub address: Option<String>,
    pub education_level: Option<String>,
    pub career_name: Option<String>,
    pub grade: Option<String>,
    pub name_tutor: Option<String>,
    pub service: Option<String>,
    pub documentation: Option<String>,
    pub id_subproject: Option<Uuid>,
    pub id_social_facilitator: Option<Uuid>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl Patch<Intern> for UpdateIntern {
    fn apply_to(self, intern: &mut Intern) {
        if let Some(enrolled) = self.enrolled {
            intern.enrolled = enrolled;
        }
        if self.address.is_some() {
            intern.address = self.address;
        }
        if self.education_level.is_some() {
            intern.education_level = self.education_level;
        }
        if self.career_name.is_some() {
            intern.career_name = self.career_name;
        }
        if self.grade.is_some() {
            intern.grade = self.grade;
        }
        if self.name_tutor.is_some() {
            intern.name_tutor = self.name_tutor;
        }
        if self.service.is_some() {
            intern.service = self.service;
        }
        if self.documentation.is_some() {
            intern.documentation = self.documentation;
        }
        if self.id_subproject.is_some() {
            intern.id_subproject = self.id_subproject;
        }
        if self.id_social_facilitator.is_some() {
            intern.id_social_facilitator = self.id_social_facilitator;
        }
        if self.start_date.is_some() {
            intern.start_date = self.start_date;
        }
        if self.end_date.is_some() {
            intern.end_date = self.end_date;
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct InternRow {
    pub id: String,
    pub chid: String,
    pub id_user: String,
    pub enrolled: i64,
    pub address: Option<String>,
    pub education_level: Option<String>,
    pub career_name: Option<String>,
    pub grade: Option<String>,
    pub name_tutor: Option<String>,
    pub service: Option<String>,
    pub documentation: Option<String>,
    pub id_subproject: Option<String>,
    pub id_social_facilitator: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub school_year_id: Option<String>,
    pub status_id: Option<String>,
}

impl InternRow {
    pub fn into_entity(self) -> DomainResult<Intern> {
        Ok(Intern {
            id: parse_uuid(&self.id, "id")?,
            chid: self.chid,
            id_user: parse_uuid(&self.id_user, "id_user")?,
            enrolled: self.enrolled != 0,
            address: self.address,
            education_level: self.education_level,
            career_name: self.career_name,
            grade: self.grade,
            name_tutor: self.name_tutor,
            service: self.service,
            documentation: self.documentation,
            id_subproject: parse_optional_uuid(self.id_subproject.as_deref(), "id_subproject")?,
            id_social_facilitator: parse_optional_uuid(self.id_social_facilitator.as_deref(), "id_social_facilitator")?,
            start_date: parse_optional_date(self.start_date.as_deref(), "start_date")?,
            end_date: parse_optional_date(self.end_date.as_deref(), "end_date")?,
            school_year_id: parse_optional_uuid(self.school_year_id.as_deref(), "school_year_id")?,
            status_id: parse_optional_uuid(self.status_id.as_deref(), "status_id")?,
        })
    }
}
