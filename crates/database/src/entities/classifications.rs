use crate::hooks::derive_slug;
use models::level::{AcademicLevel, ClassificationCodeError};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// A subject or department code within an institution, e.g. "ANTH-UA"
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "classifications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub network_id: Uuid,
    pub institution_id: Uuid,
    pub college_id: Option<Uuid>,
    pub code: String,
    pub name: String, // may be empty
    pub slug: String,
}

impl Model {
    /// Academic level encoded in the classification code
    pub fn level(&self) -> Result<Option<AcademicLevel>, ClassificationCodeError> {
        AcademicLevel::from_code(&self.code)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::institutions::Entity",
        from = "Column::InstitutionId",
        to = "super::institutions::Column::Id"
    )]
    Institution,
    #[sea_orm(
        belongs_to = "super::colleges::Entity",
        from = "Column::CollegeId",
        to = "super::colleges::Column::Id"
    )]
    College,
    #[sea_orm(has_many = "super::courses::Entity")]
    Courses,
    #[sea_orm(has_many = "super::session_classifications::Entity")]
    SessionClassifications,
}

impl Related<super::institutions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Institution.def()
    }
}

impl Related<super::colleges::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::College.def()
    }
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Courses.def()
    }
}

// Many-to-many relationship with sessions
impl Related<super::sessions::Entity> for Entity {
    fn to() -> RelationDef {
        super::session_classifications::Relation::Session.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::session_classifications::Relation::Classification
                .def()
                .rev(),
        )
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        derive_slug(&self.name, &mut self.slug);
        Ok(self)
    }
}

impl Display for Model {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.code)
    }
}
