use crate::hooks::derive_slug;
use models::display::short_name;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// A sub-unit of an institution, e.g. "College of Arts"
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "colleges")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub network_id: Option<Uuid>,
    pub institution_id: Option<Uuid>,
    pub name: String,
    pub slug: String,
    pub short_name: String,
}

impl Model {
    /// The short name, falling back to the full name
    pub fn short_name(&self) -> &str {
        short_name(&self.short_name, &self.name)
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
    #[sea_orm(has_many = "super::classifications::Entity")]
    Classifications,
    #[sea_orm(has_many = "super::courses::Entity")]
    Courses,
    #[sea_orm(has_many = "super::session_colleges::Entity")]
    SessionColleges,
}

impl Related<super::institutions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Institution.def()
    }
}

impl Related<super::classifications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Classifications.def()
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
        super::session_colleges::Relation::Session.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::session_colleges::Relation::College.def().rev())
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
        write!(f, "{}", self.name)
    }
}
