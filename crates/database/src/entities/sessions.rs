use models::urls::session_path;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// An academic term belonging to a network
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sessions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub network_id: Uuid,
    pub name: String,
    pub slug: String,
    pub system_code: Option<String>,
    pub start_date: Date,
    pub end_date: Date,
    pub active: bool,
}

impl Model {
    pub fn url(&self) -> String {
        session_path(&self.slug)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::session_infos::Entity")]
    SessionInfos,
    #[sea_orm(has_many = "super::courses::Entity")]
    Courses,
    #[sea_orm(has_many = "super::session_classifications::Entity")]
    SessionClassifications,
    #[sea_orm(has_many = "super::session_colleges::Entity")]
    SessionColleges,
    #[sea_orm(has_many = "super::session_levels::Entity")]
    SessionLevels,
}

impl Related<super::session_infos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SessionInfos.def()
    }
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Courses.def()
    }
}

// Many-to-many relationships through the session junction tables
impl Related<super::classifications::Entity> for Entity {
    fn to() -> RelationDef {
        super::session_classifications::Relation::Classification.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::session_classifications::Relation::Session.def().rev())
    }
}

impl Related<super::colleges::Entity> for Entity {
    fn to() -> RelationDef {
        super::session_colleges::Relation::College.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::session_colleges::Relation::Session.def().rev())
    }
}

impl Related<super::levels::Entity> for Entity {
    fn to() -> RelationDef {
        super::session_levels::Relation::Level.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::session_levels::Relation::Session.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Display for Model {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}: {}", self.network_id, self.name)
    }
}
