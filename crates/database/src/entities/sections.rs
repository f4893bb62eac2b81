use crate::hooks::stamp;
use models::{
    catalog::smart_notes,
    display::{pad_section_number, split_profs},
};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// An offered instance of a course, with its own instructor, seats and schedule
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sections")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub network_id: Option<Uuid>,
    pub institution_id: Option<Uuid>,
    pub course_id: Uuid,
    pub status: String,
    pub number: String,
    pub name: String, // e.g. "Topics: Animal Minds"
    #[sea_orm(column_type = "Text")]
    pub notes: String,
    pub prof: String,
    pub units: String,
    pub component: String,      // e.g. "Lecture", "Recitation"
    pub reference_code: String, // school's internal id for the class
    pub seats_capacity: Option<i32>,
    pub seats_taken: Option<i32>,
    pub seats_available: Option<i32>,
    pub waitlist_capacity: Option<i32>,
    pub waitlist_taken: Option<i32>,
    pub waitlist_available: Option<i32>,
    pub location: String,
    pub room: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Model {
    /// Section number padded to three characters, e.g. "001"
    pub fn padded_number(&self) -> String {
        pad_section_number(&self.number)
    }

    pub fn profs(&self) -> Vec<&str> {
        split_profs(&self.prof)
    }

    /// Notes to display, empty when they already serve as the course description
    pub fn smart_notes(&self, course_smart_description: &str) -> &str {
        smart_notes(&self.notes, course_smart_description)
    }

    pub fn label(&self, course_label: &str) -> String {
        format!("{course_label} .{}", self.number)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
    #[sea_orm(has_many = "super::meetings::Entity")]
    Meetings,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::meetings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Meetings.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        stamp(&mut self.created_at, &mut self.updated_at, insert);
        Ok(self)
    }
}
