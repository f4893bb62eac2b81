use super::{classifications, sections, sessions};
use crate::hooks::{active_value, derive_slug, stamp};
use models::{
    catalog::{join_profs, smart_description},
    display::title_case,
    urls::{course_path, course_slugs},
};
use sea_orm::{QueryOrder, Set, entity::prelude::*};
use serde::{Deserialize, Serialize};

/// A catalog course offered within a session
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub network_id: Option<Uuid>,
    pub institution_id: Option<Uuid>,
    pub college_id: Option<Uuid>,
    pub classification_id: Option<Uuid>,
    pub session_id: Uuid,
    pub level_id: Option<Uuid>,
    pub number: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub grading: String, // e.g. "CAS Graded"
    pub name: String,    // e.g. "Animals & Society"
    pub slug: String,
    /// Instructors of every section, space-joined; rewritten on every save
    #[sea_orm(column_type = "Text")]
    pub profs: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Model {
    /// Display label, e.g. "Animals & Society (ANTH-UA-101)"
    pub fn label(&self, classification_code: Option<&str>) -> String {
        format!(
            "{} ({}-{})",
            self.name,
            classification_code.unwrap_or("None"),
            self.number
        )
    }

    pub fn smart_name(&self) -> String {
        title_case(&self.name)
    }

    /// The course description, or the note shared by all of its sections
    pub fn smart_description<'a>(
        &'a self,
        section_notes: impl IntoIterator<Item = &'a str>,
    ) -> &'a str {
        smart_description(&self.description, section_notes)
    }

    /// The composite `slugs` path segment of this course
    pub fn slugs(&self, classification: Option<&classifications::Model>) -> String {
        let (classification_slug, classification_code) = classification
            .map(|c| (c.slug.as_str(), c.code.as_str()))
            .unwrap_or_default();

        course_slugs(
            classification_slug,
            &self.slug,
            classification_code,
            &self.number,
        )
    }

    pub fn url(
        &self,
        session: &sessions::Model,
        classification: Option<&classifications::Model>,
    ) -> String {
        course_path(&session.slug, &self.slugs(classification))
    }
}

/// Space-joined instructors of a course's sections, in section order
pub async fn collect_profs<C>(db: &C, course_id: Uuid) -> Result<String, DbErr>
where
    C: ConnectionTrait,
{
    let sections = sections::Entity::find()
        .filter(sections::Column::CourseId.eq(course_id))
        .order_by_asc(sections::Column::Number)
        .all(db)
        .await?;

    Ok(join_profs(sections.iter().map(|s| s.prof.as_str())))
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sessions::Entity",
        from = "Column::SessionId",
        to = "super::sessions::Column::Id"
    )]
    Session,
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
    #[sea_orm(
        belongs_to = "super::classifications::Entity",
        from = "Column::ClassificationId",
        to = "super::classifications::Column::Id"
    )]
    Classification,
    #[sea_orm(
        belongs_to = "super::levels::Entity",
        from = "Column::LevelId",
        to = "super::levels::Column::Id"
    )]
    Level,
    #[sea_orm(has_many = "super::sections::Entity")]
    Sections,
}

impl Related<super::sessions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Session.def()
    }
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

impl Related<super::classifications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Classification.def()
    }
}

impl Related<super::levels::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Level.def()
    }
}

impl Related<super::sections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sections.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let profs = match active_value(&self.id) {
            Some(id) => collect_profs(db, *id).await?,
            None => String::new(),
        };
        self.profs = Set(profs);

        derive_slug(&self.name, &mut self.slug);
        stamp(&mut self.created_at, &mut self.updated_at, insert);

        Ok(self)
    }
}
