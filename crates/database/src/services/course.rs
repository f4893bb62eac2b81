use crate::{
    entities::{classifications, courses, sections},
    scope::{NetworkScope, ScopedQuery},
};
use log::info;
use models::urls::CourseLocator;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder, QuerySelect, prelude::Uuid,
};

/// A course with the classification it is listed under, if any
pub type CourseWithClassification = (courses::Model, Option<classifications::Model>);

pub struct CourseService;

impl CourseService {
    /// Courses of a session, ordered by classification name and course number
    pub async fn get_courses_for_session<C>(
        db: &C,
        scope: NetworkScope,
        session_id: Uuid,
    ) -> Result<Vec<CourseWithClassification>, DbErr>
    where
        C: ConnectionTrait,
    {
        courses::Entity::find()
            .find_also_related(classifications::Entity)
            .scoped(scope, courses::Column::NetworkId)
            .filter(courses::Column::SessionId.eq(session_id))
            .order_by_asc(classifications::Column::Name)
            .order_by_asc(courses::Column::Number)
            .all(db)
            .await
    }

    /// Finds the course a `slugs` path points at within a session
    ///
    /// An empty classification code matches courses without a classification.
    pub async fn find_course<C>(
        db: &C,
        scope: NetworkScope,
        session_id: Uuid,
        locator: CourseLocator<'_>,
    ) -> Result<Option<CourseWithClassification>, DbErr>
    where
        C: ConnectionTrait,
    {
        let query = courses::Entity::find()
            .find_also_related(classifications::Entity)
            .scoped(scope, courses::Column::NetworkId)
            .filter(courses::Column::SessionId.eq(session_id))
            .filter(courses::Column::Number.eq(locator.number));

        let query = if locator.classification_code.is_empty() {
            query.filter(courses::Column::ClassificationId.is_null())
        } else {
            query.filter(classifications::Column::Code.eq(locator.classification_code))
        };

        query.one(db).await
    }

    /// Sections of a course, ordered by section number
    pub async fn get_sections<C>(
        db: &C,
        scope: NetworkScope,
        course_id: Uuid,
    ) -> Result<Vec<sections::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        sections::Entity::find()
            .scoped(scope, sections::Column::NetworkId)
            .filter(sections::Column::CourseId.eq(course_id))
            .order_by_asc(sections::Column::Number)
            .all(db)
            .await
    }

    /// The course description, or the note shared by every section
    pub async fn smart_description<C>(db: &C, course: &courses::Model) -> Result<String, DbErr>
    where
        C: ConnectionTrait,
    {
        let notes: Vec<String> = sections::Entity::find()
            .select_only()
            .column(sections::Column::Notes)
            .filter(sections::Column::CourseId.eq(course.id))
            .distinct()
            .into_tuple()
            .all(db)
            .await?;

        Ok(course
            .smart_description(notes.iter().map(String::as_str))
            .to_owned())
    }

    /// Re-saves a course so its `profs` reflect its current sections
    ///
    /// # Returns
    /// The updated course, or `None` if it does not exist
    pub async fn refresh_profs<C>(db: &C, course_id: Uuid) -> Result<Option<courses::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        let Some(course) = courses::Entity::find_by_id(course_id).one(db).await? else {
            return Ok(None);
        };

        let updated = course.into_active_model().update(db).await?;
        info!("Refreshed instructors of course {}: {}", updated.id, updated.profs);

        Ok(Some(updated))
    }
}
