use crate::{
    entities::{courses, meetings, sections},
    services::course::CourseService,
};
use log::warn;
use models::meetings::group_meetings;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, ModelTrait, QueryFilter, TransactionTrait, prelude::Uuid,
};

pub struct SectionService;

impl SectionService {
    pub async fn get_meetings<C>(db: &C, section_id: Uuid) -> Result<Vec<meetings::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        meetings::Entity::find()
            .filter(meetings::Column::SectionId.eq(section_id))
            .all(db)
            .await
    }

    /// Meetings of a section grouped by shared time and place, in day order
    pub async fn grouped_meetings<C>(
        db: &C,
        section_id: Uuid,
    ) -> Result<Vec<Vec<meetings::Model>>, DbErr>
    where
        C: ConnectionTrait,
    {
        let meetings = Self::get_meetings(db, section_id).await?;

        Ok(group_meetings(meetings))
    }

    /// Section notes to display next to the course's smart description
    pub async fn smart_notes<C>(db: &C, section: &sections::Model) -> Result<String, DbErr>
    where
        C: ConnectionTrait,
    {
        let course = courses::Entity::find_by_id(section.course_id)
            .one(db)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!("Course {} not found", section.course_id))
            })?;

        let description = CourseService::smart_description(db, &course).await?;

        Ok(section.smart_notes(&description).to_owned())
    }

    /// Inserts a section and refreshes its course's instructors
    pub async fn create_section(
        db: &DatabaseConnection,
        section: sections::ActiveModel,
    ) -> Result<sections::Model, DbErr> {
        let txn = db.begin().await?;

        let section = section.insert(&txn).await?;
        Self::refresh_course(&txn, section.course_id).await?;

        txn.commit().await?;
        Ok(section)
    }

    /// Updates a section and refreshes its course's instructors
    pub async fn update_section(
        db: &DatabaseConnection,
        section: sections::ActiveModel,
    ) -> Result<sections::Model, DbErr> {
        let txn = db.begin().await?;

        let section = section.update(&txn).await?;
        Self::refresh_course(&txn, section.course_id).await?;

        txn.commit().await?;
        Ok(section)
    }

    /// Deletes a section and refreshes its course's instructors
    pub async fn delete_section(
        db: &DatabaseConnection,
        section: sections::Model,
    ) -> Result<DeleteResult, DbErr> {
        let txn = db.begin().await?;

        let course_id = section.course_id;
        let result = section.delete(&txn).await?;
        Self::refresh_course(&txn, course_id).await?;

        txn.commit().await?;
        Ok(result)
    }

    async fn refresh_course<C>(db: &C, course_id: Uuid) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        if CourseService::refresh_profs(db, course_id).await?.is_none() {
            warn!("Section belongs to missing course {course_id}");
        }

        Ok(())
    }
}
