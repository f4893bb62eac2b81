use sea_orm_migration::prelude::*;

use crate::m20250801_create_catalog_tables::{
    Classifications, Colleges, Courses, Levels, Meetings, SessionClassifications,
    SessionColleges, SessionInfos, SessionLevels, Sections, Sessions,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Network scope filters
        manager
            .create_index(
                Index::create()
                    .name("idx_sessions_network_id")
                    .table(Sessions::Table)
                    .col(Sessions::NetworkId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_classifications_network_id")
                    .table(Classifications::Table)
                    .col(Classifications::NetworkId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_colleges_network_id")
                    .table(Colleges::Table)
                    .col(Colleges::NetworkId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_levels_network_id")
                    .table(Levels::Table)
                    .col(Levels::NetworkId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_courses_network_id")
                    .table(Courses::Table)
                    .col(Courses::NetworkId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sections_network_id")
                    .table(Sections::Table)
                    .col(Sections::NetworkId)
                    .to_owned(),
            )
            .await?;

        // Slug lookups from URLs
        manager
            .create_index(
                Index::create()
                    .name("idx_sessions_slug")
                    .table(Sessions::Table)
                    .col(Sessions::Slug)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_classifications_code")
                    .table(Classifications::Table)
                    .col(Classifications::Code)
                    .to_owned(),
            )
            .await?;

        // Parent lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_session_infos_session_id")
                    .table(SessionInfos::Table)
                    .col(SessionInfos::SessionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_courses_session_id_number")
                    .table(Courses::Table)
                    .col(Courses::SessionId)
                    .col(Courses::Number)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_courses_classification_id")
                    .table(Courses::Table)
                    .col(Courses::ClassificationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sections_course_id_number")
                    .table(Sections::Table)
                    .col(Sections::CourseId)
                    .col(Sections::Number)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_meetings_section_id")
                    .table(Meetings::Table)
                    .col(Meetings::SectionId)
                    .to_owned(),
            )
            .await?;

        // Junction tables
        manager
            .create_index(
                Index::create()
                    .name("idx_session_classifications_session_id")
                    .table(SessionClassifications::Table)
                    .col(SessionClassifications::SessionId)
                    .col(SessionClassifications::ClassificationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_session_colleges_session_id")
                    .table(SessionColleges::Table)
                    .col(SessionColleges::SessionId)
                    .col(SessionColleges::CollegeId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_session_levels_session_id")
                    .table(SessionLevels::Table)
                    .col(SessionLevels::SessionId)
                    .col(SessionLevels::LevelId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let indexes = [
            "idx_session_levels_session_id",
            "idx_session_colleges_session_id",
            "idx_session_classifications_session_id",
            "idx_meetings_section_id",
            "idx_sections_course_id_number",
            "idx_courses_classification_id",
            "idx_courses_session_id_number",
            "idx_session_infos_session_id",
            "idx_classifications_code",
            "idx_sessions_slug",
            "idx_sections_network_id",
            "idx_courses_network_id",
            "idx_levels_network_id",
            "idx_colleges_network_id",
            "idx_classifications_network_id",
            "idx_sessions_network_id",
        ];

        for name in indexes {
            manager
                .drop_index(Index::drop().name(name).to_owned())
                .await?;
        }

        Ok(())
    }
}
