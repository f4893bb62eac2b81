use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create institutions table
        manager
            .create_table(
                Table::create()
                    .table(Institutions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Institutions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Institutions::Slug).string_len(20).not_null())
                    .col(ColumnDef::new(Institutions::Name).string_len(200).not_null())
                    .to_owned(),
            )
            .await?;

        // Create colleges table
        manager
            .create_table(
                Table::create()
                    .table(Colleges::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Colleges::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Colleges::NetworkId).uuid())
                    .col(ColumnDef::new(Colleges::InstitutionId).uuid())
                    .col(ColumnDef::new(Colleges::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Colleges::Slug).string_len(60).not_null())
                    .col(ColumnDef::new(Colleges::ShortName).string_len(255).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-colleges-institution_id")
                            .from(Colleges::Table, Colleges::InstitutionId)
                            .to(Institutions::Table, Institutions::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Create levels table
        manager
            .create_table(
                Table::create()
                    .table(Levels::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Levels::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Levels::NetworkId).uuid())
                    .col(ColumnDef::new(Levels::InstitutionId).uuid().not_null())
                    .col(ColumnDef::new(Levels::Name).string_len(50).not_null())
                    .col(ColumnDef::new(Levels::Slug).string_len(60).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-levels-institution_id")
                            .from(Levels::Table, Levels::InstitutionId)
                            .to(Institutions::Table, Institutions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create classifications table
        manager
            .create_table(
                Table::create()
                    .table(Classifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Classifications::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Classifications::NetworkId).uuid().not_null())
                    .col(
                        ColumnDef::new(Classifications::InstitutionId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Classifications::CollegeId).uuid())
                    .col(ColumnDef::new(Classifications::Code).string_len(20).not_null())
                    .col(
                        ColumnDef::new(Classifications::Name)
                            .string_len(100)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Classifications::Slug).string_len(60).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-classifications-institution_id")
                            .from(Classifications::Table, Classifications::InstitutionId)
                            .to(Institutions::Table, Institutions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-classifications-college_id")
                            .from(Classifications::Table, Classifications::CollegeId)
                            .to(Colleges::Table, Colleges::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Create sessions table
        manager
            .create_table(
                Table::create()
                    .table(Sessions::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Sessions::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Sessions::NetworkId).uuid().not_null())
                    .col(ColumnDef::new(Sessions::Name).string_len(40).not_null())
                    .col(ColumnDef::new(Sessions::Slug).string_len(60).not_null())
                    .col(ColumnDef::new(Sessions::SystemCode).string_len(20))
                    .col(ColumnDef::new(Sessions::StartDate).date().not_null())
                    .col(ColumnDef::new(Sessions::EndDate).date().not_null())
                    .col(
                        ColumnDef::new(Sessions::Active)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        // Create session_infos table
        manager
            .create_table(
                Table::create()
                    .table(SessionInfos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SessionInfos::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SessionInfos::SessionId).uuid().not_null())
                    .col(ColumnDef::new(SessionInfos::InfoType).string_len(100).not_null())
                    .col(ColumnDef::new(SessionInfos::InfoValue).string_len(100).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-session_infos-session_id")
                            .from(SessionInfos::Table, SessionInfos::SessionId)
                            .to(Sessions::Table, Sessions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create session junction tables (many-to-many)
        manager
            .create_table(
                Table::create()
                    .table(SessionClassifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SessionClassifications::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SessionClassifications::SessionId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SessionClassifications::ClassificationId)
                            .uuid()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-session_classifications-session_id")
                            .from(SessionClassifications::Table, SessionClassifications::SessionId)
                            .to(Sessions::Table, Sessions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-session_classifications-classification_id")
                            .from(
                                SessionClassifications::Table,
                                SessionClassifications::ClassificationId,
                            )
                            .to(Classifications::Table, Classifications::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SessionColleges::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SessionColleges::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SessionColleges::SessionId).uuid().not_null())
                    .col(ColumnDef::new(SessionColleges::CollegeId).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-session_colleges-session_id")
                            .from(SessionColleges::Table, SessionColleges::SessionId)
                            .to(Sessions::Table, Sessions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-session_colleges-college_id")
                            .from(SessionColleges::Table, SessionColleges::CollegeId)
                            .to(Colleges::Table, Colleges::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SessionLevels::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SessionLevels::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SessionLevels::SessionId).uuid().not_null())
                    .col(ColumnDef::new(SessionLevels::LevelId).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-session_levels-session_id")
                            .from(SessionLevels::Table, SessionLevels::SessionId)
                            .to(Sessions::Table, Sessions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-session_levels-level_id")
                            .from(SessionLevels::Table, SessionLevels::LevelId)
                            .to(Levels::Table, Levels::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create courses table
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Courses::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Courses::NetworkId).uuid())
                    .col(ColumnDef::new(Courses::InstitutionId).uuid())
                    .col(ColumnDef::new(Courses::CollegeId).uuid())
                    .col(ColumnDef::new(Courses::ClassificationId).uuid())
                    .col(ColumnDef::new(Courses::SessionId).uuid().not_null())
                    .col(ColumnDef::new(Courses::LevelId).uuid())
                    .col(ColumnDef::new(Courses::Number).string_len(10).not_null())
                    .col(ColumnDef::new(Courses::Description).text().not_null().default(""))
                    .col(ColumnDef::new(Courses::Grading).string_len(50).not_null())
                    .col(ColumnDef::new(Courses::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Courses::Slug).string_len(60).not_null())
                    .col(ColumnDef::new(Courses::Profs).text().not_null().default(""))
                    .col(ColumnDef::new(Courses::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Courses::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-courses-session_id")
                            .from(Courses::Table, Courses::SessionId)
                            .to(Sessions::Table, Sessions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-courses-institution_id")
                            .from(Courses::Table, Courses::InstitutionId)
                            .to(Institutions::Table, Institutions::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-courses-college_id")
                            .from(Courses::Table, Courses::CollegeId)
                            .to(Colleges::Table, Colleges::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-courses-classification_id")
                            .from(Courses::Table, Courses::ClassificationId)
                            .to(Classifications::Table, Classifications::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-courses-level_id")
                            .from(Courses::Table, Courses::LevelId)
                            .to(Levels::Table, Levels::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Create sections table
        manager
            .create_table(
                Table::create()
                    .table(Sections::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Sections::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Sections::NetworkId).uuid())
                    .col(ColumnDef::new(Sections::InstitutionId).uuid())
                    .col(ColumnDef::new(Sections::CourseId).uuid().not_null())
                    .col(ColumnDef::new(Sections::Status).string_len(20).not_null())
                    .col(ColumnDef::new(Sections::Number).string_len(20).not_null())
                    .col(ColumnDef::new(Sections::Name).string_len(255).not_null().default(""))
                    .col(ColumnDef::new(Sections::Notes).text().not_null().default(""))
                    .col(ColumnDef::new(Sections::Prof).string_len(255).not_null())
                    .col(ColumnDef::new(Sections::Units).string_len(10).not_null())
                    .col(ColumnDef::new(Sections::Component).string_len(20).not_null())
                    .col(
                        ColumnDef::new(Sections::ReferenceCode)
                            .string_len(10)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Sections::SeatsCapacity).integer())
                    .col(ColumnDef::new(Sections::SeatsTaken).integer())
                    .col(ColumnDef::new(Sections::SeatsAvailable).integer())
                    .col(ColumnDef::new(Sections::WaitlistCapacity).integer())
                    .col(ColumnDef::new(Sections::WaitlistTaken).integer())
                    .col(ColumnDef::new(Sections::WaitlistAvailable).integer())
                    .col(ColumnDef::new(Sections::Location).string_len(100).not_null())
                    .col(ColumnDef::new(Sections::Room).string_len(20).not_null())
                    .col(ColumnDef::new(Sections::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Sections::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-sections-course_id")
                            .from(Sections::Table, Sections::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-sections-institution_id")
                            .from(Sections::Table, Sections::InstitutionId)
                            .to(Institutions::Table, Institutions::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Create meetings table
        manager
            .create_table(
                Table::create()
                    .table(Meetings::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Meetings::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Meetings::SectionId).uuid().not_null())
                    .col(ColumnDef::new(Meetings::Day).string_len(3).not_null())
                    .col(ColumnDef::new(Meetings::Start).time())
                    .col(ColumnDef::new(Meetings::End).time())
                    .col(ColumnDef::new(Meetings::Location).string_len(100).not_null())
                    .col(ColumnDef::new(Meetings::Room).string_len(20).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-meetings-section_id")
                            .from(Meetings::Table, Meetings::SectionId)
                            .to(Sections::Table, Sections::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order due to foreign key constraints
        manager
            .drop_table(Table::drop().table(Meetings::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Sections::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(SessionLevels::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(SessionColleges::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(SessionClassifications::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(SessionInfos::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Sessions::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Classifications::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Levels::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Colleges::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Institutions::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
pub(crate) enum Institutions {
    Table,
    Id,
    Slug,
    Name,
}

#[derive(Iden)]
pub(crate) enum Colleges {
    Table,
    Id,
    NetworkId,
    InstitutionId,
    Name,
    Slug,
    ShortName,
}

#[derive(Iden)]
pub(crate) enum Levels {
    Table,
    Id,
    NetworkId,
    InstitutionId,
    Name,
    Slug,
}

#[derive(Iden)]
pub(crate) enum Classifications {
    Table,
    Id,
    NetworkId,
    InstitutionId,
    CollegeId,
    Code,
    Name,
    Slug,
}

#[derive(Iden)]
pub(crate) enum Sessions {
    Table,
    Id,
    NetworkId,
    Name,
    Slug,
    SystemCode,
    StartDate,
    EndDate,
    Active,
}

#[derive(Iden)]
pub(crate) enum SessionInfos {
    Table,
    Id,
    SessionId,
    InfoType,
    InfoValue,
}

#[derive(Iden)]
pub(crate) enum SessionClassifications {
    Table,
    Id,
    SessionId,
    ClassificationId,
}

#[derive(Iden)]
pub(crate) enum SessionColleges {
    Table,
    Id,
    SessionId,
    CollegeId,
}

#[derive(Iden)]
pub(crate) enum SessionLevels {
    Table,
    Id,
    SessionId,
    LevelId,
}

#[derive(Iden)]
pub(crate) enum Courses {
    Table,
    Id,
    NetworkId,
    InstitutionId,
    CollegeId,
    ClassificationId,
    SessionId,
    LevelId,
    Number,
    Description,
    Grading,
    Name,
    Slug,
    Profs,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
pub(crate) enum Sections {
    Table,
    Id,
    NetworkId,
    InstitutionId,
    CourseId,
    Status,
    Number,
    Name,
    Notes,
    Prof,
    Units,
    Component,
    ReferenceCode,
    SeatsCapacity,
    SeatsTaken,
    SeatsAvailable,
    WaitlistCapacity,
    WaitlistTaken,
    WaitlistAvailable,
    Location,
    Room,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
pub(crate) enum Meetings {
    Table,
    Id,
    SectionId,
    Day,
    Start,
    End,
    Location,
    Room,
}
