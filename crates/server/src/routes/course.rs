use crate::{
    dtos::{
        course::{CourseDetailResponse, SectionResponse},
        session::{ClassificationResponse, ScopeParams, SessionResponse},
    },
    routes::AppState,
    utils::error::internal_error,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use database::services::{
    course::CourseService, section::SectionService, session::SessionService,
};
use models::urls::parse_course_slugs;

/// Get a course of a session with its sections and grouped meetings
#[utoipa::path(
    get,
    path = "/sessions/{session_slug}/courses/{slugs}",
    params(
        ("session_slug" = String, Path, description = "Session slug"),
        ("slugs" = String, Path, description = "Course path, ending in `{classification code}-{number}`"),
        ScopeParams
    ),
    responses(
        (status = 200, description = "Course found", body = CourseDetailResponse),
        (status = 404, description = "Session or course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn get_course(
    State(state): State<AppState>,
    Path((session_slug, slugs)): Path<(String, String)>,
    Query(params): Query<ScopeParams>,
) -> Result<Json<CourseDetailResponse>, StatusCode> {
    let locator = parse_course_slugs(&slugs).ok_or(StatusCode::NOT_FOUND)?;
    let scope = params.scope();

    let session = SessionService::get_session_by_slug(state.db.as_ref(), scope, &session_slug)
        .await
        .map_err(internal_error)?
        .ok_or(StatusCode::NOT_FOUND)?;

    let (course, classification) =
        CourseService::find_course(state.db.as_ref(), scope, session.id, locator)
            .await
            .map_err(internal_error)?
            .ok_or(StatusCode::NOT_FOUND)?;

    let sections = CourseService::get_sections(state.db.as_ref(), scope, course.id)
        .await
        .map_err(internal_error)?;

    let label = course.label(classification.as_ref().map(|c| c.code.as_str()));
    let smart_description = course
        .smart_description(sections.iter().map(|s| s.notes.as_str()))
        .to_string();

    let mut section_responses = Vec::with_capacity(sections.len());
    for section in sections {
        let meeting_groups = SectionService::grouped_meetings(state.db.as_ref(), section.id)
            .await
            .map_err(internal_error)?;
        section_responses.push(SectionResponse::new(
            section,
            &label,
            &smart_description,
            meeting_groups,
        ));
    }

    Ok(Json(CourseDetailResponse {
        id: course.id,
        session: SessionResponse::from(&session),
        classification: classification.as_ref().map(ClassificationResponse::from),
        url: course.url(&session, classification.as_ref()),
        smart_name: course.smart_name(),
        label,
        number: course.number,
        name: course.name,
        description: course.description,
        smart_description,
        grading: course.grading,
        profs: course.profs,
        sections: section_responses,
    }))
}
