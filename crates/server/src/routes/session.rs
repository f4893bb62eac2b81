use crate::{
    dtos::session::{
        ClassificationResponse, CollegeResponse, CourseSummaryResponse, LevelResponse,
        ScopeParams, SessionDetailResponse, SessionInfoResponse, SessionQueryParams,
        SessionResponse,
    },
    routes::AppState,
    utils::error::internal_error,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use database::{
    scope::NetworkScope,
    services::{course::CourseService, session::SessionService},
};

/// List sessions, newest first
#[utoipa::path(
    get,
    path = "/sessions",
    params(SessionQueryParams),
    responses(
        (status = 200, description = "Sessions retrieved successfully", body = Vec<SessionResponse>),
        (status = 400, description = "Invalid query parameters"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Sessions"
)]
pub async fn list_sessions(
    State(state): State<AppState>,
    Query(params): Query<SessionQueryParams>,
) -> Result<Json<Vec<SessionResponse>>, StatusCode> {
    let scope = NetworkScope::new(params.network_id);
    let sessions = SessionService::list_sessions(state.db.as_ref(), scope, params.active)
        .await
        .map_err(internal_error)?;

    Ok(Json(sessions.iter().map(SessionResponse::from).collect()))
}

/// Get a session with its linked catalog data and courses
#[utoipa::path(
    get,
    path = "/sessions/{session_slug}",
    params(
        ("session_slug" = String, Path, description = "Session slug"),
        ScopeParams
    ),
    responses(
        (status = 200, description = "Session found", body = SessionDetailResponse),
        (status = 404, description = "Session not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Sessions"
)]
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_slug): Path<String>,
    Query(params): Query<ScopeParams>,
) -> Result<Json<SessionDetailResponse>, StatusCode> {
    let scope = params.scope();
    let session = SessionService::get_session_by_slug(state.db.as_ref(), scope, &session_slug)
        .await
        .map_err(internal_error)?
        .ok_or(StatusCode::NOT_FOUND)?;

    let courses = CourseService::get_courses_for_session(state.db.as_ref(), scope, session.id)
        .await
        .map_err(internal_error)?;
    let detail = SessionService::get_session_detail(state.db.as_ref(), scope, session)
        .await
        .map_err(internal_error)?;

    let courses = courses
        .iter()
        .map(|(course, classification)| {
            CourseSummaryResponse::new(&detail.session, course, classification.as_ref())
        })
        .collect();

    Ok(Json(SessionDetailResponse {
        session: SessionResponse::from(&detail.session),
        infos: detail.infos.into_iter().map(SessionInfoResponse::from).collect(),
        colleges: detail.colleges.into_iter().map(CollegeResponse::from).collect(),
        classifications: detail
            .classifications
            .iter()
            .map(ClassificationResponse::from)
            .collect(),
        levels: detail.levels.into_iter().map(LevelResponse::from).collect(),
        courses,
    }))
}
