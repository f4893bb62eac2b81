use axum::http::StatusCode;
use log::error;
use sea_orm::DbErr;

/// Logs a database error and maps it to a 500 response
pub fn internal_error(err: DbErr) -> StatusCode {
    error!("Database error: {err}");
    StatusCode::INTERNAL_SERVER_ERROR
}
