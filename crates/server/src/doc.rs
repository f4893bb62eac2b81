use crate::routes::{course, health, session};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        session::list_sessions,
        session::get_session,
        course::get_course
    ),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Sessions", description = "Academic sessions and their catalogs"),
        (name = "Courses", description = "Course detail pages"),
    ),
    info(
        title = "Course Catalog API",
        version = "1.0.0",
        description = "Read-only course catalog API",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
