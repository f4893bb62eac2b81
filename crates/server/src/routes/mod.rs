use crate::doc::ApiDoc;
use axum::{Router, routing::get};
use models::urls::{COURSE_ROUTE, SESSION_ROUTE};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod course;
pub mod health;
pub mod session;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
}

/// Builds the application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/sessions", get(session::list_sessions))
        .route(SESSION_ROUTE, get(session::get_session))
        .route(COURSE_ROUTE, get(course::get_course))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(state)
}

#[cfg(test)]
mod test {
    use super::{AppState, app};
    use std::sync::Arc;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use chrono::{NaiveDate, NaiveTime};
    use database::entities::{classifications, courses, meetings, sections, sessions};
    use sea_orm::{DatabaseBackend, MockDatabase, prelude::Uuid};
    use tower::ServiceExt;

    fn session(name: &str, slug: &str) -> sessions::Model {
        sessions::Model {
            id: Uuid::new_v4(),
            network_id: Uuid::new_v4(),
            name: name.to_string(),
            slug: slug.to_string(),
            system_code: None,
            start_date: NaiveDate::from_ymd_opt(2024, 9, 3).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 20).unwrap(),
            active: true,
        }
    }

    fn classification(network_id: Uuid) -> classifications::Model {
        classifications::Model {
            id: Uuid::new_v4(),
            network_id,
            institution_id: Uuid::new_v4(),
            college_id: None,
            code: "ANTH-UA".to_string(),
            name: "Anthropology".to_string(),
            slug: "anthropology".to_string(),
        }
    }

    fn course(session: &sessions::Model, classification: &classifications::Model) -> courses::Model {
        let created = NaiveDate::from_ymd_opt(2024, 8, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        courses::Model {
            id: Uuid::new_v4(),
            network_id: Some(session.network_id),
            institution_id: None,
            college_id: None,
            classification_id: Some(classification.id),
            session_id: session.id,
            level_id: None,
            number: "101".to_string(),
            description: String::new(),
            grading: "CAS Graded".to_string(),
            name: "Animals & Society".to_string(),
            slug: "animals-society".to_string(),
            profs: "Frans de Waal Jane Goodall".to_string(),
            created_at: created,
            updated_at: created,
        }
    }

    fn section(course: &courses::Model, number: &str, prof: &str) -> sections::Model {
        sections::Model {
            id: Uuid::new_v4(),
            network_id: course.network_id,
            institution_id: None,
            course_id: course.id,
            status: "Open".to_string(),
            number: number.to_string(),
            name: String::new(),
            notes: "Bring binoculars".to_string(),
            prof: prof.to_string(),
            units: "4".to_string(),
            component: "Lecture".to_string(),
            reference_code: String::new(),
            seats_capacity: Some(30),
            seats_taken: None,
            seats_available: None,
            waitlist_capacity: None,
            waitlist_taken: None,
            waitlist_available: None,
            location: String::new(),
            room: String::new(),
            created_at: course.created_at,
            updated_at: course.updated_at,
        }
    }

    fn meeting(section: &sections::Model, day: &str, start: u32) -> meetings::Model {
        meetings::Model {
            id: Uuid::new_v4(),
            section_id: section.id,
            day: day.to_string(),
            start: NaiveTime::from_hms_opt(start, 0, 0),
            end: NaiveTime::from_hms_opt(start + 1, 15, 0),
            location: "Silver Center".to_string(),
            room: "207".to_string(),
        }
    }

    fn state(db: MockDatabase) -> AppState {
        AppState {
            db: Arc::new(db.into_connection()),
        }
    }

    async fn get(state: AppState, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, body.to_vec())
    }

    #[tokio::test]
    async fn health() {
        let (status, body) = get(state(MockDatabase::new(DatabaseBackend::Postgres)), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"OK");
    }

    #[tokio::test]
    async fn lists_sessions_with_urls() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_results([vec![
            session("Spring 2025", "spring-2025"),
            session("Fall 2024", "fall-2024"),
        ]]);

        let (status, body) = get(state(db), "/sessions?active=true").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let urls: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["url"].as_str().unwrap())
            .collect();
        assert_eq!(urls, vec!["/sessions/spring-2025", "/sessions/fall-2024"]);
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<sessions::Model>::new()]);

        let (status, _) = get(state(db), "/sessions/winter-1999").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn malformed_course_path_is_not_found() {
        let (status, _) = get(
            state(MockDatabase::new(DatabaseBackend::Postgres)),
            "/sessions/fall-2024/courses/anthropology",
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn database_errors_are_internal() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([sea_orm::DbErr::Custom("connection reset".to_string())]);

        let (status, _) = get(state(db), "/sessions").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn course_detail_promotes_shared_notes() {
        let session = session("Fall 2024", "fall-2024");
        let classification = classification(session.network_id);
        let course = course(&session, &classification);
        let lecture = section(&course, "001", "Frans de Waal");
        let recitation = section(&course, "002", "Jane Goodall");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![session.clone()]])
            .append_query_results([vec![(course.clone(), Some(classification.clone()))]])
            .append_query_results([vec![lecture.clone(), recitation.clone()]])
            .append_query_results([vec![
                meeting(&lecture, "Wed", 9),
                meeting(&lecture, "Mon", 9),
            ]])
            .append_query_results([vec![meeting(&recitation, "Fri", 14)]]);

        let (status, body) = get(
            state(db),
            "/sessions/fall-2024/courses/anthropology/animals-society/ANTH-UA-101",
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json["url"],
            "/sessions/fall-2024/courses/anthropology/animals-society/ANTH-UA-101"
        );
        assert_eq!(json["label"], "Animals & Society (ANTH-UA-101)");
        assert_eq!(json["smart_description"], "Bring binoculars");

        let sections = json["sections"].as_array().unwrap();
        assert_eq!(sections.len(), 2);
        for section in sections {
            assert_eq!(section["notes"], "Bring binoculars");
            assert_eq!(section["smart_notes"], "");
        }

        let lecture_days: Vec<&str> = sections[0]["meeting_groups"][0]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["day"].as_str().unwrap())
            .collect();
        assert_eq!(lecture_days, vec!["Mon", "Wed"]);
        assert_eq!(sections[0]["meeting_groups"].as_array().unwrap().len(), 1);
        assert_eq!(sections[1]["meeting_groups"].as_array().unwrap().len(), 1);
        assert_eq!(sections[1]["meeting_groups"][0][0]["day"], "Fri");
    }

    #[tokio::test]
    async fn unknown_course_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![session("Fall 2024", "fall-2024")]])
            .append_query_results([Vec::<(courses::Model, Option<classifications::Model>)>::new()]);

        let (status, _) = get(
            state(db),
            "/sessions/fall-2024/courses/anthropology/animals-society/ANTH-UA-999",
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
