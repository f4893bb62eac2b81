use chrono::NaiveDate;
use database::{
    entities::{classifications, colleges, courses, levels, session_infos, sessions},
    scope::NetworkScope,
};
use sea_orm::prelude::Uuid;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub id: Uuid,
    pub network_id: Uuid,
    pub name: String,
    pub slug: String,
    pub system_code: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub active: bool,
    pub url: String,
}

impl From<&sessions::Model> for SessionResponse {
    fn from(session: &sessions::Model) -> Self {
        Self {
            id: session.id,
            network_id: session.network_id,
            name: session.name.clone(),
            slug: session.slug.clone(),
            system_code: session.system_code.clone(),
            start_date: session.start_date,
            end_date: session.end_date,
            active: session.active,
            url: session.url(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionInfoResponse {
    pub info_type: String,
    pub info_value: String,
}

impl From<session_infos::Model> for SessionInfoResponse {
    fn from(info: session_infos::Model) -> Self {
        Self {
            info_type: info.info_type,
            info_value: info.info_value,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CollegeResponse {
    pub id: Uuid,
    pub name: String,
    pub short_name: String,
    pub slug: String,
}

impl From<colleges::Model> for CollegeResponse {
    fn from(college: colleges::Model) -> Self {
        Self {
            id: college.id,
            short_name: college.short_name().to_string(),
            name: college.name,
            slug: college.slug,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClassificationResponse {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub slug: String,
    /// Academic level encoded in the code, if it encodes one
    pub level: Option<String>,
}

impl From<&classifications::Model> for ClassificationResponse {
    fn from(classification: &classifications::Model) -> Self {
        let level = classification
            .level()
            .ok()
            .flatten()
            .map(|level| level.as_str().to_string());

        Self {
            id: classification.id,
            code: classification.code.clone(),
            name: classification.name.clone(),
            slug: classification.slug.clone(),
            level,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LevelResponse {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

impl From<levels::Model> for LevelResponse {
    fn from(level: levels::Model) -> Self {
        Self {
            id: level.id,
            name: level.name,
            slug: level.slug,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseSummaryResponse {
    pub id: Uuid,
    pub label: String,
    pub smart_name: String,
    pub number: String,
    pub classification_code: Option<String>,
    pub profs: String,
    pub url: String,
}

impl CourseSummaryResponse {
    pub fn new(
        session: &sessions::Model,
        course: &courses::Model,
        classification: Option<&classifications::Model>,
    ) -> Self {
        let classification_code = classification.map(|c| c.code.clone());

        Self {
            id: course.id,
            label: course.label(classification_code.as_deref()),
            smart_name: course.smart_name(),
            number: course.number.clone(),
            classification_code,
            profs: course.profs.clone(),
            url: course.url(session, classification),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionDetailResponse {
    pub session: SessionResponse,
    pub infos: Vec<SessionInfoResponse>,
    pub colleges: Vec<CollegeResponse>,
    pub classifications: Vec<ClassificationResponse>,
    pub levels: Vec<LevelResponse>,
    pub courses: Vec<CourseSummaryResponse>,
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
pub struct SessionQueryParams {
    /// Only list sessions of this network
    pub network_id: Option<Uuid>,

    /// Only list active sessions
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
pub struct ScopeParams {
    /// Only match rows of this network
    pub network_id: Option<Uuid>,
}

impl ScopeParams {
    pub fn scope(&self) -> NetworkScope {
        NetworkScope::new(self.network_id)
    }
}
