use crate::dtos::session::{ClassificationResponse, SessionResponse};
use chrono::NaiveTime;
use database::entities::{meetings, sections};
use sea_orm::prelude::Uuid;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseDetailResponse {
    pub id: Uuid,
    pub session: SessionResponse,
    pub classification: Option<ClassificationResponse>,
    pub label: String,
    pub number: String,
    pub name: String,
    pub smart_name: String,
    pub description: String,
    /// The description, or the note every section shares when the description is empty
    pub smart_description: String,
    pub grading: String,
    pub profs: String,
    pub url: String,
    pub sections: Vec<SectionResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SectionResponse {
    pub id: Uuid,
    pub label: String,
    pub number: String,
    pub padded_number: String,
    pub status: String,
    pub name: String,
    pub notes: String,
    /// Empty when the notes are already shown as the course description
    pub smart_notes: String,
    pub prof: String,
    pub instructors: Vec<String>,
    pub units: String,
    pub component: String,
    pub reference_code: String,
    pub seats_capacity: Option<i32>,
    pub seats_taken: Option<i32>,
    pub seats_available: Option<i32>,
    pub waitlist_capacity: Option<i32>,
    pub waitlist_taken: Option<i32>,
    pub waitlist_available: Option<i32>,
    pub location: String,
    pub room: String,
    /// Meetings sharing a time and place, in day order
    pub meeting_groups: Vec<Vec<MeetingResponse>>,
}

impl SectionResponse {
    pub fn new(
        section: sections::Model,
        course_label: &str,
        course_smart_description: &str,
        meeting_groups: Vec<Vec<meetings::Model>>,
    ) -> Self {
        let meeting_groups = meeting_groups
            .into_iter()
            .map(|group| group.into_iter().map(MeetingResponse::from).collect())
            .collect();

        Self {
            id: section.id,
            label: section.label(course_label),
            padded_number: section.padded_number(),
            smart_notes: section.smart_notes(course_smart_description).to_string(),
            instructors: section.profs().into_iter().map(str::to_string).collect(),
            number: section.number,
            status: section.status,
            name: section.name,
            notes: section.notes,
            prof: section.prof,
            units: section.units,
            component: section.component,
            reference_code: section.reference_code,
            seats_capacity: section.seats_capacity,
            seats_taken: section.seats_taken,
            seats_available: section.seats_available,
            waitlist_capacity: section.waitlist_capacity,
            waitlist_taken: section.waitlist_taken,
            waitlist_available: section.waitlist_available,
            location: section.location,
            room: section.room,
            meeting_groups,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MeetingResponse {
    pub id: Uuid,
    pub day: String,
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
    pub location: String,
    pub room: String,
}

impl From<meetings::Model> for MeetingResponse {
    fn from(meeting: meetings::Model) -> Self {
        Self {
            id: meeting.id,
            day: meeting.day,
            start: meeting.start,
            end: meeting.end,
            location: meeting.location,
            room: meeting.room,
        }
    }
}

#[cfg(test)]
mod test {
    use super::SectionResponse;
    use database::entities::{meetings, sections};
    use sea_orm::prelude::Uuid;

    fn section(notes: &str) -> sections::Model {
        let now = chrono::Utc::now().naive_utc();
        sections::Model {
            id: Uuid::new_v4(),
            network_id: None,
            institution_id: None,
            course_id: Uuid::new_v4(),
            status: "Open".to_string(),
            number: "1".to_string(),
            name: String::new(),
            notes: notes.to_string(),
            prof: "Jane Goodall, Frans de Waal".to_string(),
            units: "4".to_string(),
            component: "Lecture".to_string(),
            reference_code: "7788".to_string(),
            seats_capacity: Some(30),
            seats_taken: Some(12),
            seats_available: Some(18),
            waitlist_capacity: None,
            waitlist_taken: None,
            waitlist_available: None,
            location: "Silver Center".to_string(),
            room: "207".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn meeting(day: &str) -> meetings::Model {
        meetings::Model {
            id: Uuid::new_v4(),
            section_id: Uuid::new_v4(),
            day: day.to_string(),
            start: None,
            end: None,
            location: "Silver Center".to_string(),
            room: "207".to_string(),
        }
    }

    #[test]
    fn section_display_fields() {
        let response = SectionResponse::new(
            section("Meets off campus"),
            "Animals & Society (ANTH-UA-101)",
            "",
            vec![vec![meeting("Mon"), meeting("Wed")]],
        );

        assert_eq!(response.padded_number, "001");
        assert_eq!(response.label, "Animals & Society (ANTH-UA-101) .1");
        assert_eq!(response.instructors, vec!["Jane Goodall", "Frans de Waal"]);
        assert_eq!(response.smart_notes, "Meets off campus");
        assert_eq!(response.meeting_groups.len(), 1);
        assert_eq!(response.meeting_groups[0][1].day, "Wed");
    }

    #[test]
    fn notes_promoted_to_description_are_suppressed() {
        let response = SectionResponse::new(
            section("Meets off campus"),
            "Animals & Society (ANTH-UA-101)",
            "Meets off campus",
            Vec::new(),
        );

        assert_eq!(response.notes, "Meets off campus");
        assert_eq!(response.smart_notes, "");
    }
}
