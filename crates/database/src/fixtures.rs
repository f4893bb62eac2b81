//! Catalog rows shared by the mock database tests.

use crate::entities::{classifications, courses, meetings, sections, sessions};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use sea_orm::prelude::Uuid;

pub fn timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2012, 8, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

pub fn session() -> sessions::Model {
    sessions::Model {
        id: Uuid::new_v4(),
        network_id: Uuid::new_v4(),
        name: "Fall 2012".to_string(),
        slug: "fall-2012".to_string(),
        system_code: None,
        start_date: NaiveDate::from_ymd_opt(2012, 9, 4).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2012, 12, 21).unwrap(),
        active: true,
    }
}

pub fn classification(network_id: Uuid, code: &str) -> classifications::Model {
    classifications::Model {
        id: Uuid::new_v4(),
        network_id,
        institution_id: Uuid::new_v4(),
        college_id: None,
        code: code.to_string(),
        name: "Anthropology".to_string(),
        slug: "anthropology".to_string(),
    }
}

pub fn course(session_id: Uuid, description: &str) -> courses::Model {
    courses::Model {
        id: Uuid::new_v4(),
        network_id: None,
        institution_id: None,
        college_id: None,
        classification_id: None,
        session_id,
        level_id: None,
        number: "101".to_string(),
        description: description.to_string(),
        grading: "CAS Graded".to_string(),
        name: "Animals & Society".to_string(),
        slug: "animals-society".to_string(),
        profs: String::new(),
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

pub fn section(course_id: Uuid, number: &str, prof: &str, notes: &str) -> sections::Model {
    sections::Model {
        id: Uuid::new_v4(),
        network_id: None,
        institution_id: None,
        course_id,
        status: "Open".to_string(),
        number: number.to_string(),
        name: String::new(),
        notes: notes.to_string(),
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
        location: "Silver Center".to_string(),
        room: "207".to_string(),
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

pub fn meeting(section_id: Uuid, day: &str, start: u32, room: &str) -> meetings::Model {
    meetings::Model {
        id: Uuid::new_v4(),
        section_id,
        day: day.to_string(),
        start: NaiveTime::from_hms_opt(start, 0, 0),
        end: NaiveTime::from_hms_opt(start + 1, 0, 0),
        location: "Main Campus".to_string(),
        room: room.to_string(),
    }
}
