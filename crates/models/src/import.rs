use crate::{catalog::join_profs, slug::slug_from_name};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// A course as delivered by a catalog import, with its sections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub number: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub grading: String,
    /// Classification code, resolved within the session's network
    #[serde(default)]
    pub classification: Option<String>,
    #[serde(default)]
    pub sections: Vec<SectionRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionRecord {
    pub number: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub prof: String,
    #[serde(default)]
    pub units: String,
    #[serde(default)]
    pub component: String, // Lecture, Recitation
    #[serde(default)]
    pub reference_code: String,
    pub seats_capacity: Option<i32>,
    pub seats_taken: Option<i32>,
    pub seats_available: Option<i32>,
    pub waitlist_capacity: Option<i32>,
    pub waitlist_taken: Option<i32>,
    pub waitlist_available: Option<i32>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub room: String,
    #[serde(default)]
    pub meetings: Vec<MeetingRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingRecord {
    pub day: String,
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub room: String,
}

/// A record value wider than the column it is stored in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTooLong {
    pub field: &'static str,
    pub max: usize,
    pub value: String,
}

impl Display for FieldTooLong {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(
            f,
            "{} '{}' is longer than {} characters",
            self.field, self.value, self.max
        )
    }
}

impl std::error::Error for FieldTooLong {}

fn check_width(field: &'static str, value: &str, max: usize) -> Result<(), FieldTooLong> {
    if value.chars().count() > max {
        return Err(FieldTooLong {
            field,
            max,
            value: value.to_owned(),
        });
    }

    Ok(())
}

impl CourseRecord {
    /// Checks every stored value of the course, its sections and meetings against its column width
    pub fn validate(&self) -> Result<(), FieldTooLong> {
        check_width("course.number", &self.number, 10)?;
        check_width("course.grading", &self.grading, 50)?;
        check_width("course.name", &self.name, 255)?;

        self.sections.iter().try_for_each(SectionRecord::validate)
    }

    /// Instructors of every section, ordered by section number like a section query
    pub fn profs(&self) -> String {
        let mut sections: Vec<&SectionRecord> = self.sections.iter().collect();
        sections.sort_by(|a, b| a.number.cmp(&b.number));

        join_profs(sections.into_iter().map(|section| section.prof.as_str()))
    }

    pub fn slug(&self) -> String {
        slug_from_name(&self.name).unwrap_or_default()
    }
}

impl SectionRecord {
    pub fn validate(&self) -> Result<(), FieldTooLong> {
        check_width("section.number", &self.number, 20)?;
        check_width("section.status", &self.status, 20)?;
        check_width("section.name", &self.name, 255)?;
        check_width("section.prof", &self.prof, 255)?;
        check_width("section.units", &self.units, 10)?;
        check_width("section.component", &self.component, 20)?;
        check_width("section.reference_code", &self.reference_code, 10)?;
        check_width("section.location", &self.location, 100)?;
        check_width("section.room", &self.room, 20)?;

        self.meetings.iter().try_for_each(MeetingRecord::validate)
    }
}

impl MeetingRecord {
    pub fn validate(&self) -> Result<(), FieldTooLong> {
        check_width("meeting.day", &self.day, 3)?;
        check_width("meeting.location", &self.location, 100)?;
        check_width("meeting.room", &self.room, 20)
    }
}

#[cfg(test)]
mod test {
    use crate::import::{CourseRecord, FieldTooLong};

    const RECORD: &str = r#"{
        "number": "101",
        "name": "Animals & Society",
        "classification": "ANTH-UA",
        "sections": [
            {
                "number": "002",
                "prof": "Jane Goodall",
                "seats_capacity": 30,
                "meetings": [
                    { "day": "Tue", "start": "09:30:00", "end": "10:45:00", "room": "101" }
                ]
            },
            { "number": "001", "prof": "Frans de Waal" }
        ]
    }"#;

    #[test]
    fn test_course_record_defaults() {
        let record: CourseRecord = serde_json::from_str(RECORD).unwrap();

        assert_eq!(record.description, "");
        assert_eq!(record.sections.len(), 2);
        assert_eq!(record.sections[0].seats_capacity, Some(30));
        assert_eq!(record.sections[1].seats_capacity, None);
        assert_eq!(record.sections[0].meetings[0].location, "");
    }

    #[test]
    fn test_course_record_derived_fields() {
        let record: CourseRecord = serde_json::from_str(RECORD).unwrap();

        assert_eq!(record.profs(), "Frans de Waal Jane Goodall");
        assert_eq!(record.slug(), "animals-society");
    }

    #[test]
    fn test_course_record_validate() {
        let record: CourseRecord = serde_json::from_str(RECORD).unwrap();
        assert_eq!(record.validate(), Ok(()));

        // an unknown day that fits the column is kept
        let mut odd_day = record.clone();
        odd_day.sections[0].meetings[0].day = "Hol".to_string();
        assert_eq!(odd_day.validate(), Ok(()));
    }

    #[test]
    fn test_course_record_validate_wide_values() {
        let record: CourseRecord = serde_json::from_str(RECORD).unwrap();

        let mut holiday = record.clone();
        holiday.sections[0].meetings[0].day = "Holiday".to_string();
        assert_eq!(
            holiday.validate(),
            Err(FieldTooLong {
                field: "meeting.day",
                max: 3,
                value: "Holiday".to_string(),
            })
        );

        let mut room = record.clone();
        room.sections[1].room = "r".repeat(21);
        assert_eq!(room.validate().unwrap_err().field, "section.room");

        let mut number = record;
        number.number = "12345678901".to_string();
        assert_eq!(
            number.validate().unwrap_err().to_string(),
            "course.number '12345678901' is longer than 10 characters"
        );
    }

    #[test]
    fn test_width_counts_characters() {
        let record: CourseRecord = serde_json::from_str(RECORD).unwrap();

        let mut accented = record;
        accented.number = "ÉÉÉÉÉÉÉÉÉÉ".to_string();
        assert_eq!(accented.validate(), Ok(()));
    }
}
