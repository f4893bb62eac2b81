use models::meetings::{Scheduled, SlotKey};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// One recurring time and place of a section
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "meetings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub section_id: Uuid,
    pub day: String, // "Mon" through "Sun"
    pub start: Option<Time>,
    pub end: Option<Time>,
    pub location: String,
    pub room: String,
}

impl Scheduled for Model {
    fn day(&self) -> &str {
        &self.day
    }

    fn slot_key(&self) -> SlotKey<'_> {
        SlotKey {
            start: self.start,
            end: self.end,
            location: &self.location,
            room: &self.room,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sections::Entity",
        from = "Column::SectionId",
        to = "super::sections::Column::Id"
    )]
    Section,
}

impl Related<super::sections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Section.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Display for Model {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let time = |t: Option<Time>| t.map_or("None".to_string(), |t| t.to_string());
        write!(f, "{}: {} - {}", self.day, time(self.start), time(self.end))
    }
}

#[cfg(test)]
mod test {
    use crate::entities::meetings;
    use chrono::NaiveTime;
    use sea_orm::prelude::Uuid;

    #[test]
    fn test_meeting_display() {
        let meeting = meetings::Model {
            id: Uuid::new_v4(),
            section_id: Uuid::new_v4(),
            day: "Mon".to_string(),
            start: NaiveTime::from_hms_opt(9, 30, 0),
            end: None,
            location: "Silver Center".to_string(),
            room: "207".to_string(),
        };

        assert_eq!(meeting.to_string(), "Mon: 09:30:00 - None");
    }
}
