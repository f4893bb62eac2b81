use crate::days::DaySlot;
use chrono::NaiveTime;
use std::str::FromStr;

/// Time and place shared by every meeting in a display group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotKey<'a> {
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
    pub location: &'a str,
    pub room: &'a str,
}

/// A recurring meeting that can be grouped for display
pub trait Scheduled {
    /// The raw day token stored for the meeting
    fn day(&self) -> &str;

    /// Time and place of the meeting, ignoring the day
    fn slot_key(&self) -> SlotKey<'_>;
}

/// Groups a section's meetings for display
///
/// Meetings are stably sorted by the canonical position of their day and then
/// split into consecutive runs sharing the same start, end, location and room.
/// The day is not part of the grouping key, so Monday and Wednesday meetings
/// at the same time and place end up in one group.
///
/// If any meeting has a day outside [`DaySlot::ORDER`], no ordering is
/// possible and every meeting is returned, in its original order, as a
/// single group.
pub fn group_meetings<M: Scheduled>(meetings: Vec<M>) -> Vec<Vec<M>> {
    let slots: Result<Vec<DaySlot>, _> = meetings
        .iter()
        .map(|meeting| DaySlot::from_str(meeting.day()))
        .collect();

    let Ok(slots) = slots else {
        return vec![meetings];
    };

    let mut ordered: Vec<(DaySlot, M)> = slots.into_iter().zip(meetings).collect();
    ordered.sort_by_key(|(slot, _)| *slot);

    let mut groups: Vec<Vec<M>> = Vec::new();
    for (_, meeting) in ordered {
        match groups.last_mut() {
            Some(group) if group[0].slot_key() == meeting.slot_key() => group.push(meeting),
            _ => groups.push(vec![meeting]),
        }
    }

    groups
}

#[cfg(test)]
mod test {
    use crate::meetings::{Scheduled, SlotKey, group_meetings};
    use chrono::NaiveTime;

    #[derive(Debug, Clone, PartialEq)]
    struct TestMeeting {
        day: &'static str,
        start: Option<NaiveTime>,
        end: Option<NaiveTime>,
        room: &'static str,
    }

    impl Scheduled for TestMeeting {
        fn day(&self) -> &str {
            self.day
        }

        fn slot_key(&self) -> SlotKey<'_> {
            SlotKey {
                start: self.start,
                end: self.end,
                location: "Main Campus",
                room: self.room,
            }
        }
    }

    fn meeting(day: &'static str, start: u32, end: u32, room: &'static str) -> TestMeeting {
        TestMeeting {
            day,
            start: NaiveTime::from_hms_opt(start, 0, 0),
            end: NaiveTime::from_hms_opt(end, 0, 0),
            room,
        }
    }

    fn days(group: &[TestMeeting]) -> Vec<&str> {
        group.iter().map(|m| m.day).collect()
    }

    #[test]
    fn test_group_same_time_and_room() {
        let groups = group_meetings(vec![
            meeting("Fri", 11, 12, "Rm B"),
            meeting("Wed", 9, 10, "Rm A"),
            meeting("Mon", 9, 10, "Rm A"),
        ]);

        assert_eq!(groups.len(), 2);
        assert_eq!(days(&groups[0]), ["Mon", "Wed"]);
        assert_eq!(days(&groups[1]), ["Fri"]);
    }

    #[test]
    fn test_group_only_merges_consecutive_runs() {
        let groups = group_meetings(vec![
            meeting("Mon", 9, 10, "Rm A"),
            meeting("Tue", 13, 14, "Rm C"),
            meeting("Wed", 9, 10, "Rm A"),
        ]);

        assert_eq!(groups.len(), 3);
        assert_eq!(days(&groups[2]), ["Wed"]);
    }

    #[test]
    fn test_group_tba_and_blank_days_sort_last() {
        let groups = group_meetings(vec![
            meeting("", 8, 9, "Rm D"),
            meeting("TBA", 8, 9, "Rm E"),
            meeting("Sun", 8, 9, "Rm F"),
        ]);

        let order: Vec<&str> = groups.iter().map(|g| g[0].day).collect();
        assert_eq!(order, ["Sun", "TBA", ""]);
    }

    #[test]
    fn test_group_unknown_day_falls_back() {
        let meetings = vec![
            meeting("Wed", 9, 10, "Rm A"),
            meeting("Holiday", 9, 10, "Rm A"),
            meeting("Mon", 9, 10, "Rm A"),
        ];
        let groups = group_meetings(meetings.clone());

        assert_eq!(groups, vec![meetings]);
    }

    #[test]
    fn test_group_empty() {
        let groups: Vec<Vec<TestMeeting>> = group_meetings(Vec::new());
        assert!(groups.is_empty());
    }
}
