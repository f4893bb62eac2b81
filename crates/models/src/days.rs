use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString, IntoEnumIterator};

/// A day of the week a meeting can be scheduled on
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    AsRefStr,
    StrumDisplay,
)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Day {
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    pub fn all() -> Vec<Day> {
        Day::iter().collect()
    }
}

/// Position of a meeting day in the canonical display order
///
/// Variants are declared in display order, so the derived `Ord` sorts
/// Monday through Sunday, then TBA, then meetings with no day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DaySlot {
    Day(Day),
    /// To be announced
    Tba,
    /// No day recorded
    Unspecified,
}

impl DaySlot {
    /// Every token accepted for a meeting day, in display order
    pub const ORDER: [&'static str; 9] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun", "TBA", ""];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Day(day) => day.as_str(),
            Self::Tba => "TBA",
            Self::Unspecified => "",
        }
    }

    /// Index of this slot in [`DaySlot::ORDER`]
    pub fn index(self) -> usize {
        match self {
            Self::Day(day) => day as usize,
            Self::Tba => 7,
            Self::Unspecified => 8,
        }
    }
}

/// A day token outside the canonical order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnknownDay(pub String);

impl Display for UnknownDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Unknown meeting day '{}'", self.0)
    }
}

impl FromStr for DaySlot {
    type Err = UnknownDay;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "TBA" => Ok(Self::Tba),
            "" => Ok(Self::Unspecified),
            _ => Day::from_str(token)
                .map(Self::Day)
                .map_err(|_| UnknownDay(token.to_owned())),
        }
    }
}

impl Display for DaySlot {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod test {
    use crate::days::{Day, DaySlot, UnknownDay};
    use std::str::FromStr;

    #[test]
    fn test_day_from_str() {
        assert_eq!(Day::from_str("Mon").unwrap(), Day::Mon);
        assert_eq!(Day::from_str("Sun").unwrap(), Day::Sun);
        assert!(Day::from_str("Monday").is_err());
        assert!(Day::from_str("mon").is_err());
    }

    #[test]
    fn test_day_choices() {
        let days: Vec<String> = Day::all().iter().map(Day::to_string).collect();
        assert_eq!(days, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
    }

    #[test]
    fn test_day_slot_order_matches_tokens() {
        for (index, token) in DaySlot::ORDER.iter().enumerate() {
            let slot = DaySlot::from_str(token).unwrap();
            assert_eq!(slot.index(), index);
            assert_eq!(slot.as_str(), *token);
        }
    }

    #[test]
    fn test_day_slot_sorting() {
        let mut slots = vec![
            DaySlot::Unspecified,
            DaySlot::Day(Day::Fri),
            DaySlot::Tba,
            DaySlot::Day(Day::Mon),
        ];
        slots.sort();

        assert_eq!(
            slots,
            [
                DaySlot::Day(Day::Mon),
                DaySlot::Day(Day::Fri),
                DaySlot::Tba,
                DaySlot::Unspecified
            ]
        );
    }

    #[test]
    fn test_day_slot_unknown() {
        assert_eq!(
            DaySlot::from_str("Holiday"),
            Err(UnknownDay("Holiday".to_string()))
        );
    }
}
