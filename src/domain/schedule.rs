//! Schedule - Weekly Live Sessions

/// Day of a live session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// Get the translation key for the day name
    pub fn label_key(&self) -> &'static str {
        match self {
            Weekday::Monday => "schedule.monday",
            Weekday::Tuesday => "schedule.tuesday",
            Weekday::Wednesday => "schedule.wednesday",
            Weekday::Thursday => "schedule.thursday",
            Weekday::Friday => "schedule.friday",
        }
    }
}

/// One row of the weekly schedule. Display-only: `course_title` is not
/// checked against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub day: Weekday,
    pub time: &'static str,
    pub course_title: &'static str,
    pub instructor: &'static str,
}
