//! The weekly birthday window.

use crate::domain::Birthday;
use chrono::{Datelike, Duration, NaiveDate};

/// Monday through Sunday of the week after a reference date, inclusive.
///
/// Dates carry no time of day, so the inclusive Sunday bound covers the
/// whole of Sunday up to 23:59:59.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayWindow {
    start: NaiveDate,
    end: NaiveDate,
    year: i32,
}

impl BirthdayWindow {
    /// Window starting on the first Monday strictly after `reference`.
    ///
    /// A Monday reference moves a full seven days ahead.
    pub fn following(reference: NaiveDate) -> Self {
        let days_to_monday = 7 - i64::from(reference.weekday().num_days_from_monday());
        let start = reference + Duration::days(days_to_monday);
        Self {
            start,
            end: start + Duration::days(6),
            year: reference.year(),
        }
    }

    /// The Monday opening the window.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// The Sunday closing the window.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Calendar year of the reference date; birthdays are stamped onto it.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The date a birthday is observed inside this window, if it is.
    ///
    /// Month and day are stamped onto the reference year and the birth year
    /// is ignored. A window that starts in the next calendar year therefore
    /// matches nothing.
    pub fn occurrence_of(&self, birthday: &Birthday) -> Option<NaiveDate> {
        birthday
            .occurrence_in(self.year)
            .filter(|date| self.contains(*date))
    }
}
