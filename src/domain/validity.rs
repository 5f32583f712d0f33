// Authorized business-data window
use crate::domain::calendar::{CalendarRef, WeekStrategy};
use crate::domain::error::QueryError;
use chrono::NaiveDate;

/// Inclusive date range for which mock data is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidityWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl ValidityWindow {
    pub fn from_iso_weeks(start: CalendarRef, end: CalendarRef) -> Result<Self, QueryError> {
        Ok(Self {
            start: start.resolve()?,
            end: end.resolve()?,
        })
    }

    /// Monday of ISO 2022-W42 through Monday of ISO 2023-W29.
    pub fn authorized() -> Result<Self, QueryError> {
        Self::from_iso_weeks(
            CalendarRef::new(2022, 42, WeekStrategy::Monday),
            CalendarRef::new(2023, 29, WeekStrategy::Monday),
        )
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn is_valid(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
