// Calendar service - Use cases for ISO week lookups
use crate::domain::calendar::{self, CalendarRef};
use crate::domain::error::QueryError;
use crate::domain::validity::ValidityWindow;
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct CalendarService {
    window: ValidityWindow,
}

impl CalendarService {
    pub fn new(window: ValidityWindow) -> Self {
        Self { window }
    }

    /// Whether the coordinates resolve to a date inside the window.
    ///
    /// Coordinates that do not resolve at all are reported as `false`.
    pub fn date_validity(&self, calendar_ref: CalendarRef) -> bool {
        match calendar_ref.resolve() {
            Ok(date) => self.window.is_valid(date),
            Err(e) => {
                tracing::debug!("Unresolvable calendar reference {:?}: {}", calendar_ref, e);
                false
            }
        }
    }

    pub fn get_date(&self, calendar_ref: CalendarRef) -> Result<NaiveDate, QueryError> {
        calendar_ref.resolve()
    }

    pub fn check_friday_13(&self, year: i32, month: u32) -> Result<bool, QueryError> {
        calendar::is_friday_13(year, month)
    }
}
