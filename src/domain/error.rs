// Errors raised by the calendar and series core
use chrono::NaiveDate;
use std::fmt;

/// Which end of a requested period failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodBound {
    Start,
    End,
}

impl fmt::Display for PeriodBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodBound::Start => f.write_str("Start"),
            PeriodBound::End => f.write_str("End"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryError {
    #[error("Invalid week: {week} (ISO year {year} has {weeks_in_year} weeks)")]
    InvalidCalendarDate {
        year: i32,
        week: u32,
        weeks_in_year: u32,
    },

    #[error("Year is out of range: {year}")]
    YearOutOfRange { year: i32 },

    #[error("{bound} date ({date}) is out of bounds")]
    OutOfBounds { bound: PeriodBound, date: NaiveDate },

    #[error("Start date ({start}) must precede end date ({end})")]
    OrderingError { start: NaiveDate, end: NaiveDate },

    #[error("Start date ({start}) and end date ({end}) do not share the same weekday")]
    WeekdayMismatch { start: NaiveDate, end: NaiveDate },

    #[error("Store {store_id} does not exist")]
    NotFound { store_id: i64 },

    #[error("Invalid date provided")]
    InvalidDate { year: i32, month: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_input() {
        let start = NaiveDate::from_ymd_opt(2023, 4, 11).unwrap();
        let end = NaiveDate::from_ymd_opt(2023, 7, 17).unwrap();

        assert_eq!(
            QueryError::WeekdayMismatch { start, end }.to_string(),
            "Start date (2023-04-11) and end date (2023-07-17) do not share the same weekday"
        );
        assert_eq!(
            QueryError::OutOfBounds { bound: PeriodBound::End, date: end }.to_string(),
            "End date (2023-07-17) is out of bounds"
        );
        assert_eq!(
            QueryError::NotFound { store_id: 99 }.to_string(),
            "Store 99 does not exist"
        );
    }
}
