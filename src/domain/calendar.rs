// ISO week-date resolution
use crate::domain::error::QueryError;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Weekday anchor used to pin a concrete date inside an ISO week.
///
/// On the wire a strategy is the ISO weekday number: 1 (Monday), 4 (Thursday)
/// or 7 (Sunday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum WeekStrategy {
    Monday,
    Thursday,
    Sunday,
}

impl WeekStrategy {
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStrategy::Monday => Weekday::Mon,
            WeekStrategy::Thursday => Weekday::Thu,
            WeekStrategy::Sunday => Weekday::Sun,
        }
    }

    pub fn iso_number(self) -> u8 {
        self.weekday().number_from_monday() as u8
    }
}

impl TryFrom<u8> for WeekStrategy {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(WeekStrategy::Monday),
            4 => Ok(WeekStrategy::Thursday),
            7 => Ok(WeekStrategy::Sunday),
            other => Err(format!(
                "Invalid week strategy: {} (expected 1, 4 or 7)",
                other
            )),
        }
    }
}

impl From<WeekStrategy> for u8 {
    fn from(strategy: WeekStrategy) -> Self {
        strategy.iso_number()
    }
}

/// An ISO year/week plus the weekday anchor to resolve it with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarRef {
    pub year: i32,
    pub week: u32,
    pub strategy: WeekStrategy,
}

impl CalendarRef {
    pub fn new(year: i32, week: u32, strategy: WeekStrategy) -> Self {
        Self {
            year,
            week,
            strategy,
        }
    }

    pub fn resolve(&self) -> Result<NaiveDate, QueryError> {
        resolve(self.year, self.week, self.strategy)
    }
}

/// Number of ISO weeks (52 or 53) in `year`.
///
/// December 28th always falls in the last ISO week of its year.
pub fn weeks_in_year(year: i32) -> Result<u32, QueryError> {
    NaiveDate::from_ymd_opt(year, 12, 28)
        .map(|d| d.iso_week().week())
        .ok_or(QueryError::YearOutOfRange { year })
}

/// Convert an ISO (year, week, weekday) triple to a calendar date.
pub fn resolve(year: i32, week: u32, strategy: WeekStrategy) -> Result<NaiveDate, QueryError> {
    let weeks = weeks_in_year(year)?;

    NaiveDate::from_isoywd_opt(year, week, strategy.weekday()).ok_or(
        QueryError::InvalidCalendarDate {
            year,
            week,
            weeks_in_year: weeks,
        },
    )
}

/// Whether the 13th of the given month is a Friday.
pub fn is_friday_13(year: i32, month: u32) -> Result<bool, QueryError> {
    NaiveDate::from_ymd_opt(year, month, 13)
        .map(|d| d.weekday() == Weekday::Fri)
        .ok_or(QueryError::InvalidDate { year, month })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_resolve_each_strategy() {
        assert_eq!(resolve(2023, 9, WeekStrategy::Monday).unwrap(), date(2023, 2, 27));
        assert_eq!(resolve(2023, 9, WeekStrategy::Thursday).unwrap(), date(2023, 3, 2));
        assert_eq!(resolve(2023, 9, WeekStrategy::Sunday).unwrap(), date(2023, 3, 5));
    }

    #[test]
    fn test_week_one_can_start_in_previous_year() {
        // 2025-W01 starts on Monday 2024-12-30
        assert_eq!(resolve(2025, 1, WeekStrategy::Monday).unwrap(), date(2024, 12, 30));
        assert_eq!(resolve(2021, 1, WeekStrategy::Monday).unwrap(), date(2021, 1, 4));
    }

    #[test]
    fn test_week_53_only_in_long_years() {
        assert_eq!(weeks_in_year(2020).unwrap(), 53);
        assert_eq!(weeks_in_year(2023).unwrap(), 52);
        assert_eq!(resolve(2020, 53, WeekStrategy::Monday).unwrap(), date(2020, 12, 28));

        let err = resolve(2023, 53, WeekStrategy::Monday).unwrap_err();
        assert_eq!(
            err,
            QueryError::InvalidCalendarDate {
                year: 2023,
                week: 53,
                weeks_in_year: 52
            }
        );
        assert_eq!(err.to_string(), "Invalid week: 53 (ISO year 2023 has 52 weeks)");
    }

    #[test]
    fn test_week_zero_is_rejected() {
        assert!(resolve(2023, 0, WeekStrategy::Sunday).is_err());
    }

    #[test]
    fn test_year_out_of_range() {
        assert_eq!(
            resolve(i32::MAX, 1, WeekStrategy::Monday).unwrap_err(),
            QueryError::YearOutOfRange { year: i32::MAX }
        );
    }

    #[test]
    fn test_strategy_wire_format() {
        assert_eq!(WeekStrategy::try_from(4).unwrap(), WeekStrategy::Thursday);
        assert!(WeekStrategy::try_from(2).is_err());
        assert_eq!(serde_json::to_string(&WeekStrategy::Sunday).unwrap(), "7");
        assert_eq!(
            serde_json::from_str::<WeekStrategy>("1").unwrap(),
            WeekStrategy::Monday
        );
        assert!(serde_json::from_str::<WeekStrategy>("3").is_err());
    }

    #[test]
    fn test_friday_13() {
        assert!(is_friday_13(2023, 10).unwrap());
        assert!(!is_friday_13(2023, 11).unwrap());
        assert_eq!(
            is_friday_13(2023, 13).unwrap_err(),
            QueryError::InvalidDate { year: 2023, month: 13 }
        );
    }
}
