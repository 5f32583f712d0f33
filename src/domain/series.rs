// Weekly series domain model
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Weekly metrics for a store over a period, keyed by week start.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Data {
    pub visitors_per_week: BTreeMap<NaiveDate, i64>,
    pub turnover_per_week: BTreeMap<NaiveDate, f64>,
}

impl Data {
    pub fn insert(&mut self, week: NaiveDate, visitors: i64, turnover: f64) {
        self.visitors_per_week.insert(week, visitors);
        self.turnover_per_week.insert(week, turnover);
    }

    pub fn len(&self) -> usize {
        self.visitors_per_week.len()
    }
}

/// A validated "data for store over period" request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesRequest {
    pub store_id: i64,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl SeriesRequest {
    pub fn new(store_id: i64, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            store_id,
            start,
            end,
        }
    }

    /// e.g. `2-2023-04-10-2023-07-17`
    pub fn seed(&self) -> String {
        format!("{}-{}-{}", self.store_id, self.start, self.end)
    }

    /// Week boundaries in `[start, end)`.
    pub fn weeks(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_weeks().take_while(move |d| *d < self.end)
    }
}
