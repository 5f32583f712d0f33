// Store domain model
use crate::domain::calendar::WeekStrategy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub id: i64,
    pub name: String,
    pub week_strategy: WeekStrategy,
}

impl Store {
    pub fn new(id: i64, name: impl Into<String>, week_strategy: WeekStrategy) -> Self {
        Self {
            id,
            name: name.into(),
            week_strategy,
        }
    }
}
