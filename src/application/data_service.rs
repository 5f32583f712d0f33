// Data service - Validates period requests and generates weekly series
use crate::application::seeded_sampler::SeededSampler;
use crate::application::series_generator;
use crate::application::store_service::StoreService;
use crate::domain::error::{PeriodBound, QueryError};
use crate::domain::series::{Data, SeriesRequest};
use crate::domain::validity::ValidityWindow;
use crate::infrastructure::chacha_sampler::ChaChaSampler;
use chrono::{Datelike, NaiveDate};

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("Store catalog unavailable: {0}")]
    Catalog(anyhow::Error),
}

#[derive(Clone)]
pub struct DataService {
    stores: StoreService,
    window: ValidityWindow,
}

impl DataService {
    pub fn new(stores: StoreService, window: ValidityWindow) -> Self {
        Self { stores, window }
    }

    pub async fn get_data(
        &self,
        store_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Data, DataError> {
        self.get_data_with::<ChaChaSampler>(store_id, start, end).await
    }

    /// Checks run in a fixed order and the first failure is returned.
    pub async fn get_data_with<S: SeededSampler>(
        &self,
        store_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Data, DataError> {
        let request = self.validate(store_id, start, end).await.inspect_err(|e| {
            tracing::debug!("Rejected data request for store {}: {}", store_id, e);
        })?;

        Ok(series_generator::generate::<S>(&request))
    }

    async fn validate(
        &self,
        store_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<SeriesRequest, DataError> {
        let store = self
            .stores
            .find_store(store_id)
            .await
            .map_err(DataError::Catalog)?;
        if store.is_none() {
            return Err(QueryError::NotFound { store_id }.into());
        }

        if !self.window.is_valid(start) {
            return Err(QueryError::OutOfBounds {
                bound: PeriodBound::Start,
                date: start,
            }
            .into());
        }

        if !self.window.is_valid(end) {
            return Err(QueryError::OutOfBounds {
                bound: PeriodBound::End,
                date: end,
            }
            .into());
        }

        if start >= end {
            return Err(QueryError::OrderingError { start, end }.into());
        }

        if start.weekday() != end.weekday() {
            return Err(QueryError::WeekdayMismatch { start, end }.into());
        }

        Ok(SeriesRequest::new(store_id, start, end))
    }
}
