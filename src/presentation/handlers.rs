// HTTP request handlers
use crate::application::fault_injector::FaultSite;
use crate::domain::calendar::{CalendarRef, WeekStrategy};
use crate::domain::floorplan::{BoundingBox, Zone};
use crate::domain::series::Data;
use crate::domain::store::Store;
use crate::infrastructure::http_response::ApiError;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const MAX_ISO_WEEK: i64 = 53;

#[derive(Debug, Deserialize)]
pub struct StrategyQuery {
    pub week_strategy: u8,
}

#[derive(Debug, Deserialize)]
pub struct DataQuery {
    pub store_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct FridayThirteen {
    pub is_friday_13: bool,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

pub async fn root() -> Json<&'static str> {
    Json("Welcome to the retail analytics mock API!")
}

pub async fn list_stores(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Store>>, ApiError> {
    if state.faults.should_fail(FaultSite::Stores) {
        return Err(ApiError::server_error());
    }

    Ok(Json(state.store_service.list_stores().await?))
}

/// Whether the ISO week resolves to a date inside the data window
pub async fn get_date_validity(
    path: Result<Path<(i32, i64)>, PathRejection>,
    query: Result<Query<StrategyQuery>, QueryRejection>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<bool>, ApiError> {
    let calendar_ref = calendar_ref(path, query)?;
    Ok(Json(state.calendar_service.date_validity(calendar_ref)))
}

/// Date pinned by the ISO week and week strategy
pub async fn get_date(
    path: Result<Path<(i32, i64)>, PathRejection>,
    query: Result<Query<StrategyQuery>, QueryRejection>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<NaiveDate>, ApiError> {
    let calendar_ref = calendar_ref(path, query)?;
    let date = state.calendar_service.get_date(calendar_ref)?;

    if state.faults.should_fail(FaultSite::Date) {
        return Err(ApiError::teapot());
    }

    Ok(Json(date))
}

/// Weekly visitors and turnover for a store over a period
pub async fn get_data(
    query: Result<Query<DataQuery>, QueryRejection>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Data>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::Validation(e.body_text()))?;
    if query.store_id < 1 {
        return Err(ApiError::Validation(format!(
            "store_id must be at least 1, got {}",
            query.store_id
        )));
    }

    // The catalog lookup goes through the same flaky store listing
    if state.faults.should_fail(FaultSite::Stores) {
        return Err(ApiError::server_error());
    }

    let data = state
        .data_service
        .get_data(query.store_id, query.start_date, query.end_date)
        .await?;
    Ok(Json(data))
}

pub async fn check_friday_13(
    path: Result<Path<(i32, u32)>, PathRejection>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<FridayThirteen>, ApiError> {
    let Path((year, month)) = path.map_err(|e| ApiError::Validation(e.body_text()))?;
    let is_friday_13 = state.calendar_service.check_friday_13(year, month)?;
    Ok(Json(FridayThirteen { is_friday_13 }))
}

pub async fn get_bounding_box(State(state): State<Arc<AppState>>) -> Json<BoundingBox> {
    Json(state.floor_plan.bbox)
}

pub async fn get_zones(State(state): State<Arc<AppState>>) -> Json<Vec<Zone>> {
    Json(state.floor_plan.zones.clone())
}

fn calendar_ref(
    path: Result<Path<(i32, i64)>, PathRejection>,
    query: Result<Query<StrategyQuery>, QueryRejection>,
) -> Result<CalendarRef, ApiError> {
    let Path((year, week)) = path.map_err(|e| ApiError::Validation(e.body_text()))?;
    let Query(query) = query.map_err(|e| ApiError::Validation(e.body_text()))?;

    if !(1..=MAX_ISO_WEEK).contains(&week) {
        return Err(ApiError::Validation(format!(
            "week must be between 1 and {}, got {}",
            MAX_ISO_WEEK, week
        )));
    }
    let strategy = WeekStrategy::try_from(query.week_strategy).map_err(ApiError::Validation)?;

    Ok(CalendarRef::new(year, week as u32, strategy))
}
