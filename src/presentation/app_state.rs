// Application state for HTTP handlers
use crate::application::calendar_service::CalendarService;
use crate::application::data_service::DataService;
use crate::application::fault_injector::FaultInjector;
use crate::application::store_service::StoreService;
use crate::domain::floorplan::FloorPlan;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store_service: StoreService,
    pub calendar_service: CalendarService,
    pub data_service: DataService,
    pub floor_plan: Arc<FloorPlan>,
    pub faults: Arc<dyn FaultInjector>,
}
