// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use axum::{http::HeaderValue, routing::get, Router};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::calendar_service::CalendarService;
use crate::application::data_service::DataService;
use crate::application::fault_injector::{FaultInjector, NoFaults};
use crate::application::store_service::StoreService;
use crate::domain::validity::ValidityWindow;
use crate::infrastructure::config::{
    load_catalog_config, load_floorplan_config, load_server_config, CorsSettings, CONFIG_DIR,
};
use crate::infrastructure::memory_store_repository::MemoryStoreRepository;
use crate::infrastructure::random_faults::RandomFaults;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    check_friday_13, get_bounding_box, get_data, get_date, get_date_validity, get_zones,
    health_check, list_stores, root,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    // Load configuration
    let server_config = load_server_config(CONFIG_DIR)?;
    let catalog = load_catalog_config(CONFIG_DIR)?;
    let floor_plan = load_floorplan_config(CONFIG_DIR)?;

    for (zone_id, point) in floor_plan.stray_points() {
        tracing::warn!("Zone {} has point {:?} outside the bounding box", zone_id, point);
    }

    let window = ValidityWindow::authorized()?;
    tracing::info!(
        "Serving {} stores with data from {} to {}",
        catalog.stores.len(),
        window.start(),
        window.end()
    );

    // Create repository (infrastructure layer)
    let repository = Arc::new(MemoryStoreRepository::new(catalog.stores));

    // Create services (application layer)
    let store_service = StoreService::new(repository);
    let calendar_service = CalendarService::new(window);
    let data_service = DataService::new(store_service.clone(), window);

    let faults: Arc<dyn FaultInjector> = if server_config.faults.failure_rate > 0.0 {
        tracing::info!(
            "Fault injection enabled at rate {}",
            server_config.faults.failure_rate
        );
        Arc::new(RandomFaults::new(server_config.faults.failure_rate))
    } else {
        Arc::new(NoFaults)
    };

    // Create application state
    let state = Arc::new(AppState {
        store_service,
        calendar_service,
        data_service,
        floor_plan: Arc::new(floor_plan),
        faults,
    });

    // Build router (presentation layer)
    let floor_plan_routes = Router::new()
        .route("/bbox", get(get_bounding_box))
        .route("/zones", get(get_zones))
        .route_service("/map", ServeFile::new(&server_config.assets.map_path));

    let router = Router::new()
        .route("/", get(root))
        .route("/healthz", get(health_check))
        .route("/stores", get(list_stores))
        .route("/date-validity/:year/:week", get(get_date_validity))
        .route("/date/:year/:week", get(get_date))
        .route("/data", get(get_data))
        .route("/check-friday-13/:year/:month", get(check_friday_13))
        .merge(floor_plan_routes.clone())
        .nest("/bonus", floor_plan_routes)
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(cors_layer(&server_config.cors)?)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr: SocketAddr = format!("{}:{}", server_config.server.host, server_config.server.port)
        .parse()?;
    tracing::info!("Starting retail-analytics-mock service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}

/// Credentialed CORS for the configured front-end origins
fn cors_layer(settings: &CorsSettings) -> anyhow::Result<CorsLayer> {
    let origins = settings
        .allowed_origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}
