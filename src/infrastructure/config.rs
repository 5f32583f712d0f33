use crate::domain::floorplan::FloorPlan;
use crate::domain::store::Store;
use serde::Deserialize;
use std::collections::HashSet;

pub const CONFIG_DIR: &str = "config";

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub server: ServerSettings,
    pub cors: CorsSettings,
    pub assets: AssetSettings,
    pub faults: FaultSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsSettings {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AssetSettings {
    pub map_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FaultSettings {
    pub failure_rate: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    pub stores: Vec<Store>,
}

/// Server settings from `<dir>/server.*`, then `RETAIL_*` environment
/// variables (`RETAIL_SERVER__PORT=9000`). Every key has a default.
pub fn load_server_config(dir: &str) -> anyhow::Result<ServerConfig> {
    let settings = config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8001)?
        .set_default("cors.allowed_origins", vec!["http://localhost:4200"])?
        .set_default("assets.map_path", "images/store_map.png")?
        .set_default("faults.failure_rate", 0.0)?
        .add_source(config::File::with_name(&format!("{}/server", dir)).required(false))
        .add_source(
            config::Environment::with_prefix("RETAIL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config: ServerConfig = settings.try_deserialize()?;
    anyhow::ensure!(
        (0.0..=1.0).contains(&config.faults.failure_rate),
        "faults.failure_rate must be within [0, 1], got {}",
        config.faults.failure_rate
    );
    Ok(config)
}

pub fn load_catalog_config(dir: &str) -> anyhow::Result<CatalogConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(&format!("{}/catalog", dir)))
        .build()?;

    let catalog: CatalogConfig = settings.try_deserialize()?;
    let mut seen = HashSet::new();
    for store in &catalog.stores {
        anyhow::ensure!(seen.insert(store.id), "duplicate store id {} in catalog", store.id);
    }
    Ok(catalog)
}

pub fn load_floorplan_config(dir: &str) -> anyhow::Result<FloorPlan> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(&format!("{}/floorplan", dir)))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calendar::WeekStrategy;

    #[test]
    fn test_server_defaults_without_file() {
        let config = load_server_config("does-not-exist").unwrap();
        assert_eq!(config.server.port, 8001);
        assert_eq!(config.cors.allowed_origins, vec!["http://localhost:4200"]);
        assert_eq!(config.faults.failure_rate, 0.0);
    }

    #[test]
    fn test_bundled_catalog() {
        let catalog = load_catalog_config(CONFIG_DIR).unwrap();
        assert_eq!(
            catalog.stores,
            vec![
                Store::new(1, "Store A", WeekStrategy::Monday),
                Store::new(2, "Store B", WeekStrategy::Thursday),
                Store::new(3, "Store C", WeekStrategy::Sunday),
            ]
        );
    }

    #[test]
    fn test_bundled_floorplan() {
        let plan = load_floorplan_config(CONFIG_DIR).unwrap();
        assert_eq!(plan.bbox.min_x, 184);
        assert_eq!(plan.bbox.max_y, -35027);
        assert_eq!(plan.zones.len(), 10);

        let pasta = &plan.zones[0];
        assert_eq!(pasta.name, "Pasta");
        assert_eq!(pasta.color, [255, 0, 255, 255]);
        assert_eq!(pasta.coords.len(), 2);
        assert_eq!(pasta.coords[0].len(), 7);
    }
}
