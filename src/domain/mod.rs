// Domain layer - Calendar rules and data models
pub mod calendar;
pub mod error;
pub mod floorplan;
pub mod series;
pub mod store;
pub mod validity;
