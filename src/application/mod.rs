// Application layer - Use cases and the seams they depend on
pub mod calendar_service;
pub mod data_service;
pub mod fault_injector;
pub mod seeded_sampler;
pub mod series_generator;
pub mod store_repository;
pub mod store_service;
