// Infrastructure layer - Configuration and adapters behind application traits
pub mod chacha_sampler;
pub mod config;
pub mod http_response;
pub mod memory_store_repository;
pub mod random_faults;
