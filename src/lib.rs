pub mod config;
pub mod errors;
pub mod export;
pub mod ingestion;
pub mod intelligence;
pub mod models;
pub mod nimble;
pub mod services;
