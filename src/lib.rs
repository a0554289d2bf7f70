pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod logger;
pub mod models;
pub mod money;
pub mod service;
pub mod storage;

pub use error::FairwayError;
pub use logger::in_memory::InMemoryAuditLogger;
pub use service::SettlementService;
pub use storage::in_memory::InMemoryStore;

#[cfg(test)]
mod tests;
