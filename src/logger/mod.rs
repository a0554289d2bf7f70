use crate::error::FairwayError;
use crate::models::AuditLogEntry;
use async_trait::async_trait;

/// Injectable audit sink; the caller decides where entries go.
#[async_trait]
pub trait AuditLogger: Send + Sync {
    async fn log(&self, entry: AuditLogEntry) -> Result<(), FairwayError>;
    async fn get_logs(&self) -> Result<Vec<AuditLogEntry>, FairwayError>;
}

pub mod in_memory;
