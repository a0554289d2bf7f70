use crate::error::FairwayError;
use crate::logger::AuditLogger;
use crate::models::AuditLogEntry;
use async_trait::async_trait;
use tokio::sync::Mutex;

pub struct InMemoryAuditLogger {
    logs: Mutex<Vec<AuditLogEntry>>,
}

impl InMemoryAuditLogger {
    pub fn new() -> Self {
        InMemoryAuditLogger {
            logs: Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryAuditLogger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuditLogger for InMemoryAuditLogger {
    async fn log(&self, entry: AuditLogEntry) -> Result<(), FairwayError> {
        // For production: batch writes to a durable sink
        self.logs.lock().await.push(entry);
        Ok(())
    }

    async fn get_logs(&self) -> Result<Vec<AuditLogEntry>, FairwayError> {
        Ok(self.logs.lock().await.clone())
    }
}
