mod card_game_tests;
mod money_tests;
mod nassau_tests;
mod points_game_tests;

use crate::logger::in_memory::InMemoryAuditLogger;
use crate::models::PlayerId;
use crate::service::SettlementService;
use crate::storage::in_memory::InMemoryStore;
use uuid::Uuid;

pub fn create_test_service() -> SettlementService<InMemoryStore, InMemoryAuditLogger> {
    let store = InMemoryStore::new();
    let audit = InMemoryAuditLogger::new();
    SettlementService::new(store, audit)
}

/// Fixed player ids that sort in numeric order, so expectations on
/// iteration order and tie-breaks are stable.
pub fn pid(n: u128) -> PlayerId {
    Uuid::from_u128(n)
}
