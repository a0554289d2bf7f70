use crate::error::FairwayError;
use crate::models::{CardAssignment, CategoryWinners, HoleScore, Session};
use async_trait::async_trait;

/// Game-record store: the authoritative state settlement is recomputed
/// from. The engine never writes settlement results back here.
#[async_trait]
pub trait GameStore: Send + Sync {
    async fn save_session(&self, session: Session) -> Result<(), FairwayError>;
    async fn get_session(&self, id: &str) -> Result<Option<Session>, FairwayError>;

    async fn save_card_assignment(
        &self,
        session_id: &str,
        assignment: CardAssignment,
    ) -> Result<(), FairwayError>;
    async fn get_card_assignments(
        &self,
        session_id: &str,
    ) -> Result<Vec<CardAssignment>, FairwayError>;

    async fn save_hole_score(
        &self,
        session_id: &str,
        score: HoleScore,
    ) -> Result<(), FairwayError>;
    async fn get_hole_scores(&self, session_id: &str) -> Result<Vec<HoleScore>, FairwayError>;

    async fn save_category_winners(
        &self,
        session_id: &str,
        winners: CategoryWinners,
    ) -> Result<(), FairwayError>;
    async fn get_category_winners(
        &self,
        session_id: &str,
    ) -> Result<Vec<CategoryWinners>, FairwayError>;
}

pub mod in_memory;
