use crate::error::FairwayError;
use crate::models::{CardAssignment, CategoryWinners, HoleScore, Session};
use crate::storage::GameStore;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

pub struct InMemoryStore {
    sessions: Mutex<HashMap<String, Session>>,
    card_assignments: Mutex<HashMap<String, Vec<CardAssignment>>>,
    hole_scores: Mutex<HashMap<String, Vec<HoleScore>>>,
    category_winners: Mutex<HashMap<String, Vec<CategoryWinners>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        InMemoryStore {
            sessions: Mutex::new(HashMap::new()),
            card_assignments: Mutex::new(HashMap::new()),
            hole_scores: Mutex::new(HashMap::new()),
            category_winners: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GameStore for InMemoryStore {
    async fn save_session(&self, session: Session) -> Result<(), FairwayError> {
        self.sessions
            .lock()
            .await
            .insert(session.id.clone(), session);
        Ok(())
    }

    async fn get_session(&self, id: &str) -> Result<Option<Session>, FairwayError> {
        Ok(self.sessions.lock().await.get(id).cloned())
    }

    async fn save_card_assignment(
        &self,
        session_id: &str,
        assignment: CardAssignment,
    ) -> Result<(), FairwayError> {
        self.card_assignments
            .lock()
            .await
            .entry(session_id.to_string())
            .or_default()
            .push(assignment);
        Ok(())
    }

    async fn get_card_assignments(
        &self,
        session_id: &str,
    ) -> Result<Vec<CardAssignment>, FairwayError> {
        Ok(self
            .card_assignments
            .lock()
            .await
            .get(session_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn save_hole_score(
        &self,
        session_id: &str,
        score: HoleScore,
    ) -> Result<(), FairwayError> {
        self.hole_scores
            .lock()
            .await
            .entry(session_id.to_string())
            .or_default()
            .push(score);
        Ok(())
    }

    async fn get_hole_scores(&self, session_id: &str) -> Result<Vec<HoleScore>, FairwayError> {
        Ok(self
            .hole_scores
            .lock()
            .await
            .get(session_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn save_category_winners(
        &self,
        session_id: &str,
        winners: CategoryWinners,
    ) -> Result<(), FairwayError> {
        self.category_winners
            .lock()
            .await
            .entry(session_id.to_string())
            .or_default()
            .push(winners);
        Ok(())
    }

    async fn get_category_winners(
        &self,
        session_id: &str,
    ) -> Result<Vec<CategoryWinners>, FairwayError> {
        Ok(self
            .category_winners
            .lock()
            .await
            .get(session_id)
            .cloned()
            .unwrap_or_default())
    }
}
