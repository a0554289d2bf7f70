use crate::constants::{
    CARD_ASSIGNED, CATEGORY_WINNERS_RECORDED, HOLES_PER_ROUND, FRONT_NINE_LAST_HOLE,
    SCORE_RECORDED, SESSION_CREATED, SETTLEMENT_COMPUTED,
};
use crate::engine::{
    combine_nets, compute_card_game_net, compute_fbt_game_net, compute_points_game_net,
    debts_from_assignments, settle, tally_category_winners, NetMap,
};
use crate::error::FairwayError;
use crate::logger::AuditLogger;
use crate::models::{
    AuditLogEntry, CardAssignment, CategoryWinners, GameKind, HoleScore, NetPosition, PenaltyCard,
    Player, PlayerId, PointsPayout, SegmentScores, Session, SessionStakes, SettlementReport,
    Transaction,
};
use crate::money::Cents;
use crate::storage::GameStore;
use chrono::Utc;
use log::{debug, info, warn};
use serde_json::json;
use std::collections::BTreeMap;
use uuid::Uuid;

pub struct SettlementService<S: GameStore, L: AuditLogger> {
    store: S,
    audit: L,
}

impl<S: GameStore, L: AuditLogger> SettlementService<S, L> {
    pub fn new(store: S, audit: L) -> Self {
        info!("Initializing SettlementService");
        SettlementService { store, audit }
    }

    // SESSION MANAGEMENT

    pub async fn create_session(
        &self,
        name: String,
        players: Vec<Player>,
        active_games: Vec<GameKind>,
        deck: Vec<PenaltyCard>,
        stakes: SessionStakes,
    ) -> Result<Session, FairwayError> {
        info!(
            "Creating session '{}' with {} player(s), games: {:?}",
            name,
            players.len(),
            active_games
        );
        self.validate_stakes(&active_games, &stakes)?;

        let session = Session {
            id: Uuid::new_v4().to_string(),
            name,
            players,
            active_games,
            deck,
            stakes,
            created_at: Utc::now(),
        };
        self.store.save_session(session.clone()).await?;

        self.audit
            .log(AuditLogEntry::new(
                Some(&session.id),
                SESSION_CREATED,
                &json!({
                    "session_id": session.id,
                    "name": session.name,
                    "player_ids": session.players.iter().map(|p| p.id).collect::<Vec<_>>(),
                    "games": session.active_games,
                }),
            ))
            .await?;

        Ok(session)
    }

    pub async fn get_session(&self, session_id: &str) -> Result<Option<Session>, FairwayError> {
        self.store.get_session(session_id).await
    }

    // GAME RECORDS

    /// Hands a penalty card to a player. Latest assignment wins at
    /// settlement time.
    pub async fn assign_card(
        &self,
        session_id: &str,
        card_id: Uuid,
        player_id: PlayerId,
        hole: u8,
    ) -> Result<CardAssignment, FairwayError> {
        let session = self.require_session(session_id).await?;
        self.require_game(&session, GameKind::Cards)?;
        self.require_player(&session, player_id)?;
        Self::validate_hole(hole)?;

        let card = session
            .deck
            .iter()
            .find(|c| c.id == card_id)
            .ok_or_else(|| FairwayError::CardNotInSession(card_id.to_string()))?;
        // Reject unknown custom names at entry, not at settlement.
        session.stakes.card_values.value_of(&card.kind)?;

        let assignment = CardAssignment {
            card_id,
            player_id,
            hole,
            assigned_at: Utc::now(),
        };
        self.store
            .save_card_assignment(session_id, assignment.clone())
            .await?;
        debug!(
            "card {} assigned to player {} on hole {}",
            card_id, player_id, hole
        );

        self.audit
            .log(AuditLogEntry::new(
                Some(session_id),
                CARD_ASSIGNED,
                &json!({ "card_id": card_id, "player_id": player_id, "hole": hole }),
            ))
            .await?;

        Ok(assignment)
    }

    /// Records one player's tallied points for one hole (stroke-points
    /// and Nassau input).
    pub async fn record_hole_score(
        &self,
        session_id: &str,
        player_id: PlayerId,
        hole: u8,
        points: f64,
    ) -> Result<HoleScore, FairwayError> {
        let session = self.require_session(session_id).await?;
        if !session.has_game(GameKind::Points) && !session.has_game(GameKind::Nassau) {
            return Err(FairwayError::GameNotActive(GameKind::Points.to_string()));
        }
        self.require_player(&session, player_id)?;
        Self::validate_hole(hole)?;

        let score = HoleScore {
            player_id,
            hole,
            points,
        };
        self.store.save_hole_score(session_id, score.clone()).await?;

        self.audit
            .log(AuditLogEntry::new(
                Some(session_id),
                SCORE_RECORDED,
                &json!({ "player_id": player_id, "hole": hole, "points": points }),
            ))
            .await?;

        Ok(score)
    }

    /// Records the bingo/bango/bongo winners for one hole.
    pub async fn record_category_winners(
        &self,
        session_id: &str,
        winners: CategoryWinners,
    ) -> Result<(), FairwayError> {
        let session = self.require_session(session_id).await?;
        self.require_game(&session, GameKind::BingoBangoBongo)?;
        Self::validate_hole(winners.hole)?;
        for player_id in winners.winners() {
            self.require_player(&session, player_id)?;
        }

        self.store
            .save_category_winners(session_id, winners.clone())
            .await?;

        self.audit
            .log(AuditLogEntry::new(
                Some(session_id),
                CATEGORY_WINNERS_RECORDED,
                &json!({
                    "hole": winners.hole,
                    "bingo": winners.bingo,
                    "bango": winners.bango,
                    "bongo": winners.bongo,
                }),
            ))
            .await?;

        Ok(())
    }

    // SETTLEMENT

    /// Recomputes the full settlement from stored game records. Calling
    /// it twice without intervening writes yields identical reports.
    pub async fn compute_settlement(
        &self,
        session_id: &str,
    ) -> Result<SettlementReport, FairwayError> {
        let session = self.require_session(session_id).await?;
        info!(
            "Computing settlement for session {} ({} game(s))",
            session_id,
            session.active_games.len()
        );

        let mut nets: Vec<NetMap> = Vec::new();
        for &game in &session.active_games {
            let net = self.game_net(&session, game).await?;
            let sum: Cents = net.values().sum();
            if sum != 0 {
                warn!("{} net map off by {} cents: {:?}", game, sum, net);
                return Err(FairwayError::InvariantViolation(format!(
                    "{} calculator produced a net map summing to {} cents",
                    game, sum
                )));
            }
            nets.push(net);
        }

        let combined = combine_nets(&nets)?;
        let transactions = settle(&combined)?;

        let report = SettlementReport {
            session_id: session_id.to_string(),
            nets: self.render_nets(&session, &combined),
            transactions,
        };

        self.audit
            .log(AuditLogEntry::new(
                Some(session_id),
                SETTLEMENT_COMPUTED,
                &json!({
                    "session_id": session_id,
                    "games": session.active_games,
                    "transaction_count": report.transactions.len(),
                }),
            ))
            .await?;

        Ok(report)
    }

    async fn game_net(&self, session: &Session, game: GameKind) -> Result<NetMap, FairwayError> {
        let roster: Vec<PlayerId> = session.players.iter().map(|p| p.id).collect();
        match game {
            GameKind::Cards => {
                let assignments = self.store.get_card_assignments(&session.id).await?;
                let debts = debts_from_assignments(
                    &roster,
                    &session.deck,
                    &assignments,
                    &session.stakes.card_values,
                )?;
                Ok(compute_card_game_net(&debts))
            }
            GameKind::Points => {
                let scores = self.store.get_hole_scores(&session.id).await?;
                let totals = Self::point_totals(&roster, &scores);
                Ok(compute_points_game_net(
                    &totals,
                    session.stakes.points_rate_cents,
                ))
            }
            GameKind::Nassau => {
                let scores = self.store.get_hole_scores(&session.id).await?;
                let segments = Self::aggregate_segments(&roster, &scores);
                Ok(compute_fbt_game_net(
                    &segments,
                    session.stakes.nassau_pot_cents,
                ))
            }
            GameKind::BingoBangoBongo => {
                let winners = self.store.get_category_winners(&session.id).await?;
                let tally = tally_category_winners(&roster, &winners);
                match session.stakes.bbb_payout {
                    PointsPayout::PerPoint { rate_cents } => {
                        Ok(compute_points_game_net(&tally.total, rate_cents))
                    }
                    PointsPayout::FrontBackTotal { pot_cents } => {
                        Ok(compute_fbt_game_net(&tally, pot_cents))
                    }
                }
            }
        }
    }

    fn point_totals(roster: &[PlayerId], scores: &[HoleScore]) -> BTreeMap<PlayerId, f64> {
        let mut totals: BTreeMap<PlayerId, f64> = roster.iter().map(|&id| (id, 0.0)).collect();
        for score in scores {
            *totals.entry(score.player_id).or_insert(0.0) += score.points;
        }
        totals
    }

    /// Front = holes 1-9, back = 10-18; the Nassau calculator itself only
    /// sees pre-aggregated segment totals.
    fn aggregate_segments(roster: &[PlayerId], scores: &[HoleScore]) -> SegmentScores {
        let mut segments = SegmentScores::default();
        for &id in roster {
            segments.front.insert(id, 0.0);
            segments.back.insert(id, 0.0);
            segments.total.insert(id, 0.0);
        }
        for score in scores {
            let side = if score.hole <= FRONT_NINE_LAST_HOLE {
                &mut segments.front
            } else {
                &mut segments.back
            };
            *side.entry(score.player_id).or_insert(0.0) += score.points;
            *segments.total.entry(score.player_id).or_insert(0.0) += score.points;
        }
        segments
    }

    fn render_nets(&self, session: &Session, combined: &NetMap) -> Vec<NetPosition> {
        session
            .players
            .iter()
            .map(|player| NetPosition {
                player_id: player.id,
                player_name: player.name.clone(),
                amount_cents: combined.get(&player.id).copied().unwrap_or(0),
            })
            .collect()
    }

    // VALIDATION HELPERS

    async fn require_session(&self, session_id: &str) -> Result<Session, FairwayError> {
        self.store
            .get_session(session_id)
            .await?
            .ok_or_else(|| FairwayError::SessionNotFound(session_id.to_string()))
    }

    fn require_game(&self, session: &Session, game: GameKind) -> Result<(), FairwayError> {
        if !session.has_game(game) {
            warn!("game {} not active for session {}", game, session.id);
            return Err(FairwayError::GameNotActive(game.to_string()));
        }
        Ok(())
    }

    fn require_player(&self, session: &Session, player_id: PlayerId) -> Result<(), FairwayError> {
        if !session.players.iter().any(|p| p.id == player_id) {
            warn!(
                "player {} not in roster for session {}",
                player_id, session.id
            );
            return Err(FairwayError::PlayerNotInRoster(player_id.to_string()));
        }
        Ok(())
    }

    fn validate_hole(hole: u8) -> Result<(), FairwayError> {
        if hole < 1 || hole > HOLES_PER_ROUND {
            return Err(FairwayError::InvalidHoleNumber(hole));
        }
        Ok(())
    }

    fn validate_stakes(
        &self,
        active_games: &[GameKind],
        stakes: &SessionStakes,
    ) -> Result<(), FairwayError> {
        if active_games.contains(&GameKind::Points) && stakes.points_rate_cents <= 0 {
            return Err(FairwayError::InvalidStake("points_rate".to_string()));
        }
        if active_games.contains(&GameKind::Nassau) && stakes.nassau_pot_cents <= 0 {
            return Err(FairwayError::InvalidStake("nassau_pot".to_string()));
        }
        if active_games.contains(&GameKind::BingoBangoBongo) {
            let stake = match stakes.bbb_payout {
                PointsPayout::PerPoint { rate_cents } => rate_cents,
                PointsPayout::FrontBackTotal { pot_cents } => pot_cents,
            };
            if stake <= 0 {
                return Err(FairwayError::InvalidStake("bbb_payout".to_string()));
            }
        }
        Ok(())
    }

    pub async fn get_audit_logs(&self) -> Result<Vec<AuditLogEntry>, FairwayError> {
        self.audit.get_logs().await
    }
}

/// Applies a transaction list back onto a zero map; used by callers (and
/// tests) to check a report against the ledger it came from.
pub fn apply_transactions(transactions: &[Transaction]) -> NetMap {
    let mut net = NetMap::new();
    for tx in transactions {
        *net.entry(tx.from).or_insert(0) -= tx.amount_cents;
        *net.entry(tx.to).or_insert(0) += tx.amount_cents;
    }
    net
}
