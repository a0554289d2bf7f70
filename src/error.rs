use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
pub enum FairwayError {
    /// A net map failed to balance. Upstream calculator defect; the
    /// settlement aborts rather than return an incorrect ledger.
    #[error("settlement invariant violated: {0}")]
    InvariantViolation(String),

    /// Session with given ID not found
    #[error("Session {0} not found")]
    SessionNotFound(String),

    /// Player with given ID is not on the session roster
    #[error("Player {0} is not in the session roster")]
    PlayerNotInRoster(String),

    /// Card with given ID does not belong to the session's deck
    #[error("Card {0} does not belong to this session")]
    CardNotInSession(String),

    /// Custom card name has no configured value
    #[error("No value configured for custom card `{0}`")]
    UnknownCustomCard(String),

    /// Standard card type has no configured value
    #[error("No value configured for standard card `{0}`")]
    UnknownStandardCard(String),

    /// Hole number outside 1..=18
    #[error("Invalid hole number: {0}")]
    InvalidHoleNumber(u8),

    /// Rate or pot must be a positive amount
    #[error("Invalid stake for `{0}`: amount must be greater than 0")]
    InvalidStake(String),

    /// Requested game is not active for the session
    #[error("Game {0} is not active for this session")]
    GameNotActive(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Logging error: {0}")]
    LoggingError(String),
}
