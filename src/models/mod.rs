pub mod audit;
pub mod card;
pub mod player;
pub mod scoring;
pub mod session;
pub mod settlement;

pub use audit::AuditLogEntry;
pub use card::{CardAssignment, CardKind, CardValues, PenaltyCard, StandardCard};
pub use player::{Player, PlayerId};
pub use scoring::{CategoryWinners, HoleScore, PointsPayout, SegmentScores};
pub use session::{GameKind, Session, SessionStakes};
pub use settlement::{NetPosition, SettlementReport, Transaction};
