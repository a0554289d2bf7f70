use crate::money::Cents;

/// Combined ledgers further than this from zero indicate a calculator
/// defect rather than rounding residue.
pub const COMBINE_TOLERANCE_CENTS: Cents = 2;

/// Smallest transaction worth emitting; anything below a cent is noise.
pub const MIN_TRANSACTION_CENTS: Cents = 1;

/// Holes 1..=FRONT_NINE_LAST_HOLE count toward the front segment.
pub const FRONT_NINE_LAST_HOLE: u8 = 9;

pub const HOLES_PER_ROUND: u8 = 18;

// Audit action names.
pub const SESSION_CREATED: &str = "SESSION_CREATED";
pub const CARD_ASSIGNED: &str = "CARD_ASSIGNED";
pub const SCORE_RECORDED: &str = "SCORE_RECORDED";
pub const CATEGORY_WINNERS_RECORDED: &str = "CATEGORY_WINNERS_RECORDED";
pub const SETTLEMENT_COMPUTED: &str = "SETTLEMENT_COMPUTED";
