#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod domain;
pub mod errors;

// Re-exports for public API
pub use domain::compute::{compute_hole, compute_payout, recompute_from, replay};
pub use domain::strokes_gained::{record_shot, strokes_gained};
pub use domain::{
    FormatEvents, Game, GameFormat, GameId, GameSettings, HandicapIndex, HoleInput, HoleResult,
    HoleScore, MatchStatus, Player, PlayerId, Press, PressId, RunningTotals, Shot,
};
pub use errors::domain::{DomainError, InvariantKind, ValidationKind};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::logging::init();
}
