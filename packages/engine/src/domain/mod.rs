//! Domain layer: pure scoring and match-state logic.

pub mod baseline;
pub mod compute;
pub mod course;
pub mod fingerprint;
pub mod formats;
pub mod game;
pub mod handicap;
pub mod match_state;
pub mod multiplier;
pub mod payout;
pub mod player;
pub mod press;
pub mod rotation;
pub mod score;
pub mod strokes_gained;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_copenhagen;
#[cfg(test)]
mod tests_stroke_play;
#[cfg(test)]
mod tests_strokes_gained;
#[cfg(test)]
mod tests_umbriago;

// Re-exports for ergonomics
pub use compute::{compute_hole, compute_payout, recompute_from, replay, FormatEvents, HoleInput};
pub use game::{Game, GameFormat, GameSettings, PayoutMode, Side, Team, TeamId};
pub use match_state::{HoleResult, MatchStatus, RunningTotals};
pub use multiplier::MultiplierStack;
pub use player::{GameId, HandicapIndex, Player, PlayerId, PressId};
pub use press::Press;
pub use score::HoleScore;
pub use strokes_gained::{record_shot, strokes_gained, Shot, ShotOutcome, ShotPosition};
