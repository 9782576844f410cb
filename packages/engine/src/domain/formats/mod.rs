//! Point rules, one pure module per competition format.
//!
//! Every module maps one hole's scores (net, where applicable) to raw
//! points; nothing in here touches running state, storage, or display.

pub mod best_ball;
pub mod copenhagen;
pub mod stroke_play;
pub mod umbriago;
pub mod wolf;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::game::TeamId;
use crate::domain::player::PlayerId;

/// A best-ball team's result on one hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamHoleScore {
    pub team: TeamId,
    /// Minimum net among members who played; `None` when nobody did.
    pub score: Option<i16>,
}

/// Raw points produced by one hole, shaped per format family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HolePoints {
    /// Copenhagen: a 6-point pot split across the three players.
    Pot { by_player: BTreeMap<PlayerId, i32> },
    /// Wolf: signed per-player deltas, multiplier already applied.
    Deltas { by_player: BTreeMap<PlayerId, i32> },
    /// Match play: the hole's movement toward side A (+1/-1/0).
    HoleMatch { delta: i32 },
    /// Best-ball stroke play: each team's counting score for the hole.
    TeamScores { teams: Vec<TeamHoleScore> },
    /// Stroke play: net score per player who played the hole.
    NetScores { by_player: BTreeMap<PlayerId, i16> },
    /// Umbriago: sub-contest points won per side this hole.
    SideContest { a_points: i32, b_points: i32 },
}

impl HolePoints {
    /// Signed differential toward side A, for the two-sided formats.
    pub fn differential(&self) -> i32 {
        match self {
            HolePoints::HoleMatch { delta } => *delta,
            HolePoints::SideContest { a_points, b_points } => a_points - b_points,
            _ => 0,
        }
    }

    /// Per-player signed deltas, for the player-ledger formats.
    pub fn player_deltas(&self) -> Option<&BTreeMap<PlayerId, i32>> {
        match self {
            HolePoints::Pot { by_player } | HolePoints::Deltas { by_player } => Some(by_player),
            _ => None,
        }
    }
}

/// Scale a delta map by a hole multiplier.
pub(crate) fn scale_deltas(deltas: &mut BTreeMap<PlayerId, i32>, multiplier: i32) {
    if multiplier != 1 {
        for delta in deltas.values_mut() {
            *delta *= multiplier;
        }
    }
}
