//! Raw hole scores.
//!
//! `HoleScore` replaces the legacy overloaded sentinels (negative meant
//! "conceded", zero meant "not yet played") with an explicit tagged value,
//! so ranking and sorting code never has to reverse-engineer a number.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HoleScore {
    /// Gross strokes actually taken.
    Played(u8),
    /// Hole given up; no gross or net score exists.
    Conceded,
    /// No score entered yet.
    Unplayed,
}

impl HoleScore {
    pub fn gross(self) -> Option<u8> {
        match self {
            HoleScore::Played(strokes) => Some(strokes),
            HoleScore::Conceded | HoleScore::Unplayed => None,
        }
    }

    pub fn is_played(self) -> bool {
        matches!(self, HoleScore::Played(_))
    }

    /// Net score under a signed handicap allocation.
    ///
    /// Positive allocations subtract (strokes received); negative
    /// allocations add (a plus player giving strokes back). Conceded and
    /// unplayed holes have no net score.
    pub fn net(self, allocation: i16) -> Option<i16> {
        self.gross().map(|g| g as i16 - allocation)
    }
}

impl Default for HoleScore {
    fn default() -> Self {
        HoleScore::Unplayed
    }
}
