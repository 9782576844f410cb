// Proptest generators for domain values.

use proptest::prelude::*;

use crate::domain::score::HoleScore;

/// A plausible gross score on any hole.
pub fn gross() -> impl Strategy<Value = u8> {
    1u8..=12
}

/// A net score after allocation (signed; plus players can go below gross).
pub fn net() -> impl Strategy<Value = i16> {
    -2i16..=12
}

/// Any raw score entry, including the sentinels.
pub fn hole_score() -> impl Strategy<Value = HoleScore> {
    prop_oneof![
        4 => gross().prop_map(HoleScore::Played),
        1 => Just(HoleScore::Conceded),
        1 => Just(HoleScore::Unplayed),
    ]
}

/// A whole-group card of played gross scores.
pub fn played_grosses(players: usize) -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(gross(), players)
}
