//! Umbriago: simultaneous per-hole sub-contests between two rotating pairs.
//!
//! Score-derived contests (team low, individual low, birdies) resolve at
//! hole completion and can be derived from the card; judgment contests
//! (closest to the pin) arrive as declared events. A roll declared mid-hole
//! doubles the value of every sub-contest resolved after it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::game::{Side, UmbriagoSettings};
use crate::domain::player::PlayerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UmbriagoContest {
    /// Lower summed team net; requires a complete pair.
    TeamLow,
    /// Unique lowest individual net.
    IndividualLow,
    /// One per gross birdie-or-better, credited to the scorer's side.
    Birdie,
    /// Judged on the tee, not derivable from the card.
    ClosestToPin,
}

impl UmbriagoContest {
    pub fn points(self, settings: &UmbriagoSettings) -> i32 {
        match self {
            UmbriagoContest::TeamLow => settings.team_low_points,
            UmbriagoContest::IndividualLow => settings.individual_low_points,
            UmbriagoContest::Birdie => settings.birdie_points,
            UmbriagoContest::ClosestToPin => settings.closest_to_pin_points,
        }
    }
}

/// One entry in a hole's ordered event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UmbriagoEvent {
    Roll {
        by: Side,
    },
    Contest {
        kind: UmbriagoContest,
        /// `None` records a pushed contest (tie or no qualifier).
        winner: Option<Side>,
    },
}

/// Contests derivable from the card, in their standard resolution order.
///
/// `sides` is the rotation-resolved membership for this hole.
pub fn derive_contests(
    sides: &BTreeMap<PlayerId, Side>,
    nets: &BTreeMap<PlayerId, Option<i16>>,
    grosses: &BTreeMap<PlayerId, Option<u8>>,
    par: u8,
) -> Vec<UmbriagoEvent> {
    let mut events = Vec::new();

    events.push(UmbriagoEvent::Contest {
        kind: UmbriagoContest::TeamLow,
        winner: team_low_winner(sides, nets),
    });
    events.push(UmbriagoEvent::Contest {
        kind: UmbriagoContest::IndividualLow,
        winner: individual_low_winner(sides, nets),
    });
    for (player, side) in sides {
        if let Some(Some(gross)) = grosses.get(player) {
            if *gross < par {
                events.push(UmbriagoEvent::Contest {
                    kind: UmbriagoContest::Birdie,
                    winner: Some(*side),
                });
            }
        }
    }
    events
}

/// Fold a hole's ordered event log into per-side points.
///
/// Returns `(a_points, b_points)`; the zero-sum display pair is derived by
/// the accumulator from their difference.
pub fn score_hole(settings: &UmbriagoSettings, events: &[UmbriagoEvent]) -> (i32, i32) {
    let mut multiplier = 1;
    let mut a_points = 0;
    let mut b_points = 0;
    for event in events {
        match event {
            UmbriagoEvent::Roll { .. } => multiplier *= 2,
            UmbriagoEvent::Contest { kind, winner } => {
                let value = kind.points(settings) * multiplier;
                match winner {
                    Some(Side::A) => a_points += value,
                    Some(Side::B) => b_points += value,
                    None => {}
                }
            }
        }
    }
    (a_points, b_points)
}

/// Lower summed team net wins; a pair with a missing card has no team score
/// and forfeits to a complete pair; two incomplete pairs push.
fn team_low_winner(
    sides: &BTreeMap<PlayerId, Side>,
    nets: &BTreeMap<PlayerId, Option<i16>>,
) -> Option<Side> {
    let total_of = |side: Side| -> Option<i16> {
        let mut total = 0i16;
        for (player, s) in sides {
            if *s != side {
                continue;
            }
            total += nets.get(player).copied().flatten()?;
        }
        Some(total)
    };
    match (total_of(Side::A), total_of(Side::B)) {
        (Some(a), Some(b)) if a < b => Some(Side::A),
        (Some(a), Some(b)) if b < a => Some(Side::B),
        (Some(_), Some(_)) | (None, None) => None,
        (Some(_), None) => Some(Side::A),
        (None, Some(_)) => Some(Side::B),
    }
}

/// Unique lowest individual net wins; a shared low pushes.
fn individual_low_winner(
    sides: &BTreeMap<PlayerId, Side>,
    nets: &BTreeMap<PlayerId, Option<i16>>,
) -> Option<Side> {
    let played: Vec<(PlayerId, i16)> = sides
        .keys()
        .filter_map(|p| nets.get(p).copied().flatten().map(|n| (*p, n)))
        .collect();
    let low = played.iter().map(|(_, n)| *n).min()?;
    let mut at_low = played.iter().filter(|(_, n)| *n == low);
    let &(leader, _) = at_low.next()?;
    if at_low.next().is_some() {
        return None;
    }
    sides.get(&leader).copied()
}
