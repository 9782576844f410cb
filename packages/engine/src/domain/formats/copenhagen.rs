//! Copenhagen: three players, six points a hole.
//!
//! The tie-break table is total: any combination of three cards maps to a
//! defined split summing to exactly six. A conceded or unplayed card ranks
//! behind every played net; two such cards tie with each other.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::domain::player::PlayerId;
use crate::errors::domain::{DomainError, InvariantKind};

pub const POT_POINTS: i32 = 6;

/// One player's card for the hole.
#[derive(Debug, Clone, Copy)]
pub struct CopenhagenEntry {
    pub player: PlayerId,
    pub gross: Option<u8>,
    pub net: Option<i16>,
}

/// Rank three cards and split the pot.
///
/// Normal table: 4/2/0. Two-way tie for low: 3/3. Three-way tie: 2/2/2.
/// Two-way tie behind a clear low: 4/1/1. The sweep override (unique player
/// at gross birdie-or-better who beats both others by two net or more)
/// takes all six.
pub fn score_hole(
    entries: &[CopenhagenEntry],
    par: u8,
) -> Result<BTreeMap<PlayerId, i32>, DomainError> {
    let [first, second, third] = entries else {
        return Err(DomainError::invariant(
            InvariantKind::RosterShape,
            format!("copenhagen scores exactly 3 players, got {}", entries.len()),
        ));
    };

    if let Some(sweeper) = sweep_winner(entries, par) {
        let mut points = BTreeMap::new();
        for entry in entries {
            points.insert(entry.player, if entry.player == sweeper { POT_POINTS } else { 0 });
        }
        return Ok(points);
    }

    let mut ranked = [*first, *second, *third];
    ranked.sort_by(|a, b| cmp_nets(a.net, b.net));

    let low_pair_tied = cmp_nets(ranked[0].net, ranked[1].net) == Ordering::Equal;
    let high_pair_tied = cmp_nets(ranked[1].net, ranked[2].net) == Ordering::Equal;

    let split: [i32; 3] = match (low_pair_tied, high_pair_tied) {
        (true, true) => [2, 2, 2],
        (true, false) => [3, 3, 0],
        (false, true) => [4, 1, 1],
        (false, false) => [4, 2, 0],
    };

    let mut points = BTreeMap::new();
    for (entry, share) in ranked.iter().zip(split) {
        points.insert(entry.player, share);
    }
    Ok(points)
}

/// Played nets rank ascending; missing cards rank behind every played one
/// and tie among themselves.
fn cmp_nets(a: Option<i16>, b: Option<i16>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// The sweep winner, if any: exactly one player with gross <= par - 1 whose
/// net beats both others by at least two strokes (a missing opposing card
/// counts as beaten).
fn sweep_winner(entries: &[CopenhagenEntry], par: u8) -> Option<PlayerId> {
    let mut winner = None;
    for entry in entries {
        let (Some(gross), Some(net)) = (entry.gross, entry.net) else {
            continue;
        };
        if gross >= par {
            // birdie-or-better means gross <= par - 1
            continue;
        }
        let clears_both = entries
            .iter()
            .filter(|other| other.player != entry.player)
            .all(|other| match other.net {
                Some(other_net) => other_net - net >= 2,
                None => true,
            });
        if clears_both {
            if winner.is_some() {
                // unreachable at a 2-stroke margin: two players cannot both
                // clear each other
                return None;
            }
            winner = Some(entry.player);
        }
    }
    winner
}
