//! Wolf: a rotating lone player (or pair) against the field.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::game::{WolfSettings, WolfTeeOrder};
use crate::domain::player::PlayerId;
use crate::errors::domain::{DomainError, InvariantKind, ValidationKind};

/// The wolf's call for the hole, fixed before any scores are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "declaration", content = "partner")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WolfDeclaration {
    /// Alone against everyone else.
    Lone,
    /// Paired with one other player against the rest.
    Partner(PlayerId),
}

/// The wolf for a 1-based hole, cycling the roster in order.
///
/// `First` anchors the cycle on the lead-off player; `Last` shifts it so the
/// wolf is the final player of that hole's tee rotation. Either way every
/// player is wolf once per `n` holes.
pub fn wolf_for_hole(roster: &[PlayerId], hole: u8, tee_order: WolfTeeOrder) -> PlayerId {
    debug_assert!(hole >= 1, "hole is 1-based and must be >= 1");
    let n = roster.len();
    let slot = (hole as usize).saturating_sub(1) % n;
    match tee_order {
        WolfTeeOrder::First => roster[slot],
        WolfTeeOrder::Last => roster[(slot + n - 1) % n],
    }
}

/// Raw signed point deltas for one Wolf hole (multiplier not yet applied).
///
/// Lone win: wolf gains `lone_win_points`, every opponent loses
/// `lone_loss_points`. Lone loss: the mirror image, with the wolf paying
/// `lone_loss_points` per opponent. Partner holes move `team_win_points`
/// per member. Equal best nets push the hole.
///
/// A side whose members all conceded forfeits to the side that has a score;
/// two empty sides push.
pub fn score_hole(
    settings: &WolfSettings,
    roster: &[PlayerId],
    hole: u8,
    declaration: WolfDeclaration,
    nets: &BTreeMap<PlayerId, Option<i16>>,
) -> Result<BTreeMap<PlayerId, i32>, DomainError> {
    if roster.is_empty() {
        return Err(DomainError::invariant(
            InvariantKind::RosterShape,
            "wolf needs a roster",
        ));
    }
    let wolf = wolf_for_hole(roster, hole, settings.tee_order);

    let wolf_side: Vec<PlayerId> = match declaration {
        WolfDeclaration::Lone => vec![wolf],
        WolfDeclaration::Partner(partner) => {
            if partner == wolf {
                return Err(DomainError::validation(
                    ValidationKind::WolfDeclaration,
                    "the wolf cannot partner itself",
                ));
            }
            if !roster.contains(&partner) {
                return Err(DomainError::validation(
                    ValidationKind::WolfDeclaration,
                    format!("partner {partner} is not in the game"),
                ));
            }
            vec![wolf, partner]
        }
    };
    let opponents: Vec<PlayerId> = roster
        .iter()
        .copied()
        .filter(|p| !wolf_side.contains(p))
        .collect();

    let mut deltas: BTreeMap<PlayerId, i32> =
        roster.iter().map(|p| (*p, 0)).collect();

    let wolf_best = best_net(&wolf_side, nets);
    let opp_best = best_net(&opponents, nets);
    let wolf_side_won = match (wolf_best, opp_best) {
        (Some(w), Some(o)) if w < o => true,
        (Some(w), Some(o)) if o < w => false,
        (Some(_), Some(_)) | (None, None) => return Ok(deltas), // push
        (Some(_), None) => true,
        (None, Some(_)) => false,
    };

    match declaration {
        WolfDeclaration::Lone => {
            if wolf_side_won {
                deltas.insert(wolf, settings.lone_win_points);
                for opponent in &opponents {
                    deltas.insert(*opponent, -settings.lone_loss_points);
                }
            } else {
                deltas.insert(wolf, -settings.lone_loss_points * opponents.len() as i32);
                for opponent in &opponents {
                    deltas.insert(*opponent, settings.lone_loss_points);
                }
            }
        }
        WolfDeclaration::Partner(_) => {
            let (winners, losers) = if wolf_side_won {
                (&wolf_side, &opponents)
            } else {
                (&opponents, &wolf_side)
            };
            for winner in winners {
                deltas.insert(*winner, settings.team_win_points);
            }
            for loser in losers {
                deltas.insert(*loser, -settings.team_win_points);
            }
        }
    }
    Ok(deltas)
}

fn best_net(side: &[PlayerId], nets: &BTreeMap<PlayerId, Option<i16>>) -> Option<i16> {
    side.iter()
        .filter_map(|p| nets.get(p).copied().flatten())
        .min()
}
