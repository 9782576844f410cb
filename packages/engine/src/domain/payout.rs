//! Monetary settlement of a finished game.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::game::{GameSettings, PayoutMode, Side};
use crate::domain::match_state::RunningTotals;
use crate::domain::player::PlayerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// `None` when the game finished level: nothing changes hands.
    pub winner: Option<Side>,
    pub amount_cents: i64,
}

/// Two-sided settlement from the final totals.
///
/// `Difference` pays |differential| x stake. `Total` pays the winning
/// side's absolute accumulated points x stake, with no re-normalization
/// across rotation segments (segments re-map attribution, they never
/// re-weight points).
pub fn settle(totals: &RunningTotals, settings: &GameSettings) -> Settlement {
    let differential = totals.differential;
    let winner = match differential.signum() {
        1 => Some(Side::A),
        -1 => Some(Side::B),
        _ => None,
    };
    let points = match settings.payout_mode {
        PayoutMode::Difference => differential.abs(),
        PayoutMode::Total => match winner {
            Some(Side::A) => totals.side_points.a.abs(),
            Some(Side::B) => totals.side_points.b.abs(),
            None => 0,
        },
    };
    Settlement {
        winner,
        amount_cents: i64::from(points) * settings.stake_per_point_cents,
    }
}

/// One leg of a player-ledger settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairSettlement {
    pub debtor: PlayerId,
    pub creditor: PlayerId,
    pub amount_cents: i64,
}

/// Settle a player-ledger game (Copenhagen, Wolf) pairwise: every trailing
/// player owes every leader their point difference x stake. Level pairs
/// produce no leg.
pub fn pairwise_settlements(
    by_player: &BTreeMap<PlayerId, i32>,
    stake_per_point_cents: i64,
) -> Vec<PairSettlement> {
    let entries: Vec<(PlayerId, i32)> = by_player.iter().map(|(p, t)| (*p, *t)).collect();
    let mut legs = Vec::new();
    for (i, (first, first_total)) in entries.iter().enumerate() {
        for (second, second_total) in entries.iter().skip(i + 1) {
            let diff = i64::from(first_total - second_total);
            if diff > 0 {
                legs.push(PairSettlement {
                    debtor: *second,
                    creditor: *first,
                    amount_cents: diff * stake_per_point_cents,
                });
            } else if diff < 0 {
                legs.push(PairSettlement {
                    debtor: *first,
                    creditor: *second,
                    amount_cents: -diff * stake_per_point_cents,
                });
            }
        }
    }
    legs
}
