//! Running match state as a pure fold over ordered hole results.
//!
//! Totals after hole *h* are always the signed sum of holes `1..=h`; there
//! is no independently incremented counter that could drift from a replay.
//! Position labels are recomputed from the full standings on every call.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::domain::formats::stroke_play::{standings, tie_labels, PlayerCard, Standing};
use crate::domain::formats::HolePoints;
use crate::domain::game::{Game, Side, TeamId};
use crate::domain::player::{PlayerId, PressId};
use crate::domain::press::Press;

/// Match status derived from the running differential alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    AllSquare,
    Up { side: Side, holes: u32 },
}

impl MatchStatus {
    pub fn from_differential(differential: i32) -> Self {
        if differential == 0 {
            MatchStatus::AllSquare
        } else {
            MatchStatus::Up {
                side: if differential > 0 { Side::A } else { Side::B },
                holes: differential.unsigned_abs(),
            }
        }
    }
}

impl Display for MatchStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            MatchStatus::AllSquare => write!(f, "AS"),
            MatchStatus::Up { holes, .. } => write!(f, "{holes}UP"),
        }
    }
}

/// Early termination of a match-play game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCloseout {
    pub winner: Side,
    /// Traditional margin: "3&2" mid-round, "2UP" on the last green.
    pub label: String,
}

/// A match closes out once the lead exceeds the holes remaining.
pub fn closeout_after(differential: i32, hole: u8, holes_in_round: u8) -> Option<MatchCloseout> {
    let lead = differential.unsigned_abs();
    let remaining = u32::from(holes_in_round.saturating_sub(hole));
    let finished = hole >= holes_in_round;
    if lead > remaining || (finished && lead > 0) {
        let winner = if differential > 0 { Side::A } else { Side::B };
        let label = if remaining > 0 {
            format!("{lead}&{remaining}")
        } else {
            format!("{lead}UP")
        };
        Some(MatchCloseout { winner, label })
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamTotal {
    pub team: TeamId,
    pub total: i32,
}

/// Gross points won per side, kept alongside the zero-sum differential for
/// "total"-mode payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SidePoints {
    pub a: i32,
    pub b: i32,
}

/// Snapshot of every running total after a hole.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunningTotals {
    /// Point totals (Copenhagen, Wolf) or net totals (stroke play).
    pub by_player: BTreeMap<PlayerId, i32>,
    /// Accumulated team scores for best-ball stroke play.
    pub by_team: Vec<TeamTotal>,
    /// Signed two-sided differential (match play, Umbriago), toward side A.
    pub differential: i32,
    /// Gross sub-contest points per side (Umbriago) or holes won per side
    /// (match play).
    pub side_points: SidePoints,
}

/// A press's own running ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PressTotals {
    pub press: PressId,
    pub by_player: BTreeMap<PlayerId, i32>,
}

/// One computed, immutable hole row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoleResult {
    pub hole: u8,
    /// Content-derived idempotency key for the hole's input.
    pub fingerprint: String,
    pub net_scores: BTreeMap<PlayerId, Option<i16>>,
    pub points: HolePoints,
    pub multiplier: i32,
    pub totals_after: RunningTotals,
    pub presses_after: Vec<PressTotals>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_after: Option<MatchStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closeout: Option<MatchCloseout>,
}

/// Fold one hole's points onto the previous snapshot.
pub fn fold_totals(prev: Option<&RunningTotals>, points: &HolePoints) -> RunningTotals {
    let mut next = prev.cloned().unwrap_or_default();
    match points {
        HolePoints::Pot { by_player } | HolePoints::Deltas { by_player } => {
            for (player, delta) in by_player {
                *next.by_player.entry(*player).or_insert(0) += delta;
            }
        }
        HolePoints::NetScores { by_player } => {
            for (player, net) in by_player {
                *next.by_player.entry(*player).or_insert(0) += i32::from(*net);
            }
        }
        HolePoints::TeamScores { teams } => {
            for entry in teams {
                let slot = next.by_team.iter_mut().find(|t| t.team == entry.team);
                let counted = i32::from(entry.score.unwrap_or(0));
                match slot {
                    Some(slot) => slot.total += counted,
                    None => next.by_team.push(TeamTotal { team: entry.team, total: counted }),
                }
            }
        }
        HolePoints::HoleMatch { delta } => {
            if *delta > 0 {
                next.side_points.a += delta;
            } else {
                next.side_points.b += -delta;
            }
        }
        HolePoints::SideContest { a_points, b_points } => {
            next.side_points.a += a_points;
            next.side_points.b += b_points;
        }
    }
    next.differential += points.differential();
    next
}

/// Fold the same hole points into every press whose window covers the hole.
/// Presses not yet covering the hole keep their (possibly empty) ledgers.
pub fn fold_press_totals(
    prev: Option<&[PressTotals]>,
    presses: &[Press],
    hole: u8,
    points: &HolePoints,
) -> Vec<PressTotals> {
    presses
        .iter()
        .map(|press| {
            let mut totals = prev
                .and_then(|ledgers| ledgers.iter().find(|l| l.press == press.id))
                .cloned()
                .unwrap_or(PressTotals {
                    press: press.id,
                    by_player: BTreeMap::new(),
                });
            if press.covers(hole) {
                if let Some(deltas) = points.player_deltas() {
                    for (player, delta) in deltas {
                        *totals.by_player.entry(*player).or_insert(0) += delta;
                    }
                }
            }
            totals
        })
        .collect()
}

/// Stroke-play leaderboard over the holes computed so far.
///
/// A player is complete only while every computed hole has a net score for
/// them; one conceded or unentered hole drops the card out of the ranking.
pub fn player_standings(game: &Game, results: &[HoleResult]) -> Vec<Standing> {
    let cards: Vec<PlayerCard> = game
        .roster
        .iter()
        .map(|player| {
            let mut net_total = 0i32;
            let mut to_par = 0i32;
            let mut holes_played = 0u8;
            let mut complete = true;
            for result in results {
                match result.net_scores.get(&player.id).copied().flatten() {
                    Some(net) => {
                        let par = game
                            .course
                            .get(result.hole as usize - 1)
                            .map(|h| i32::from(h.par))
                            .unwrap_or(0);
                        net_total += i32::from(net);
                        to_par += i32::from(net) - par;
                        holes_played += 1;
                    }
                    None => complete = false,
                }
            }
            PlayerCard {
                player: player.id,
                net_total,
                to_par,
                holes_played,
                complete,
            }
        })
        .collect();
    standings(&cards)
}

/// Best-ball team leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStanding {
    pub team: TeamId,
    pub total: i32,
    pub position: Option<u16>,
    pub label: Option<String>,
}

/// Rank team totals ascending. A team that ever had a scoreless hole is
/// treated as incomplete and left unranked, mirroring player cards.
pub fn team_standings(results: &[HoleResult]) -> Vec<TeamStanding> {
    let mut totals: BTreeMap<TeamId, (i32, bool)> = BTreeMap::new();
    for result in results {
        if let HolePoints::TeamScores { teams } = &result.points {
            for entry in teams {
                let slot = totals.entry(entry.team).or_insert((0, true));
                match entry.score {
                    Some(score) => slot.0 += i32::from(score),
                    None => slot.1 = false,
                }
            }
        }
    }

    let mut complete: Vec<(TeamId, i32)> = totals
        .iter()
        .filter(|(_, (_, ok))| *ok)
        .map(|(team, (total, _))| (*team, *total))
        .collect();
    complete.sort_by_key(|(_, total)| *total);
    let labels = tie_labels(&complete.iter().map(|(_, t)| *t).collect::<Vec<_>>());

    let mut rows: Vec<TeamStanding> = complete
        .into_iter()
        .zip(labels)
        .map(|((team, total), (position, label))| TeamStanding {
            team,
            total,
            position: Some(position),
            label: Some(label),
        })
        .collect();
    rows.extend(
        totals
            .iter()
            .filter(|(_, (_, ok))| !*ok)
            .map(|(team, (total, _))| TeamStanding {
                team: *team,
                total: *total,
                position: None,
                label: None,
            }),
    );
    rows
}
