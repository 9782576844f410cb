//! Boundary facade: the pure functions the surrounding application calls.
//!
//! Per hole: raw scores -> handicap allocation -> format point rules ->
//! multiplier -> running state fold -> fingerprint. Everything is a function
//! of its inputs; identical inputs produce identical results, so retried
//! submissions are harmless.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::fingerprint::hole_fingerprint;
use crate::domain::formats::umbriago::UmbriagoEvent;
use crate::domain::formats::wolf::WolfDeclaration;
use crate::domain::formats::{best_ball, copenhagen, scale_deltas, stroke_play, umbriago, wolf};
use crate::domain::formats::HolePoints;
use crate::domain::game::{Game, GameFormat, Side};
use crate::domain::handicap::strokes_for_hole;
use crate::domain::match_state::{
    closeout_after, fold_press_totals, fold_totals, HoleResult, MatchStatus, RunningTotals,
};
use crate::domain::multiplier::MultiplierStack;
use crate::domain::payout::{settle, Settlement};
use crate::domain::player::PlayerId;
use crate::domain::press::Press;
use crate::domain::score::HoleScore;
use crate::errors::domain::{DomainError, InvariantKind, ValidationKind};

/// Per-format events captured before a hole is sealed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "format", content = "data")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormatEvents {
    Copenhagen,
    Wolf { declaration: WolfDeclaration },
    BestBall,
    MatchPlay,
    /// Declared events (rolls, judged contests) in recorded order; the
    /// score-derived contests are appended at hole completion.
    Umbriago { events: Vec<UmbriagoEvent> },
    StrokePlay,
}

/// Everything the caller hands over to score one hole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoleInput {
    /// 1-based hole number.
    pub hole: u8,
    /// Raw scores; a roster player missing here is treated as unplayed.
    pub scores: BTreeMap<PlayerId, HoleScore>,
    pub events: FormatEvents,
    /// Double declarations in order. Only meaningful where the format
    /// supports doubling (Wolf, Match Play).
    pub doubles: Vec<Side>,
}

/// Score one hole on top of the prior results.
///
/// `prior` must hold holes `1..input.hole` in order; running state at hole
/// *h* depends on every earlier hole, so gaps are a caller bug.
pub fn compute_hole(
    game: &Game,
    presses: &[Press],
    prior: &[HoleResult],
    input: &HoleInput,
) -> Result<HoleResult, DomainError> {
    let holes_in_round = game.holes_in_round();
    if input.hole < 1 || input.hole > holes_in_round {
        return Err(DomainError::invariant(
            InvariantKind::HoleOutOfRange,
            format!("hole {} outside 1..={holes_in_round}", input.hole),
        ));
    }
    if prior.len() != input.hole as usize - 1 {
        return Err(DomainError::invariant(
            InvariantKind::HoleOutOfRange,
            format!(
                "hole {} needs {} prior results, got {}",
                input.hole,
                input.hole - 1,
                prior.len()
            ),
        ));
    }
    for player in input.scores.keys() {
        game.player(*player)?;
    }

    let net_scores = net_scores_for_hole(game, input)?;
    let grosses: BTreeMap<PlayerId, Option<u8>> = game
        .roster
        .iter()
        .map(|p| {
            let score = input.scores.get(&p.id).copied().unwrap_or_default();
            (p.id, score.gross())
        })
        .collect();

    let multiplier = multiplier_for_hole(game, input)?;
    let points = points_for_hole(game, input, &net_scores, &grosses, multiplier, prior)?;

    let prev = prior.last();
    let totals_after = fold_totals(prev.map(|r| &r.totals_after), &points);
    let presses_after = fold_press_totals(
        prev.map(|r| r.presses_after.as_slice()),
        presses,
        input.hole,
        &points,
    );

    let (status_after, closeout) = match game.format {
        GameFormat::MatchPlay => (
            Some(MatchStatus::from_differential(totals_after.differential)),
            closeout_after(totals_after.differential, input.hole, holes_in_round),
        ),
        GameFormat::Umbriago(_) => (
            Some(MatchStatus::from_differential(totals_after.differential)),
            None,
        ),
        _ => (None, None),
    };

    let fingerprint = hole_fingerprint(game.id, input)?;
    debug!(
        game = %game.id,
        format = game.format.name(),
        hole = input.hole,
        multiplier,
        "computed hole"
    );

    Ok(HoleResult {
        hole: input.hole,
        fingerprint,
        net_scores,
        points,
        multiplier,
        totals_after,
        presses_after,
        status_after,
        closeout,
    })
}

/// Replay a full ordered input sequence from hole 1.
pub fn replay(
    game: &Game,
    presses: &[Press],
    inputs: &[HoleInput],
) -> Result<Vec<HoleResult>, DomainError> {
    let mut results: Vec<HoleResult> = Vec::with_capacity(inputs.len());
    for input in inputs {
        let result = compute_hole(game, presses, &results, input)?;
        results.push(result);
    }
    Ok(results)
}

/// Recompute holes `from_hole..` after an edit, leaving earlier holes
/// untouched.
///
/// `inputs` is the full ordered input list (with the edit applied). The
/// recomputed suffix replaces `results[from_hole-1..]` only if every hole
/// recomputes cleanly; on error the existing results are left as they were.
/// The caller must persist the whole suffix as one atomic unit so readers
/// never observe a half-recomputed ledger.
pub fn recompute_from(
    game: &Game,
    presses: &[Press],
    results: &mut Vec<HoleResult>,
    inputs: &[HoleInput],
    from_hole: u8,
) -> Result<(), DomainError> {
    if from_hole < 1 || from_hole as usize > inputs.len() {
        return Err(DomainError::invariant(
            InvariantKind::HoleOutOfRange,
            format!("recompute start {from_hole} outside 1..={}", inputs.len()),
        ));
    }
    let mut rebuilt: Vec<HoleResult> = results[..from_hole as usize - 1].to_vec();
    for input in &inputs[from_hole as usize - 1..] {
        let result = compute_hole(game, presses, &rebuilt, input)?;
        rebuilt.push(result);
    }
    debug!(game = %game.id, from_hole, holes = rebuilt.len(), "recomputed suffix");
    *results = rebuilt;
    Ok(())
}

/// Settle a finished game's final totals under its payout settings.
pub fn compute_payout(game: &Game, final_totals: &RunningTotals) -> Settlement {
    let settlement = settle(final_totals, &game.settings);
    debug!(
        game = %game.id,
        winner = ?settlement.winner,
        amount_cents = settlement.amount_cents,
        "settled game"
    );
    settlement
}

fn net_scores_for_hole(
    game: &Game,
    input: &HoleInput,
) -> Result<BTreeMap<PlayerId, Option<i16>>, DomainError> {
    let hole = game.hole(input.hole)?;
    let holes_in_round = game.holes_in_round();
    game.roster
        .iter()
        .map(|player| {
            let score = input.scores.get(&player.id).copied().unwrap_or_default();
            let allocation = strokes_for_hole(
                player.handicap.playing_strokes(),
                hole.stroke_index,
                holes_in_round,
            )?;
            Ok((player.id, score.net(allocation)))
        })
        .collect()
}

fn multiplier_for_hole(game: &Game, input: &HoleInput) -> Result<i32, DomainError> {
    if input.doubles.is_empty() {
        return Ok(1);
    }
    if !game.settings.doubles_enabled {
        return Err(DomainError::validation(
            ValidationKind::DoubleProtocol,
            "doubles are disabled for this game",
        ));
    }
    if !matches!(game.format, GameFormat::Wolf(_) | GameFormat::MatchPlay) {
        return Err(DomainError::validation(
            ValidationKind::DoubleProtocol,
            format!("{} holes cannot be doubled", game.format.name()),
        ));
    }
    Ok(MultiplierStack::from_declarations(&input.doubles)?.value())
}

fn points_for_hole(
    game: &Game,
    input: &HoleInput,
    net_scores: &BTreeMap<PlayerId, Option<i16>>,
    grosses: &BTreeMap<PlayerId, Option<u8>>,
    multiplier: i32,
    prior: &[HoleResult],
) -> Result<HolePoints, DomainError> {
    match (&game.format, &input.events) {
        (GameFormat::Copenhagen, FormatEvents::Copenhagen) => {
            let par = game.hole(input.hole)?.par;
            let entries: Vec<copenhagen::CopenhagenEntry> = game
                .roster
                .iter()
                .map(|p| copenhagen::CopenhagenEntry {
                    player: p.id,
                    gross: grosses.get(&p.id).copied().flatten(),
                    net: net_scores.get(&p.id).copied().flatten(),
                })
                .collect();
            let by_player = copenhagen::score_hole(&entries, par)?;
            Ok(HolePoints::Pot { by_player })
        }
        (GameFormat::Wolf(settings), FormatEvents::Wolf { declaration }) => {
            let roster: Vec<PlayerId> = game.roster.iter().map(|p| p.id).collect();
            let mut by_player =
                wolf::score_hole(settings, &roster, input.hole, *declaration, net_scores)?;
            scale_deltas(&mut by_player, multiplier);
            Ok(HolePoints::Deltas { by_player })
        }
        (GameFormat::BestBall, FormatEvents::BestBall) => {
            let teams = best_ball::score_hole_stroke(&game.teams, net_scores)?;
            Ok(HolePoints::TeamScores { teams })
        }
        (GameFormat::MatchPlay, FormatEvents::MatchPlay) => {
            if prior.last().and_then(|r| r.closeout.as_ref()).is_some() {
                return Err(DomainError::validation_other(
                    "the match is already decided; later holes are not scored",
                ));
            }
            let side_a = game.team_on_side(Side::A)?;
            let side_b = game.team_on_side(Side::B)?;
            let delta = best_ball::score_hole_match(side_a, side_b, net_scores)? * multiplier;
            Ok(HolePoints::HoleMatch { delta })
        }
        (GameFormat::Umbriago(settings), FormatEvents::Umbriago { events }) => {
            let par = game.hole(input.hole)?.par;
            let sides: BTreeMap<PlayerId, Side> = game
                .roster
                .iter()
                .map(|p| {
                    let side = match &settings.rotation {
                        Some(rotation) => rotation.side_of(input.hole, p.id)?,
                        None => game.home_side_of(p.id)?,
                    };
                    Ok((p.id, side))
                })
                .collect::<Result<_, DomainError>>()?;
            let mut ordered = events.clone();
            ordered.extend(umbriago::derive_contests(&sides, net_scores, grosses, par));
            let (a_points, b_points) = umbriago::score_hole(settings, &ordered);
            Ok(HolePoints::SideContest { a_points, b_points })
        }
        (GameFormat::StrokePlay, FormatEvents::StrokePlay) => {
            let by_player = stroke_play::score_hole(net_scores);
            Ok(HolePoints::NetScores { by_player })
        }
        (format, events) => Err(DomainError::invariant(
            InvariantKind::FormatMismatch,
            format!("{} game given {events:?} events", format.name()),
        )),
    }
}
