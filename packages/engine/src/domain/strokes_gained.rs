//! Per-shot strokes gained against the expected-strokes baselines.

use serde::{Deserialize, Serialize};

use crate::domain::baseline::{expected_strokes, Lie};
use crate::errors::domain::DomainError;

/// Where a ball sits: lie category plus distance to the hole (feet on the
/// green, yards elsewhere).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotPosition {
    pub lie: Lie,
    pub distance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "position")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShotOutcome {
    Finished(ShotPosition),
    Holed,
    OutOfBounds,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shot {
    pub start: ShotPosition,
    pub outcome: ShotOutcome,
}

/// Strokes gained for one shot: expected before, minus expected after,
/// minus the stroke itself. A holed shot has nothing left to finish.
///
/// An out-of-bounds shot has no strokes-gained value of its own; see
/// [`record_shot`] for how it enters the ledger.
pub fn strokes_gained(shot: &Shot) -> Result<Option<f64>, DomainError> {
    let before = expected_strokes(shot.start.lie, shot.start.distance)?;
    let after = match shot.outcome {
        ShotOutcome::Finished(end) => expected_strokes(end.lie, end.distance)?,
        ShotOutcome::Holed => 0.0,
        ShotOutcome::OutOfBounds => return Ok(None),
    };
    Ok(Some(before - after - 1.0))
}

/// Ledger entry produced by [`record_shot`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "record")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShotRecord {
    /// A normal shot with its strokes-gained value.
    Scored { shot: Shot, strokes_gained: f64 },
    /// The out-of-bounds shot itself; no strokes-gained value attributed.
    OutOfBounds { shot: Shot },
    /// Stroke-and-distance: the next shot replays from the original
    /// position with one penalty stroke already on the card. Its own
    /// strokes gained is computed when that shot is entered.
    PenaltyReplay { from: ShotPosition },
}

/// Expand a shot into ledger entries: one for a normal shot, two for an
/// out-of-bounds ball (the OB event plus the penalty replay anchor).
pub fn record_shot(shot: &Shot) -> Result<Vec<ShotRecord>, DomainError> {
    match shot.outcome {
        ShotOutcome::OutOfBounds => Ok(vec![
            ShotRecord::OutOfBounds { shot: *shot },
            ShotRecord::PenaltyReplay { from: shot.start },
        ]),
        _ => {
            let gained = strokes_gained(shot)?.unwrap_or(0.0);
            Ok(vec![ShotRecord::Scored {
                shot: *shot,
                strokes_gained: gained,
            }])
        }
    }
}
