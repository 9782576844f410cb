//! Hole definitions as handed over by the course data service.

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, InvariantKind};

/// A hole's allocation rank: 1 is the hardest hole and takes the first
/// handicap stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StrokeIndex(pub u8);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleDefinition {
    /// 1-based hole number within the round.
    pub number: u8,
    pub par: u8,
    /// `None` when the course data carries no index for this hole. Such a
    /// hole is "unstroked": it allocates zero handicap strokes, by the
    /// documented fallback in [`crate::domain::handicap`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_index: Option<StrokeIndex>,
}

/// Validate a round's card: hole numbers are `1..=N` in order, pars are
/// plausible, and the stroke indexes that are present form part of a
/// permutation of `1..=N` (in range, no repeats).
///
/// Violations are invariant errors: the course data service is the only
/// source of these rows, so a bad card is a caller bug.
pub fn validate_course(holes: &[HoleDefinition]) -> Result<(), DomainError> {
    let n = holes.len();
    if n != 9 && n != 18 {
        return Err(DomainError::invariant(
            InvariantKind::HoleOutOfRange,
            format!("a round has 9 or 18 holes, got {n}"),
        ));
    }
    for (i, hole) in holes.iter().enumerate() {
        if hole.number as usize != i + 1 {
            return Err(DomainError::invariant(
                InvariantKind::HoleOutOfRange,
                format!("hole numbers must run 1..={n} in order, got {} at slot {}", hole.number, i + 1),
            ));
        }
        if !(3..=6).contains(&hole.par) {
            return Err(DomainError::invariant_other(format!(
                "implausible par {} on hole {}",
                hole.par, hole.number
            )));
        }
    }
    validate_stroke_indexes(holes)
}

/// Check stroke-index uniqueness and range on their own. Missing indexes are
/// allowed (those holes allocate nothing); present ones must be `1..=N` and
/// never repeat.
pub fn validate_stroke_indexes(holes: &[HoleDefinition]) -> Result<(), DomainError> {
    let n = holes.len() as u8;
    let mut seen = [false; 18];
    for hole in holes {
        let Some(StrokeIndex(idx)) = hole.stroke_index else {
            continue;
        };
        if idx < 1 || idx > n {
            return Err(DomainError::invariant(
                InvariantKind::StrokeIndex,
                format!("stroke index {idx} outside 1..={n} on hole {}", hole.number),
            ));
        }
        if seen[(idx - 1) as usize] {
            return Err(DomainError::invariant(
                InvariantKind::StrokeIndex,
                format!("stroke index {idx} repeated on hole {}", hole.number),
            ));
        }
        seen[(idx - 1) as usize] = true;
    }
    Ok(())
}
