//! Handicap stroke allocation.
//!
//! Converts a playing handicap and a hole's stroke index into the strokes
//! received (or given) on that hole. Allocation is the only place handicap
//! sign handling lives; every format gets its net scores through here.

use crate::domain::course::{HoleDefinition, StrokeIndex};
use crate::errors::domain::{DomainError, InvariantKind};

/// Strokes allocated to one hole.
///
/// `base = |h| / N` strokes on every hole, plus one more on holes whose
/// stroke index is at most `|h| % N`. A negative playing handicap (plus
/// player) flips the sign: the allocation is strokes *given*, and
/// [`crate::domain::score::HoleScore::net`] adds them back.
///
/// A hole with no stroke index allocates zero. This is the documented
/// "unstroked" fallback for incomplete course data, not an error and not
/// silent corruption: callers that need a full allocation must validate the
/// card with [`crate::domain::course::validate_stroke_indexes`] first.
pub fn strokes_for_hole(
    playing: i16,
    stroke_index: Option<StrokeIndex>,
    holes_in_round: u8,
) -> Result<i16, DomainError> {
    let n = holes_in_round as i16;
    let Some(StrokeIndex(idx)) = stroke_index else {
        return Ok(0);
    };
    if idx < 1 || idx as i16 > n {
        return Err(DomainError::invariant(
            InvariantKind::StrokeIndex,
            format!("stroke index {idx} outside 1..={n}"),
        ));
    }
    let magnitude = playing.abs();
    let base = magnitude / n;
    let extra = magnitude % n;
    let strokes = base + i16::from(idx as i16 <= extra);
    Ok(if playing < 0 { -strokes } else { strokes })
}

/// Allocation for a whole card, one entry per hole in order.
pub fn allocate_round(playing: i16, holes: &[HoleDefinition]) -> Result<Vec<i16>, DomainError> {
    let n = holes.len() as u8;
    holes
        .iter()
        .map(|hole| strokes_for_hole(playing, hole.stroke_index, n))
        .collect()
}
