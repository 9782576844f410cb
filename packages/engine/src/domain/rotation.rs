//! Rotating-partnership schedule.
//!
//! Formats with rotating teams (Umbriago) attribute a hole's points using
//! the pairing active *at that hole*, never a player's home team. Segments
//! are keyed by player id; display names play no part in attribution.

use serde::{Deserialize, Serialize};

use crate::domain::game::Side;
use crate::domain::player::PlayerId;
use crate::errors::domain::{DomainError, InvariantKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationSegment {
    pub team_a: Vec<PlayerId>,
    pub team_b: Vec<PlayerId>,
}

impl RotationSegment {
    pub fn side_of(&self, player: PlayerId) -> Result<Side, DomainError> {
        if self.team_a.contains(&player) {
            Ok(Side::A)
        } else if self.team_b.contains(&player) {
            Ok(Side::B)
        } else {
            Err(DomainError::invariant(
                InvariantKind::UnknownPlayer,
                format!("player {player} is in neither pairing of this segment"),
            ))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationSchedule {
    /// Holes covered by each segment (e.g. 6 for three pairings over 18).
    pub segment_holes: u8,
    pub segments: Vec<RotationSegment>,
}

impl RotationSchedule {
    /// Segment covering a 1-based hole number, clamped to the last segment
    /// so a schedule shorter than the round repeats its final pairing.
    pub fn segment_index(&self, hole: u8) -> usize {
        let raw = (hole.saturating_sub(1) / self.segment_holes.max(1)) as usize;
        raw.min(self.segments.len().saturating_sub(1))
    }

    pub fn segment_for_hole(&self, hole: u8) -> &RotationSegment {
        &self.segments[self.segment_index(hole)]
    }

    /// Side of `player` on `hole`, resolved through the covering segment.
    pub fn side_of(&self, hole: u8, player: PlayerId) -> Result<Side, DomainError> {
        self.segment_for_hole(hole).side_of(player)
    }

    /// Every segment must partition exactly the given roster ids into two
    /// non-empty pairings.
    pub fn validate(&self, roster_ids: &[PlayerId]) -> Result<(), DomainError> {
        if self.segment_holes == 0 {
            return Err(DomainError::invariant_other("rotation segment_holes must be >= 1"));
        }
        if self.segments.is_empty() {
            return Err(DomainError::invariant_other("rotation needs at least one segment"));
        }
        let mut expected: Vec<PlayerId> = roster_ids.to_vec();
        expected.sort();
        for (i, segment) in self.segments.iter().enumerate() {
            if segment.team_a.is_empty() || segment.team_b.is_empty() {
                return Err(DomainError::invariant(
                    InvariantKind::EmptyTeam,
                    format!("rotation segment {i} has an empty pairing"),
                ));
            }
            let mut covered: Vec<PlayerId> = segment
                .team_a
                .iter()
                .chain(segment.team_b.iter())
                .copied()
                .collect();
            covered.sort();
            if covered != expected {
                return Err(DomainError::invariant(
                    InvariantKind::UnknownPlayer,
                    format!("rotation segment {i} does not partition the roster"),
                ));
            }
        }
        Ok(())
    }
}
