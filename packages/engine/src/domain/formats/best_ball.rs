//! Best ball: a team's hole score is its single best member net.
//!
//! The stroke variant accumulates that minimum into a team total; the match
//! variant compares the two sides' minimums to move a running match status.
//! In both, the team score is exactly one member's score, never an average
//! or a sum.

use std::collections::BTreeMap;

use crate::domain::formats::TeamHoleScore;
use crate::domain::game::Team;
use crate::domain::player::PlayerId;
use crate::errors::domain::{DomainError, InvariantKind};

/// Minimum net among members who played the hole; `None` when nobody did.
pub fn team_hole_score(
    team: &Team,
    nets: &BTreeMap<PlayerId, Option<i16>>,
) -> Result<Option<i16>, DomainError> {
    if team.members.is_empty() {
        return Err(DomainError::invariant(
            InvariantKind::EmptyTeam,
            format!("team {:?} has no members", team.id),
        ));
    }
    Ok(team
        .members
        .iter()
        .filter_map(|p| nets.get(p).copied().flatten())
        .min())
}

/// Stroke variant: each team's counting score for the hole.
pub fn score_hole_stroke(
    teams: &[Team],
    nets: &BTreeMap<PlayerId, Option<i16>>,
) -> Result<Vec<TeamHoleScore>, DomainError> {
    teams
        .iter()
        .map(|team| {
            Ok(TeamHoleScore {
                team: team.id,
                score: team_hole_score(team, nets)?,
            })
        })
        .collect()
}

/// Match variant: the hole's movement toward side A.
///
/// +1 when A's best ball beats B's, -1 the other way, 0 for a half. A side
/// with no played score forfeits the hole to the side that has one; two
/// empty sides halve it.
pub fn score_hole_match(
    side_a: &Team,
    side_b: &Team,
    nets: &BTreeMap<PlayerId, Option<i16>>,
) -> Result<i32, DomainError> {
    let a = team_hole_score(side_a, nets)?;
    let b = team_hole_score(side_b, nets)?;
    Ok(match (a, b) {
        (Some(a), Some(b)) => (b - a).signum() as i32,
        (Some(_), None) => 1,
        (None, Some(_)) => -1,
        (None, None) => 0,
    })
}
