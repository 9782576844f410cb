//! Game container: format, roster, teams, course, and wager settings.
//!
//! `GameFormat` is a closed union with per-variant settings, so each
//! format's rules stay pure functions over explicit inputs and no
//! per-format branching leaks anywhere else.

use serde::{Deserialize, Serialize};

use crate::domain::course::{validate_course, HoleDefinition};
use crate::domain::player::{GameId, Player, PlayerId};
use crate::domain::rotation::RotationSchedule;
use crate::errors::domain::{DomainError, InvariantKind};

/// One of the two betting sides of a two-sided contest.
///
/// In Wolf, `A` is the wolf's side and `B` the opponents; in Match Play and
/// Umbriago the sides are the two teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub u8);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    /// Betting side for two-sided formats; `None` for ranked team formats
    /// (best-ball stroke play).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
    pub members: Vec<PlayerId>,
}

/// Who anchors the wolf rotation on each hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WolfTeeOrder {
    /// The wolf tees off first: `roster[(hole - 1) % n]`.
    First,
    /// The wolf tees off last: the final player of that hole's tee rotation.
    Last,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WolfSettings {
    pub lone_win_points: i32,
    /// Lost (or won) per opponent, never split.
    pub lone_loss_points: i32,
    pub team_win_points: i32,
    pub tee_order: WolfTeeOrder,
}

impl Default for WolfSettings {
    fn default() -> Self {
        Self {
            lone_win_points: 3,
            lone_loss_points: 1,
            team_win_points: 1,
            tee_order: WolfTeeOrder::First,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UmbriagoSettings {
    pub team_low_points: i32,
    pub individual_low_points: i32,
    /// Per gross birdie-or-better, credited to the scorer's side.
    pub birdie_points: i32,
    pub closest_to_pin_points: i32,
    /// Partnership rotation; `None` keeps the home pairings all round.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<RotationSchedule>,
}

impl Default for UmbriagoSettings {
    fn default() -> Self {
        Self {
            team_low_points: 1,
            individual_low_points: 1,
            birdie_points: 1,
            closest_to_pin_points: 1,
            rotation: None,
        }
    }
}

/// Closed set of competition formats, settings embedded per variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "format", content = "settings")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameFormat {
    /// 3 players, 6 points a hole.
    Copenhagen,
    Wolf(WolfSettings),
    /// Team minimum per hole, accumulated stroke-play style.
    BestBall,
    /// Two-side best-ball match with closeout.
    MatchPlay,
    Umbriago(UmbriagoSettings),
    /// Handicapped net stroke play.
    StrokePlay,
}

impl GameFormat {
    pub fn name(&self) -> &'static str {
        match self {
            GameFormat::Copenhagen => "copenhagen",
            GameFormat::Wolf(_) => "wolf",
            GameFormat::BestBall => "best_ball",
            GameFormat::MatchPlay => "match_play",
            GameFormat::Umbriago(_) => "umbriago",
            GameFormat::StrokePlay => "stroke_play",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayoutMode {
    /// |point differential| x stake.
    Difference,
    /// Winning side's absolute point total x stake.
    Total,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    pub stake_per_point_cents: i64,
    pub payout_mode: PayoutMode,
    pub doubles_enabled: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            stake_per_point_cents: 100,
            payout_mode: PayoutMode::Difference,
            doubles_enabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub format: GameFormat,
    /// Ordered: Wolf cycles the wolf through this order.
    pub roster: Vec<Player>,
    /// Home teams for team formats; empty for individual formats.
    pub teams: Vec<Team>,
    pub course: Vec<HoleDefinition>,
    pub settings: GameSettings,
}

impl Game {
    pub fn holes_in_round(&self) -> u8 {
        self.course.len() as u8
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player, DomainError> {
        self.roster.iter().find(|p| p.id == id).ok_or_else(|| {
            DomainError::invariant(
                InvariantKind::UnknownPlayer,
                format!("player {id} is not in the game roster"),
            )
        })
    }

    pub fn hole(&self, number: u8) -> Result<&HoleDefinition, DomainError> {
        self.course
            .get(number.checked_sub(1).map(usize::from).unwrap_or(usize::MAX))
            .ok_or_else(|| {
                DomainError::invariant(
                    InvariantKind::HoleOutOfRange,
                    format!("hole {number} outside 1..={}", self.holes_in_round()),
                )
            })
    }

    /// The team carrying a given side marker. Two-sided formats require
    /// exactly one `A` and one `B`; [`Game::validate`] enforces that.
    pub fn team_on_side(&self, side: Side) -> Result<&Team, DomainError> {
        self.teams
            .iter()
            .find(|t| t.side == Some(side))
            .ok_or_else(|| {
                DomainError::invariant(
                    InvariantKind::RosterShape,
                    format!("no team assigned to side {side:?}"),
                )
            })
    }

    /// Home side of a player in a two-sided format, ignoring any rotation.
    pub fn home_side_of(&self, player: PlayerId) -> Result<Side, DomainError> {
        for team in &self.teams {
            if team.members.contains(&player) {
                if let Some(side) = team.side {
                    return Ok(side);
                }
            }
        }
        Err(DomainError::invariant(
            InvariantKind::UnknownPlayer,
            format!("player {player} is on neither side"),
        ))
    }

    /// Enforce roster/team shape for the chosen format. Run once at setup;
    /// the per-hole paths assume a validated game.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_course(&self.course)?;

        let mut ids: Vec<PlayerId> = self.roster.iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        if ids.len() != self.roster.len() {
            return Err(DomainError::invariant(
                InvariantKind::RosterShape,
                "duplicate player id in roster",
            ));
        }

        for team in &self.teams {
            if team.members.is_empty() {
                return Err(DomainError::invariant(
                    InvariantKind::EmptyTeam,
                    format!("team {:?} has no members", team.id),
                ));
            }
            for member in &team.members {
                self.player(*member)?;
            }
        }

        match &self.format {
            GameFormat::Copenhagen => self.expect_individual("copenhagen", 3, 3)?,
            GameFormat::Wolf(_) => self.expect_individual("wolf", 3, 5)?,
            GameFormat::StrokePlay => self.expect_individual("stroke play", 1, usize::MAX)?,
            GameFormat::BestBall => {
                if self.teams.len() < 2 {
                    return Err(DomainError::invariant(
                        InvariantKind::RosterShape,
                        "best ball needs at least two teams",
                    ));
                }
                self.expect_disjoint_teams()?;
            }
            GameFormat::MatchPlay => self.expect_two_sides()?,
            GameFormat::Umbriago(settings) => {
                self.expect_two_sides()?;
                for team in &self.teams {
                    if team.members.len() != 2 {
                        return Err(DomainError::invariant(
                            InvariantKind::RosterShape,
                            "umbriago is played two against two",
                        ));
                    }
                }
                if let Some(rotation) = &settings.rotation {
                    rotation.validate(&ids)?;
                }
            }
        }
        Ok(())
    }

    fn expect_individual(&self, label: &str, min: usize, max: usize) -> Result<(), DomainError> {
        if !self.teams.is_empty() {
            return Err(DomainError::invariant(
                InvariantKind::RosterShape,
                format!("{label} has no fixed teams"),
            ));
        }
        if self.roster.len() < min || self.roster.len() > max {
            return Err(DomainError::invariant(
                InvariantKind::RosterShape,
                format!("{label} roster size {} outside {min}..={max}", self.roster.len()),
            ));
        }
        Ok(())
    }

    fn expect_two_sides(&self) -> Result<(), DomainError> {
        self.expect_disjoint_teams()?;
        if self.teams.len() != 2 {
            return Err(DomainError::invariant(
                InvariantKind::RosterShape,
                "two-sided formats take exactly two teams",
            ));
        }
        self.team_on_side(Side::A)?;
        self.team_on_side(Side::B)?;
        Ok(())
    }

    fn expect_disjoint_teams(&self) -> Result<(), DomainError> {
        let mut members: Vec<PlayerId> = self
            .teams
            .iter()
            .flat_map(|t| t.members.iter().copied())
            .collect();
        let total = members.len();
        members.sort();
        members.dedup();
        if members.len() != total {
            return Err(DomainError::invariant(
                InvariantKind::RosterShape,
                "a player appears on more than one team",
            ));
        }
        Ok(())
    }
}
