//! Builders for game setups used across the test modules.

use std::collections::BTreeMap;

use crate::domain::course::{HoleDefinition, StrokeIndex};
use crate::domain::game::{
    Game, GameFormat, GameSettings, Side, Team, TeamId, UmbriagoSettings, WolfSettings,
};
use crate::domain::player::{GameId, HandicapIndex, Player, PlayerId};
use crate::domain::score::HoleScore;

pub fn named_player(name: &str, handicap: &str) -> Player {
    Player {
        id: PlayerId::new(),
        name: name.to_string(),
        handicap: handicap.parse().expect("valid handicap in fixture"),
        tee: None,
    }
}

pub fn scratch_players(n: usize) -> Vec<Player> {
    (0..n)
        .map(|i| named_player(&format!("Player {}", i + 1), "0"))
        .collect()
}

/// A straight par-4 card whose stroke indexes are `1..=holes` in order.
pub fn flat_course(holes: u8) -> Vec<HoleDefinition> {
    (1..=holes)
        .map(|number| HoleDefinition {
            number,
            par: 4,
            stroke_index: Some(StrokeIndex(number)),
        })
        .collect()
}

pub fn game_with(format: GameFormat, roster: Vec<Player>, teams: Vec<Team>, holes: u8) -> Game {
    let game = Game {
        id: GameId::new(),
        format,
        roster,
        teams,
        course: flat_course(holes),
        settings: GameSettings::default(),
    };
    game.validate().expect("fixture games are well-formed");
    game
}

pub fn copenhagen_game() -> Game {
    game_with(GameFormat::Copenhagen, scratch_players(3), Vec::new(), 18)
}

pub fn wolf_game(settings: WolfSettings, players: usize) -> Game {
    game_with(GameFormat::Wolf(settings), scratch_players(players), Vec::new(), 18)
}

pub fn stroke_play_game(handicaps: &[&str]) -> Game {
    let roster = handicaps
        .iter()
        .enumerate()
        .map(|(i, h)| named_player(&format!("Player {}", i + 1), h))
        .collect();
    game_with(GameFormat::StrokePlay, roster, Vec::new(), 18)
}

/// Two teams of two. Returns the game; sides A/B hold roster slots
/// (0, 1) and (2, 3).
pub fn two_team_game(format: GameFormat, holes: u8) -> Game {
    let roster = scratch_players(4);
    let teams = vec![
        Team {
            id: TeamId(0),
            side: Some(Side::A),
            members: vec![roster[0].id, roster[1].id],
        },
        Team {
            id: TeamId(1),
            side: Some(Side::B),
            members: vec![roster[2].id, roster[3].id],
        },
    ];
    game_with(format, roster, teams, holes)
}

pub fn match_play_game(holes: u8) -> Game {
    two_team_game(GameFormat::MatchPlay, holes)
}

pub fn umbriago_game(settings: UmbriagoSettings) -> Game {
    two_team_game(GameFormat::Umbriago(settings), 18)
}

/// Map roster order to played gross scores.
pub fn played(game: &Game, grosses: &[u8]) -> BTreeMap<PlayerId, HoleScore> {
    assert_eq!(game.roster.len(), grosses.len(), "one gross per player");
    game.roster
        .iter()
        .zip(grosses)
        .map(|(p, g)| (p.id, HoleScore::Played(*g)))
        .collect()
}
