use crate::domain::compute::{replay, FormatEvents, HoleInput};
use crate::domain::formats::stroke_play::{standings, PlayerCard};
use crate::domain::match_state::player_standings;
use crate::domain::player::PlayerId;
use crate::domain::score::HoleScore;
use crate::domain::test_state_helpers::{played, stroke_play_game};

fn card(player: PlayerId, net_total: i32, complete: bool) -> PlayerCard {
    PlayerCard {
        player,
        net_total,
        to_par: net_total - 72,
        holes_played: if complete { 18 } else { 12 },
        complete,
    }
}

#[test]
fn ties_share_a_position_with_a_t_label() {
    let players: Vec<PlayerId> = (0..4).map(|_| PlayerId::new()).collect();
    let cards = vec![
        card(players[0], 70, true),
        card(players[1], 68, true),
        card(players[2], 70, true),
        card(players[3], 74, true),
    ];
    let rows = standings(&cards);
    assert_eq!(rows[0].player, players[1]);
    assert_eq!(rows[0].label.as_deref(), Some("1"));
    assert_eq!(rows[1].label.as_deref(), Some("T2"));
    assert_eq!(rows[2].label.as_deref(), Some("T2"));
    assert_eq!(rows[3].label.as_deref(), Some("4"));
    assert_eq!(rows[3].position, Some(4));
}

#[test]
fn incomplete_cards_sort_last_and_stay_unranked() {
    let players: Vec<PlayerId> = (0..3).map(|_| PlayerId::new()).collect();
    let cards = vec![
        card(players[0], 40, false), // lowest total, but an unfinished card
        card(players[1], 75, true),
        card(players[2], 72, true),
    ];
    let rows = standings(&cards);
    assert_eq!(rows[0].player, players[2]);
    assert_eq!(rows[1].player, players[1]);
    assert_eq!(rows[2].player, players[0]);
    assert_eq!(rows[2].position, None);
    assert_eq!(rows[2].label, None);
}

#[test]
fn handicap_strokes_land_on_the_indexed_holes() {
    // 9-handicap: one stroke on stroke indexes 1..=9 of the flat course
    let game = stroke_play_game(&["9", "0"]);
    let inputs: Vec<HoleInput> = (1..=2)
        .map(|hole| HoleInput {
            hole,
            scores: played(&game, &[5, 5]),
            events: FormatEvents::StrokePlay,
            doubles: Vec::new(),
        })
        .collect();
    let results = replay(&game, &[], &inputs).unwrap();
    // both early holes are stroked for the 9-handicapper
    let handicapped = game.roster[0].id;
    let scratch = game.roster[1].id;
    for result in &results {
        assert_eq!(result.net_scores[&handicapped], Some(4));
        assert_eq!(result.net_scores[&scratch], Some(5));
    }
    let last = results.last().unwrap();
    assert_eq!(last.totals_after.by_player[&handicapped], 8);
    assert_eq!(last.totals_after.by_player[&scratch], 10);
}

#[test]
fn a_conceded_hole_drops_the_card_from_the_ranking() {
    let game = stroke_play_game(&["0", "0"]);
    let mut scores = played(&game, &[4, 5]);
    scores.insert(game.roster[0].id, HoleScore::Conceded);
    let inputs = vec![HoleInput {
        hole: 1,
        scores,
        events: FormatEvents::StrokePlay,
        doubles: Vec::new(),
    }];
    let results = replay(&game, &[], &inputs).unwrap();
    let rows = player_standings(&game, &results);
    assert_eq!(rows[0].player, game.roster[1].id);
    assert_eq!(rows[0].label.as_deref(), Some("1"));
    assert_eq!(rows[1].player, game.roster[0].id);
    assert_eq!(rows[1].position, None, "conceded cards are unranked");
}
