use std::collections::BTreeMap;

use crate::domain::compute::{compute_hole, replay, FormatEvents, HoleInput};
use crate::domain::formats::copenhagen::{score_hole, CopenhagenEntry, POT_POINTS};
use crate::domain::formats::HolePoints;
use crate::domain::player::PlayerId;
use crate::domain::press::Press;
use crate::domain::score::HoleScore;
use crate::domain::test_state_helpers::{copenhagen_game, played};

fn entries(nets: [i16; 3]) -> (Vec<PlayerId>, Vec<CopenhagenEntry>) {
    let players: Vec<PlayerId> = (0..3).map(|_| PlayerId::new()).collect();
    let entries = players
        .iter()
        .zip(nets)
        .map(|(p, net)| CopenhagenEntry {
            player: *p,
            // gross == net keeps the sweep door shut unless a test opens it
            gross: Some(net as u8),
            net: Some(net),
        })
        .collect();
    (players, entries)
}

fn points_of(players: &[PlayerId], points: &BTreeMap<PlayerId, i32>) -> Vec<i32> {
    players.iter().map(|p| points[p]).collect()
}

#[test]
fn distinct_scores_split_four_two_zero() {
    let (players, entries) = entries([70, 71, 72]);
    let points = score_hole(&entries, 4).unwrap();
    assert_eq!(points_of(&players, &points), vec![4, 2, 0]);
}

#[test]
fn low_tie_splits_three_three() {
    let (players, entries) = entries([70, 70, 72]);
    let points = score_hole(&entries, 4).unwrap();
    assert_eq!(points_of(&players, &points), vec![3, 3, 0]);
}

#[test]
fn second_tie_splits_four_one_one() {
    let (players, entries) = entries([70, 72, 72]);
    let points = score_hole(&entries, 4).unwrap();
    assert_eq!(points_of(&players, &points), vec![4, 1, 1]);
}

#[test]
fn three_way_tie_splits_evenly() {
    let (players, entries) = entries([70, 70, 70]);
    let points = score_hole(&entries, 4).unwrap();
    assert_eq!(points_of(&players, &points), vec![2, 2, 2]);
}

#[test]
fn sweep_takes_all_six() {
    // par 4: a gross 3 birdie beating 5 and 6 by two or more sweeps the pot
    let game = copenhagen_game();
    let input = HoleInput {
        hole: 1,
        scores: played(&game, &[3, 5, 6]),
        events: FormatEvents::Copenhagen,
        doubles: Vec::new(),
    };
    let result = compute_hole(&game, &[], &[], &input).unwrap();
    let HolePoints::Pot { by_player } = &result.points else {
        panic!("copenhagen yields pot points");
    };
    let split: Vec<i32> = game.roster.iter().map(|p| by_player[&p.id]).collect();
    assert_eq!(split, vec![6, 0, 0]);
}

#[test]
fn sweep_needs_a_birdie() {
    // 4-6-6 has the margins but no birdie on a par 4: normal table applies
    let (players, entries) = entries([4, 6, 6]);
    let points = score_hole(&entries, 4).unwrap();
    assert_eq!(points_of(&players, &points), vec![4, 1, 1]);
}

#[test]
fn sweep_needs_two_stroke_margins_over_both() {
    let (players, entries) = entries([3, 4, 6]);
    let points = score_hole(&entries, 4).unwrap();
    assert_eq!(points_of(&players, &points), vec![4, 2, 0]);
}

#[test]
fn conceded_card_ranks_behind_every_played_net() {
    let players: Vec<PlayerId> = (0..3).map(|_| PlayerId::new()).collect();
    let entries: Vec<CopenhagenEntry> = vec![
        CopenhagenEntry { player: players[0], gross: Some(4), net: Some(4) },
        CopenhagenEntry { player: players[1], gross: Some(4), net: Some(4) },
        CopenhagenEntry { player: players[2], gross: None, net: None },
    ];
    let points = score_hole(&entries, 4).unwrap();
    assert_eq!(points_of(&players, &points), vec![3, 3, 0]);
}

#[test]
fn every_split_conserves_the_pot() {
    for nets in [[4, 5, 6], [4, 4, 6], [4, 6, 6], [5, 5, 5], [3, 5, 7]] {
        let (_, entries) = entries(nets);
        let points = score_hole(&entries, 4).unwrap();
        assert_eq!(points.values().sum::<i32>(), POT_POINTS, "{nets:?}");
    }
}

#[test]
fn presses_keep_their_own_ledger_from_their_start_hole() {
    let game = copenhagen_game();
    let press = Press::starting_at(2, 18).unwrap();
    let inputs: Vec<HoleInput> = (1..=3)
        .map(|hole| HoleInput {
            hole,
            scores: played(&game, &[4, 5, 6]),
            events: FormatEvents::Copenhagen,
            doubles: Vec::new(),
        })
        .collect();
    let results = replay(&game, &[press], &inputs).unwrap();

    let leader = game.roster[0].id;
    let last = results.last().unwrap();
    // main ledger counts holes 1..=3, the press only 2..=3
    assert_eq!(last.totals_after.by_player[&leader], 12);
    assert_eq!(last.presses_after[0].by_player[&leader], 8);
}

#[test]
fn conceded_hole_still_scores_the_other_two() {
    let game = copenhagen_game();
    let mut scores = played(&game, &[4, 5, 5]);
    scores.insert(game.roster[2].id, HoleScore::Conceded);
    let input = HoleInput {
        hole: 1,
        scores,
        events: FormatEvents::Copenhagen,
        doubles: Vec::new(),
    };
    let result = compute_hole(&game, &[], &[], &input).unwrap();
    let HolePoints::Pot { by_player } = &result.points else {
        panic!("copenhagen yields pot points");
    };
    assert_eq!(by_player[&game.roster[0].id], 4);
    assert_eq!(by_player[&game.roster[1].id], 2);
    assert_eq!(by_player[&game.roster[2].id], 0);
}
