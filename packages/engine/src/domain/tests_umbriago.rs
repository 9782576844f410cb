use std::collections::BTreeMap;

use crate::domain::compute::{compute_hole, replay, FormatEvents, HoleInput};
use crate::domain::formats::umbriago::{
    derive_contests, score_hole, UmbriagoContest, UmbriagoEvent,
};
use crate::domain::formats::HolePoints;
use crate::domain::game::{Side, UmbriagoSettings};
use crate::domain::player::PlayerId;
use crate::domain::rotation::{RotationSchedule, RotationSegment};
use crate::domain::test_state_helpers::{played, umbriago_game};

fn sides_of(players: &[PlayerId]) -> BTreeMap<PlayerId, Side> {
    let mut sides = BTreeMap::new();
    sides.insert(players[0], Side::A);
    sides.insert(players[1], Side::A);
    sides.insert(players[2], Side::B);
    sides.insert(players[3], Side::B);
    sides
}

fn nets_of(players: &[PlayerId], nets: [i16; 4]) -> BTreeMap<PlayerId, Option<i16>> {
    players.iter().zip(nets).map(|(p, n)| (*p, Some(n))).collect()
}

fn grosses_of(players: &[PlayerId], grosses: [u8; 4]) -> BTreeMap<PlayerId, Option<u8>> {
    players.iter().zip(grosses).map(|(p, g)| (*p, Some(g))).collect()
}

#[test]
fn derives_team_low_individual_low_and_birdies() {
    let players: Vec<PlayerId> = (0..4).map(|_| PlayerId::new()).collect();
    let sides = sides_of(&players);
    let nets = nets_of(&players, [3, 5, 4, 5]);
    let grosses = grosses_of(&players, [3, 5, 4, 5]);

    let events = derive_contests(&sides, &nets, &grosses, 4);
    // team low: A (8 vs 9); individual low: unique 3 on A; one birdie (the 3)
    assert!(events.contains(&UmbriagoEvent::Contest {
        kind: UmbriagoContest::TeamLow,
        winner: Some(Side::A),
    }));
    assert!(events.contains(&UmbriagoEvent::Contest {
        kind: UmbriagoContest::IndividualLow,
        winner: Some(Side::A),
    }));
    let birdies: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, UmbriagoEvent::Contest { kind: UmbriagoContest::Birdie, .. }))
        .collect();
    assert_eq!(birdies.len(), 1);
}

#[test]
fn shared_low_pushes_the_individual_contest() {
    let players: Vec<PlayerId> = (0..4).map(|_| PlayerId::new()).collect();
    let sides = sides_of(&players);
    let nets = nets_of(&players, [4, 5, 4, 5]);
    let grosses = grosses_of(&players, [4, 5, 4, 5]);
    let events = derive_contests(&sides, &nets, &grosses, 4);
    assert!(events.contains(&UmbriagoEvent::Contest {
        kind: UmbriagoContest::IndividualLow,
        winner: None,
    }));
}

#[test]
fn a_roll_doubles_every_later_contest() {
    let settings = UmbriagoSettings::default();
    let events = [
        UmbriagoEvent::Contest { kind: UmbriagoContest::ClosestToPin, winner: Some(Side::B) },
        UmbriagoEvent::Roll { by: Side::A },
        UmbriagoEvent::Contest { kind: UmbriagoContest::TeamLow, winner: Some(Side::A) },
        UmbriagoEvent::Contest { kind: UmbriagoContest::IndividualLow, winner: Some(Side::A) },
    ];
    let (a, b) = score_hole(&settings, &events);
    // pin before the roll stays 1; the two contests after it pay double
    assert_eq!(b, 1);
    assert_eq!(a, 4);
}

#[test]
fn stacked_rolls_keep_doubling() {
    let settings = UmbriagoSettings::default();
    let events = [
        UmbriagoEvent::Roll { by: Side::A },
        UmbriagoEvent::Roll { by: Side::B },
        UmbriagoEvent::Contest { kind: UmbriagoContest::TeamLow, winner: Some(Side::B) },
    ];
    let (a, b) = score_hole(&settings, &events);
    assert_eq!(a, 0);
    assert_eq!(b, 4);
}

#[test]
fn hole_totals_fold_into_a_zero_sum_pair() {
    let game = umbriago_game(UmbriagoSettings::default());
    let inputs: Vec<HoleInput> = (1..=2)
        .map(|hole| HoleInput {
            hole,
            // A's pair nets 7, B's 11; unique low and a birdie for A
            scores: played(&game, &[3, 4, 5, 6]),
            events: FormatEvents::Umbriago { events: Vec::new() },
            doubles: Vec::new(),
        })
        .collect();
    let results = replay(&game, &[], &inputs).unwrap();
    let last = results.last().unwrap();
    // 3 points a hole: team low + individual low + one birdie
    assert_eq!(last.totals_after.side_points.a, 6);
    assert_eq!(last.totals_after.side_points.b, 0);
    assert_eq!(last.totals_after.differential, 6);
}

#[test]
fn attribution_follows_the_segment_covering_the_hole() {
    let mut settings = UmbriagoSettings::default();
    let game = umbriago_game(settings.clone());
    let ids: Vec<PlayerId> = game.roster.iter().map(|p| p.id).collect();
    // second segment swaps partners: best player crosses to side B
    settings.rotation = Some(RotationSchedule {
        segment_holes: 6,
        segments: vec![
            RotationSegment { team_a: vec![ids[0], ids[1]], team_b: vec![ids[2], ids[3]] },
            RotationSegment { team_a: vec![ids[1], ids[2]], team_b: vec![ids[0], ids[3]] },
        ],
    });
    let mut game = game;
    game.format = crate::domain::game::GameFormat::Umbriago(settings);
    game.validate().unwrap();

    let input_for = |hole: u8| HoleInput {
        hole,
        scores: played(&game, &[3, 5, 5, 5]),
        events: FormatEvents::Umbriago { events: Vec::new() },
        doubles: Vec::new(),
    };

    // hole 1: roster[0] carries side A
    let mut results = Vec::new();
    for hole in 1..=6 {
        results.push(compute_hole(&game, &[], &results, &input_for(hole)).unwrap());
    }
    assert!(results[0].points.differential() > 0);

    // hole 7: same card, but roster[0] now plays for side B
    let hole7 = compute_hole(&game, &[], &results, &input_for(7)).unwrap();
    let HolePoints::SideContest { a_points, b_points } = hole7.points else {
        panic!("umbriago yields side contests");
    };
    assert!(b_points > a_points, "attribution must follow the rotation");
}
