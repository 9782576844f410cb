use crate::domain::baseline::Lie;
use crate::domain::strokes_gained::{
    record_shot, strokes_gained, Shot, ShotOutcome, ShotPosition, ShotRecord,
};

fn shot(start: (Lie, f64), end: (Lie, f64)) -> Shot {
    Shot {
        start: ShotPosition { lie: start.0, distance: start.1 },
        outcome: ShotOutcome::Finished(ShotPosition { lie: end.0, distance: end.1 }),
    }
}

#[test]
fn holing_a_putt_gains_its_full_expectation() {
    let putt = Shot {
        start: ShotPosition { lie: Lie::Green, distance: 8.0 },
        outcome: ShotOutcome::Holed,
    };
    // 8 ft expects 1.50 strokes; holing it banks the half stroke
    let gained = strokes_gained(&putt).unwrap().unwrap();
    assert!((gained - 0.50).abs() < 1e-9);
}

#[test]
fn a_good_drive_gains_against_the_tee_baseline() {
    let drive = shot((Lie::Tee, 400.0), (Lie::Fairway, 140.0));
    // 3.99 off the tee, 2.91 left: +0.08
    let gained = strokes_gained(&drive).unwrap().unwrap();
    assert!((gained - 0.08).abs() < 1e-9);
}

#[test]
fn a_chunked_wedge_loses_strokes() {
    let wedge = shot((Lie::Fairway, 100.0), (Lie::Rough, 60.0));
    // 2.80 before, 2.91 after: the shot cost more than a stroke
    let gained = strokes_gained(&wedge).unwrap().unwrap();
    assert!(gained < 0.0);
    assert!((gained - (2.80 - 2.91 - 1.0)).abs() < 1e-9);
}

#[test]
fn monster_putts_clamp_to_the_table_boundary()  {
    let lag = Shot {
        start: ShotPosition { lie: Lie::Green, distance: 120.0 },
        outcome: ShotOutcome::Finished(ShotPosition { lie: Lie::Green, distance: 3.0 }),
    };
    // 120 ft clamps to the 90 ft row (2.40); no extrapolation
    let gained = strokes_gained(&lag).unwrap().unwrap();
    assert!((gained - (2.40 - 1.04 - 1.0)).abs() < 1e-9);
}

#[test]
fn out_of_bounds_has_no_strokes_gained_value() {
    let ob = Shot {
        start: ShotPosition { lie: Lie::Tee, distance: 400.0 },
        outcome: ShotOutcome::OutOfBounds,
    };
    assert_eq!(strokes_gained(&ob).unwrap(), None);
}

#[test]
fn out_of_bounds_expands_to_the_stroke_and_distance_pair() {
    let ob = Shot {
        start: ShotPosition { lie: Lie::Tee, distance: 400.0 },
        outcome: ShotOutcome::OutOfBounds,
    };
    let records = record_shot(&ob).unwrap();
    assert_eq!(records.len(), 2);
    assert!(matches!(records[0], ShotRecord::OutOfBounds { .. }));
    let ShotRecord::PenaltyReplay { from } = records[1] else {
        panic!("second event is the penalty replay");
    };
    // the replay plays from the original position
    assert_eq!(from.lie, Lie::Tee);
    assert_eq!(from.distance, 400.0);
}

#[test]
fn normal_shots_expand_to_a_single_scored_record() {
    let drive = shot((Lie::Tee, 400.0), (Lie::Fairway, 140.0));
    let records = record_shot(&drive).unwrap();
    assert_eq!(records.len(), 1);
    let ShotRecord::Scored { strokes_gained: gained, .. } = records[0] else {
        panic!("normal shots score directly");
    };
    assert!((gained - 0.08).abs() < 1e-9);
}

#[test]
fn invalid_distances_are_rejected() {
    let shot = Shot {
        start: ShotPosition { lie: Lie::Fairway, distance: -10.0 },
        outcome: ShotOutcome::Holed,
    };
    assert!(strokes_gained(&shot).is_err());
}
