use rosu_skill_pp::{
    difficulty::evaluators::{DiscIntegral, SquareApproximation},
    Calibration, Difficulty, Note, NoteSequence, Performance,
};

use crate::common::assert_eq_float;

mod common;

#[test]
fn stacked_notes_have_no_aim() {
    let map = common::stacked(100, 200);
    let attrs = Difficulty::new().calculate(&map);

    assert!(attrs.is_aim_attainable());
    assert!(attrs.aim < 1e-3, "{}", attrs.aim);
}

#[test]
fn stacked_notes_reach_steady_tap_strain() {
    let map = common::stacked(100, 200);
    let attrs = Difficulty::new().calculate(&map);

    let q = f64::exp(-0.2);
    let steady_state = q / (200.0 * (1.0 - q));

    assert_eq_float(attrs.max_strain, steady_state, 1e-9);
    assert_eq_float(attrs.tap, 14.5 * steady_state.sqrt(), 1e-6);
    assert_eq_float(attrs.stars, attrs.tap, 1e-6);
}

#[test]
fn stacked_notes_full_combo_has_best_accuracy() {
    let map = common::stacked(100, 200);

    let fc = Performance::new(&map).calculate();
    let hundred = Performance::new(&map).n100(1).calculate();
    let fifty = Performance::new(&map).n50(1).calculate();

    assert!(fc.deviation.is_finite());
    assert!(fc.pp_acc > hundred.pp_acc, "{} <= {}", fc.pp_acc, hundred.pp_acc);
    assert!(fc.pp_acc > fifty.pp_acc, "{} <= {}", fc.pp_acc, fifty.pp_acc);
}

#[test]
fn empty_map() {
    let attrs = Difficulty::new().calculate(&NoteSequence::default());

    assert!(attrs.is_aim_attainable());
    assert_eq!(attrs.n_objects, 0);
    assert_eq_float(attrs.aim, 0.0, 0.0);
    assert_eq_float(attrs.tap, 0.0, 0.0);
    assert_eq_float(attrs.stars, 0.0, 0.0);
}

#[test]
fn single_note() {
    let map = NoteSequence::new(vec![Note::circle(256, 192, 0)]);
    let attrs = Difficulty::new().calculate(&map);

    assert_eq_float(attrs.aim, 0.0, 0.0);
    assert_eq_float(attrs.tap, 0.0, 0.0);
}

#[test]
fn test_map_attributes() {
    let attrs = Difficulty::new().calculate(common::test_map());

    assert!(attrs.is_aim_attainable());
    assert!(attrs.aim > 0.0);
    assert!(attrs.tap > 0.0);
    assert!(attrs.stars >= attrs.aim.max(attrs.tap));
    assert_eq!(attrs.n_objects, 47);
    assert_eq!(attrs.n_circles, 41);
    assert_eq_float(attrs.clock_rate, 1.0, 0.0);
}

#[test]
fn hardrock_is_harder() {
    let map = common::test_map();
    let nm = Difficulty::new().calculate(map);
    let hr = Difficulty::new().mods(16).calculate(map);

    assert!(hr.aim > nm.aim);
    assert!(hr.tap >= nm.tap);
    assert_eq_float(hr.cs, 5.2, 1e-6);
    assert_eq_float(hr.od, 10.0, 1e-6);
}

#[test]
fn easy_is_easier() {
    let map = common::test_map();
    let nm = Difficulty::new().calculate(map);
    let ez = Difficulty::new().mods(2).calculate(map);

    assert!(ez.aim < nm.aim);
    assert_eq_float(ez.cs, 2.0, 1e-6);
}

#[test]
fn doubletime_raises_tap() {
    let map = common::test_map();
    let nm = Difficulty::new().calculate(map);
    let dt = Difficulty::new().mods(64).calculate(map);
    let ht = Difficulty::new().mods(256).calculate(map);

    assert!(dt.tap > nm.tap);
    assert!(ht.tap < nm.tap);
    assert_eq_float(dt.clock_rate, 1.5, 1e-12);
    assert_eq_float(ht.clock_rate, 0.75, 1e-12);
}

#[test]
fn custom_clock_rate_matches_doubletime() {
    let map = common::test_map();
    let dt = Difficulty::new().mods(64).calculate(map);
    let custom = Difficulty::new().clock_rate(1.5).calculate(map);

    assert_eq_float(custom.tap, dt.tap, 1e-12);
    assert_eq_float(custom.aim, dt.aim, 1e-12);
}

#[test]
fn more_misses_lower_aim() {
    let map = common::jumps(120, 150, 300);

    let ratings: Vec<_> = [0, 2, 10, 50]
        .into_iter()
        .map(|misses| Difficulty::new().misses(misses).calculate(&map).aim)
        .collect();

    assert!(ratings.windows(2).all(|pair| pair[0] >= pair[1]), "{ratings:?}");
}

#[test]
fn misses_covering_every_note() {
    let map = common::jumps(40, 150, 300);
    let attrs = Difficulty::new().misses(40).calculate(&map);

    assert_eq_float(attrs.aim, 0.0, 0.0);
}

#[test]
fn both_hit_probabilities() {
    let map = common::jumps(80, 180, 250);

    let disc = Difficulty::new()
        .hit_probability::<DiscIntegral>()
        .calculate(&map);

    let square = Difficulty::new()
        .hit_probability::<SquareApproximation>()
        .calculate(&map);

    for attrs in [&disc, &square] {
        assert!(attrs.is_aim_attainable());
        assert!(attrs.aim.is_finite() && attrs.aim > 0.0);
    }

    assert_eq_float(disc.tap, square.tap, 0.0);
}

#[test]
fn calibration_scales_linearly() {
    let map = common::jumps(60, 200, 200);
    let calibration = Calibration {
        aim_scaling: 48.0,
        tap_scaling: 29.0,
        ..Calibration::default()
    };

    let default = Difficulty::new().calculate(&map);
    let doubled = Difficulty::new().calibration(calibration).calculate(&map);

    assert_eq_float(doubled.aim, 2.0 * default.aim, 1e-9);
    assert_eq_float(doubled.tap, 2.0 * default.tap, 1e-9);
}

#[test]
fn wider_jumps_need_more_aim() {
    let narrow = Difficulty::new().calculate(&common::jumps(60, 200, 100));
    let wide = Difficulty::new().calculate(&common::jumps(60, 200, 350));

    assert!(wide.aim > narrow.aim);
    assert_eq_float(wide.tap, narrow.tap, 1e-12);
}
