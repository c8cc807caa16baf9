use rosu_skill_pp::{ConvertError, Note, NoteSequence};

use crate::common::assert_eq_float;

mod common;

#[test]
fn osu() {
    let map = common::test_map();

    assert_eq!(map.title, "Skill Test");
    assert_eq!(map.artist, "rosu");
    assert_eq!(map.creator, "tester");
    assert_eq!(map.version, "Jumps");
    assert_eq_float(map.cs, 4.0, 1e-6);
    assert_eq_float(map.ar, 9.0, 1e-6);
    assert_eq_float(map.od, 8.0, 1e-6);
    assert_eq_float(map.slider_tick_rate, 1.0, 1e-6);
    assert_eq!(map.n_objects(), 47);
    assert_eq!(map.n_circles(), 41);
    assert_eq!(map.n_sliders(), 6);
    assert!(map.is_time_ascending());
}

#[test]
fn notes() {
    let map = common::test_map();

    assert_eq!(map.notes[0], Note::circle(64, 96, 1000));
    assert_eq!(map.notes[6], Note::slider(320, 288, 2200));
    assert_eq!(map.notes[7], Note::circle(448, 288, 2600));
}

#[test]
fn spinners_are_skipped() {
    let map = common::test_map();
    let last = map.notes.last().unwrap();

    assert_eq!(*last, Note::circle(320, 288, 11400));
}

#[test]
fn from_bytes_matches_from_path() {
    let bytes = std::fs::read(common::TEST_MAP).unwrap();
    let map = NoteSequence::from_bytes(&bytes).unwrap();

    assert_eq!(&map, common::test_map());
}

#[test]
fn from_str() {
    let content = std::fs::read_to_string(common::TEST_MAP).unwrap();
    let map: NoteSequence = content.parse().unwrap();

    assert_eq!(&map, common::test_map());
}

#[test]
fn rejects_other_modes() {
    const MANIA: &[u8] = b"osu file format v14

[General]
Mode: 3

[Difficulty]
CircleSize:4
OverallDifficulty:8

[HitObjects]
64,192,1000,1,0,0:0:0:0:
";

    let err = NoteSequence::from_bytes(MANIA).unwrap_err();

    assert!(matches!(err, ConvertError::IncompatibleMode(_)), "{err:?}");
}

#[test]
fn missing_file() {
    let err = NoteSequence::from_path("./resources/missing.osu").unwrap_err();

    assert!(matches!(err, ConvertError::Io(_)), "{err:?}");
}
