use super::*;
use crate::locomotion::{CurveKey, EasingCurve, LocomotionTuning};
use crate::survival::SurvivalTuning;

const SHIPPED_TUNING: &str = include_str!("../../assets/data/player_tuning.ron");

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_shipped_tuning_parses_and_validates() {
    let file = parse_tuning(SHIPPED_TUNING, "player_tuning.ron")
        .unwrap_or_else(|e| panic!("{e}"));

    assert_eq!(file.schema_version, TUNING_SCHEMA_VERSION);
    assert_eq!(file.survival.max_lives, 3);
    assert!(file.locomotion.ground_check.is_some());
    assert!(matches!(
        file.locomotion.climb_speed_curve,
        EasingCurve::Keyframes(_)
    ));

    let errors = validate_tuning(&file);
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
}

#[test]
fn test_omitted_sections_fall_back_to_defaults() {
    let file = parse_tuning("(schema_version: 1, survival: (max_lives: 5))", "partial.ron")
        .unwrap_or_else(|e| panic!("{e}"));

    assert_eq!(file.survival.max_lives, 5);
    assert_eq!(
        file.survival.stun_duration,
        SurvivalTuning::default().stun_duration
    );
    assert_eq!(file.locomotion, LocomotionTuning::default());
}

#[test]
fn test_ground_check_can_be_disabled() {
    let file = parse_tuning("(locomotion: (ground_check: None))", "no_ground_check.ron")
        .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(file.locomotion.ground_check, None);
}

#[test]
fn test_parse_error_names_the_file() {
    let Err(error) = parse_tuning("(locomotion: (jump_impulse: \"high\"))", "broken.ron") else {
        panic!("expected a parse error");
    };
    assert_eq!(error.file, "broken.ron");
    assert!(error.to_string().starts_with("Failed to load broken.ron"));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let Err(error) = load_tuning_file(std::path::Path::new("does/not/exist.ron")) else {
        panic!("expected an io error");
    };
    assert!(error.message.starts_with("IO error"));
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_defaults_are_valid() {
    assert!(validate_tuning(&TuningFile::default()).is_empty());
}

#[test]
fn test_out_of_range_values_are_reported() {
    let mut file = TuningFile::default();
    file.locomotion.body_mass = 0.0;
    file.locomotion.glide_vertical_decay = 1.5;
    file.survival.max_lives = 0;
    file.camera.default_zoom = -1.0;

    let fields: Vec<_> = validate_tuning(&file)
        .into_iter()
        .map(|error| (error.section, error.field))
        .collect();

    assert_eq!(
        fields,
        vec![
            ("locomotion", "body_mass"),
            ("locomotion", "glide_vertical_decay"),
            ("survival", "max_lives"),
            ("camera", "default_zoom"),
        ]
    );
}

#[test]
fn test_schema_mismatch_is_reported() {
    let file = TuningFile {
        schema_version: TUNING_SCHEMA_VERSION + 1,
        ..TuningFile::default()
    };
    let errors = validate_tuning(&file);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "schema_version");
}

#[test]
fn test_unsorted_keyframes_are_reported() {
    let mut file = TuningFile::default();
    file.locomotion.climb_speed_curve = EasingCurve::Keyframes(vec![
        CurveKey {
            time: 0.8,
            value: 0.5,
        },
        CurveKey {
            time: 0.2,
            value: 1.0,
        },
    ]);

    let errors = validate_tuning(&file);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "climb_speed_curve");
}

#[test]
fn test_attach_reach_must_cover_climb_reach() {
    let mut file = TuningFile::default();
    file.locomotion.attach_reach = 2.0;
    let errors = validate_tuning(&file);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].to_string(), "locomotion.attach_reach: must be >= climb_reach (6), got 2");
}

#[test]
fn test_invulnerability_must_outlast_stun() {
    let mut file = TuningFile::default();
    file.survival.stun_duration = 2.0;
    file.survival.invulnerability_duration = 1.0;
    let errors = validate_tuning(&file);
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].to_string(),
        "survival.invulnerability_duration: must be >= stun_duration (2), got 1"
    );

    file.survival.invulnerability_duration = 2.0;
    assert!(validate_tuning(&file).is_empty());
}
