use bevy::prelude::*;

use super::*;

#[test]
fn test_fatigue_bar_starts_green_and_ends_red() {
    let calm = fatigue_bar_color(0.0).to_srgba();
    let spent = fatigue_bar_color(1.0).to_srgba();

    assert!(calm.green > calm.red);
    assert!(spent.red > spent.green);
}

#[test]
fn test_fatigue_bar_color_is_clamped() {
    assert_eq!(fatigue_bar_color(-3.0), fatigue_bar_color(0.0));
    assert_eq!(fatigue_bar_color(7.0), fatigue_bar_color(1.0));
}

#[test]
fn test_fatigue_bar_color_is_continuous_at_midpoint() {
    let below = fatigue_bar_color(0.4999).to_srgba();
    let above = fatigue_bar_color(0.5).to_srgba();
    assert!((below.red - above.red).abs() < 1e-3);
    assert!((below.green - above.green).abs() < 1e-3);
    assert!((below.blue - above.blue).abs() < 1e-3);
}
