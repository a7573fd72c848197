use bevy::prelude::*;

use super::*;
use crate::locomotion::{CameraBridge, ZoomReason};

// ============================================================================
// Forced zoom arbitration
// ============================================================================

#[test]
fn test_forced_zoom_defaults_without_requests() {
    let zoom = ForcedZoom::new(1.0);
    assert_eq!(zoom.target_zoom(), 1.0);
    assert!(zoom.active().is_none());
}

#[test]
fn test_forced_zoom_last_request_wins() {
    let mut zoom = ForcedZoom::new(1.0);
    zoom.start_forced_zoom(1.2, ZoomReason::Glide);
    zoom.start_forced_zoom(1.5, ZoomReason::Carrier);
    assert_eq!(zoom.target_zoom(), 1.5);

    zoom.start_forced_zoom(1.3, ZoomReason::Carrier);
    assert_eq!(zoom.target_zoom(), 1.3);
}

#[test]
fn test_ending_inactive_reason_keeps_active_zoom() {
    let mut zoom = ForcedZoom::new(1.0);
    zoom.start_forced_zoom(1.2, ZoomReason::Glide);
    zoom.start_forced_zoom(1.4, ZoomReason::Carrier);

    zoom.end_forced_zoom(ZoomReason::Glide);
    assert_eq!(zoom.target_zoom(), 1.4);

    zoom.end_forced_zoom(ZoomReason::Carrier);
    assert_eq!(zoom.target_zoom(), 1.0);
}

#[test]
fn test_degenerate_zoom_amount_is_ignored() {
    let mut zoom = ForcedZoom::new(1.0);
    zoom.start_forced_zoom(0.0, ZoomReason::SideSpeed);
    zoom.start_forced_zoom(f32::NAN, ZoomReason::SideSpeed);
    assert!(zoom.active().is_none());
}

// ============================================================================
// Shake
// ============================================================================

#[test]
fn test_shake_is_zero_without_strength() {
    assert_eq!(shake_offset(0.0, 6.0, 30.0, 1.25), Vec2::ZERO);
}

#[test]
fn test_shake_stays_within_amplitude() {
    for step in 0..50 {
        let offset = shake_offset(0.5, 6.0, 30.0, step as f32 * 0.013);
        assert!(offset.x.abs() <= 3.0 + 1e-4);
        assert!(offset.y.abs() <= 3.0 + 1e-4);
    }
}
