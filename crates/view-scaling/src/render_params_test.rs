use approx::assert_relative_eq;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

use crate::error::ScalingError;
use crate::render_params::{NEAR_PLANE_FLOOR, RenderThresholds, derive};

#[test]
fn grid_and_depth_floors_protect_tiny_objects() {
    let params = derive(0.0001, 1.0);
    assert_eq!(params.grid_spacing, 0.001);
    assert_eq!(params.depth_threshold, 0.0001);
}

#[test]
fn grid_and_depth_scale_with_normal_objects() {
    let params = derive(1.0, 10.0);
    assert_eq!(params.grid_spacing, 2.0);
    assert_eq!(params.depth_threshold, 0.65);
}

#[test]
fn tiny_regime_uses_tighter_ratios() {
    let params = derive(0.0001, 0.0004);
    assert_relative_eq!(params.near_plane, 0.000004, max_relative = 1e-12);
    assert_relative_eq!(params.min_camera_distance, 0.00004, max_relative = 1e-12);
}

#[test]
fn normal_regime_ratios() {
    let params = derive(1.0, 10.0);
    assert_relative_eq!(params.near_plane, 1.0, max_relative = 1e-12);
    assert_relative_eq!(params.min_camera_distance, 5.0, max_relative = 1e-12);
}

#[test]
fn regime_switches_at_threshold() {
    let thresholds = RenderThresholds::default();
    assert!(thresholds.is_tiny(0.000_999));
    assert!(!thresholds.is_tiny(0.001));

    let at = derive(0.0, 0.001);
    assert_relative_eq!(at.min_camera_distance, 0.0005, max_relative = 1e-12);
}

#[test]
fn near_plane_stays_inside_min_distance_across_scales() {
    // 1e-6 .. 1e3 in quarter decades
    for step in 0..=36 {
        let distance = 10f64.powf(-6.0 + step as f64 * 0.25);
        let params = derive(distance * 0.1, distance);

        assert!(
            params.near_plane < params.min_camera_distance,
            "near {} >= min {} at distance {distance}",
            params.near_plane,
            params.min_camera_distance
        );
        assert!(params.min_camera_distance < distance);
        assert!(params.near_plane > 0.0);
    }
}

#[test]
fn near_plane_invariant_holds_for_random_distances() {
    let mut rng = ChaChaRng::seed_from_u64(7);
    for _ in 0..1_000 {
        let distance = 10f64.powf(rng.random_range(-12.0..4.0));
        let radius = 10f64.powf(rng.random_range(-8.0..2.0));
        let params = derive(radius, distance);

        assert!(params.near_plane < params.min_camera_distance);
        assert!(params.near_plane < distance);
        assert!(params.grid_spacing >= 0.001);
        assert!(params.depth_threshold >= 0.0001);
    }
}

#[test]
fn floor_applies_until_it_would_cross_min_distance() {
    let params = derive(0.0, 1e-7);
    // 1% of 1e-7 is below the floor, but the floor would exceed half of 1e-8
    assert_relative_eq!(params.near_plane, 5e-9, max_relative = 1e-12);

    let params = derive(0.0, 5e-6);
    assert!(params.near_plane >= NEAR_PLANE_FLOOR);
}

#[test]
fn thresholds_deserialize_partially() {
    let thresholds: RenderThresholds =
        serde_json::from_str(r#"{"nearPlaneFloor": 1e-5, "gridSpacingFloor": 0.01}"#).unwrap();

    assert_eq!(thresholds.near_plane_floor, 1e-5);
    assert_eq!(thresholds.grid_spacing_floor, 0.01);
    assert_eq!(thresholds.tiny_near_ratio, 0.01);

    let params = thresholds.derive(0.0001, 0.0004);
    assert_eq!(params.near_plane, 1e-5);
    assert_eq!(params.grid_spacing, 0.01);
    assert!(params.near_plane < params.min_camera_distance);
}

#[test]
fn default_thresholds_validate() {
    assert!(RenderThresholds::default().validate().is_ok());
}

#[test]
fn non_positive_ratios_are_rejected() {
    let thresholds = RenderThresholds {
        min_distance_ratio: 0.0,
        ..RenderThresholds::default()
    };
    assert!(matches!(
        thresholds.validate(),
        Err(ScalingError::InvalidThreshold { field: "minDistanceRatio", value }) if value == 0.0
    ));

    let thresholds = RenderThresholds {
        near_plane_floor: f64::NAN,
        ..RenderThresholds::default()
    };
    assert!(matches!(
        thresholds.validate(),
        Err(ScalingError::InvalidThreshold { field: "nearPlaneFloor", .. })
    ));
}

#[test]
fn near_ratio_must_stay_below_min_distance_ratio() {
    let thresholds = RenderThresholds {
        tiny_near_ratio: 0.2,
        ..RenderThresholds::default()
    };
    assert!(matches!(
        thresholds.validate(),
        Err(ScalingError::NearRatioTooLarge {
            near_field: "tinyNearRatio",
            min_field: "tinyMinDistanceRatio",
            ..
        })
    ));
}
