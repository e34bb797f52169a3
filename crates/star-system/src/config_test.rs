use view_scaling::{RenderThresholds, ScalingError, ScalingTable, ViewMode};

use crate::config::{DEFAULT_ORBIT_SEGMENTS, ViewConfig};
use crate::error::SystemError;

#[test]
fn empty_json_is_the_default_config() {
    let config = ViewConfig::from_json("{}").unwrap();
    assert_eq!(config, ViewConfig::default());
    assert_eq!(config.orbit_segments, DEFAULT_ORBIT_SEGMENTS);
    assert_eq!(config.scaling, ScalingTable::default());
    assert_eq!(config.thresholds, RenderThresholds::default());
}

#[test]
fn sections_override_independently() {
    let config = ViewConfig::from_json(
        r#"{"orbitSegments": 32, "thresholds": {"gridSpacingFloor": 0.01}}"#,
    )
    .unwrap();

    assert_eq!(config.orbit_segments, 32);
    assert_eq!(config.thresholds.grid_spacing_floor, 0.01);
    assert_eq!(config.thresholds.depth_threshold_floor, 0.0001);
    assert_eq!(config.scaling.get(ViewMode::Profile).orbital_scale, 20.0);
}

#[test]
fn invalid_scales_are_rejected() {
    let result = ViewConfig::from_json(
        r#"{"scaling": {"navigational": {"starScale": -1.0, "planetScale": 40.0,
            "moonScale": 60.0, "orbitalScale": 10.0, "starShaderScale": 0.5}}}"#,
    );
    assert!(matches!(result, Err(SystemError::Scaling(_))));

    assert!(matches!(
        ViewConfig::from_json("not json"),
        Err(SystemError::Parse(_))
    ));
}

#[test]
fn invalid_thresholds_are_rejected() {
    let result = ViewConfig::from_json(r#"{"thresholds": {"minDistanceRatio": 0.0}}"#);
    assert!(matches!(
        result,
        Err(SystemError::Scaling(ScalingError::InvalidThreshold {
            field: "minDistanceRatio",
            ..
        }))
    ));

    let result = ViewConfig::from_json(r#"{"thresholds": {"nearRatio": 0.6}}"#);
    assert!(matches!(
        result,
        Err(SystemError::Scaling(ScalingError::NearRatioTooLarge { .. }))
    ));
}
