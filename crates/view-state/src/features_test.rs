use crate::error::StateError;
use crate::features::{Feature, FeatureFlags};

#[test]
fn initial_flags() {
    let flags = FeatureFlags::default();
    let enabled: Vec<Feature> = flags.enabled().collect();
    assert_eq!(
        enabled,
        vec![Feature::ScientificInfo, Feature::EducationalContent]
    );
}

#[test]
fn toggling_twice_restores() {
    let flags = FeatureFlags::default();
    for feature in Feature::ALL {
        let once = flags.toggled(feature);
        assert_ne!(once.get(feature), flags.get(feature));
        assert_eq!(once.toggled(feature), flags);
    }
}

#[test]
fn with_only_touches_one_flag() {
    let flags = FeatureFlags::default().with(Feature::JumpPointInfo, true);
    assert!(flags.jump_point_info);
    assert!(flags.scientific_info);
    assert!(!flags.game_info);
}

#[test]
fn feature_names_round_trip() {
    for feature in Feature::ALL {
        assert_eq!(feature.to_string().parse::<Feature>(), Ok(feature));
    }
    assert_eq!("profileInfo".parse::<Feature>(), Ok(Feature::GameInfo));
    assert_eq!(
        "warpDrive".parse::<Feature>(),
        Err(StateError::UnknownFeature("warpDrive".to_string()))
    );
}

#[test]
fn profile_info_alias_deserializes() {
    let feature: Feature = serde_json::from_str("\"profileInfo\"").unwrap();
    assert_eq!(feature, Feature::GameInfo);
    assert_eq!(serde_json::to_string(&feature).unwrap(), "\"gameInfo\"");
}
