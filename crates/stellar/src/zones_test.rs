use approx::assert_relative_eq;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

use crate::error::StellarError;
use crate::zones::{
    HabitableZone, StellarHost, ZoneKind, habitable_zone_inner, habitable_zone_outer, snow_line,
    sublimation_radius, zones_for_luminosity,
};

#[test]
fn solar_zone_matches_reference_values() {
    let hz = HabitableZone::from_luminosity(1.0);
    assert_relative_eq!(hz.inner_edge, 0.95);
    assert_relative_eq!(hz.outer_edge, 1.37);
    assert!(hz.contains(1.0), "Earth should be inside the solar habitable zone");
    assert!(!hz.contains(1.52), "Mars should be outside the solar habitable zone");
    assert_relative_eq!(snow_line(1.0), 2.7);
}

#[test]
fn outer_edge_exceeds_inner_edge_for_any_luminosity() {
    let mut rng = ChaChaRng::seed_from_u64(42);

    for _ in 0..500 {
        let luminosity = 10.0_f64.powf(rng.random_range(-4.0..6.0));
        let inner = habitable_zone_inner(luminosity);
        let outer = habitable_zone_outer(luminosity);

        assert!(
            outer > inner,
            "L = {luminosity}: outer {outer} should exceed inner {inner}"
        );
        assert!(sublimation_radius(luminosity) < inner);
        assert!(snow_line(luminosity) > outer);
    }
}

#[test]
fn zones_scale_with_square_root_of_luminosity() {
    let mut rng = ChaChaRng::seed_from_u64(7);

    for _ in 0..200 {
        let luminosity = 10.0_f64.powf(rng.random_range(-3.0..4.0));

        assert_relative_eq!(
            habitable_zone_inner(4.0 * luminosity),
            2.0 * habitable_zone_inner(luminosity),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            habitable_zone_outer(100.0 * luminosity),
            10.0 * habitable_zone_outer(luminosity),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            snow_line(100.0 * luminosity),
            10.0 * snow_line(luminosity),
            max_relative = 1e-12
        );
    }
}

#[test]
fn zone_list_is_ordered_and_well_formed() {
    let zones = zones_for_luminosity(1.0).unwrap();
    let kinds: Vec<_> = zones.iter().map(|z| z.kind).collect();
    assert_eq!(
        kinds,
        vec![ZoneKind::Sublimation, ZoneKind::Habitable, ZoneKind::Frostline]
    );

    let habitable = zones[1];
    let outer = habitable.outer_radius.expect("habitable zone is a band");
    assert!(habitable.inner_radius < outer);
    assert!(zones[0].outer_radius.is_none());
    assert!(zones[2].outer_radius.is_none());

    for pair in zones.windows(2) {
        assert!(pair[0].inner_radius < pair[1].inner_radius);
    }
}

#[test]
fn zone_list_rejects_invalid_luminosity() {
    for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            zones_for_luminosity(bad),
            Err(StellarError::InvalidLuminosity(_))
        ));
    }
}

#[test]
fn scaled_zone_keeps_kind_and_shape() {
    let zone = zones_for_luminosity(1.0).unwrap()[1].scaled(10.0);
    assert_eq!(zone.kind, ZoneKind::Habitable);
    assert_relative_eq!(zone.inner_radius, 9.5);
    assert_relative_eq!(zone.outer_radius.unwrap(), 13.7);
}

#[test]
fn binary_host_uses_combined_luminosity() {
    let single = StellarHost::single("G2");
    let binary = StellarHost::binary("G2", "G2");

    assert_relative_eq!(binary.luminosity().unwrap(), 2.0);

    // Doubling luminosity widens the zone by √2
    let hz_single = single.habitable_zone().unwrap();
    let hz_binary = binary.habitable_zone().unwrap();
    assert_relative_eq!(
        hz_binary.inner_edge,
        hz_single.inner_edge * 2.0_f64.sqrt(),
        max_relative = 1e-12
    );
    assert_relative_eq!(binary.snow_line().unwrap(), 2.7 * 2.0_f64.sqrt());
}

#[test]
fn host_with_unknown_component_fails() {
    let host = StellarHost::binary("K1", "W9");
    assert_eq!(
        host.zones(),
        Err(StellarError::UnknownSpectralType("W9".to_string()))
    );
}

#[test]
fn zone_result_serializes_with_type_tag() {
    let zone = zones_for_luminosity(1.0).unwrap()[2];
    let json = serde_json::to_value(zone).unwrap();

    assert_eq!(json["type"], "frostline");
    assert_eq!(json["innerRadius"], 2.7);
    assert!(json.get("outerRadius").is_none());

    let host: StellarHost =
        serde_json::from_str(r#"{"type":"binary","primary":"G2","secondary":"M4"}"#).unwrap();
    assert_eq!(host, StellarHost::binary("G2", "M4"));
}
