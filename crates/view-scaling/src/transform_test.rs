use approx::assert_relative_eq;
use nalgebra::Point3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

use crate::modes::DisplayMode;
use crate::transform::{
    OrbitSlot, base_spacing, equidistant_radius, profile_focus_point, system_max_realistic_radius,
    transform,
};

/// Raw positions of a loosely spaced system (AU)
fn raw_system() -> Vec<Point3<f64>> {
    vec![
        Point3::new(0.39, 0.0, 0.0),
        Point3::new(0.0, 0.01, 0.72),
        Point3::new(-1.0, 0.0, 0.0),
        Point3::new(1.1, 0.02, -1.1),
        Point3::new(0.0, 0.0, 5.2),
        Point3::new(9.5, -0.3, 0.0),
    ]
}

fn extents(raws: &[Point3<f64>]) -> impl Iterator<Item = f64> + '_ {
    raws.iter().map(|p| p.coords.norm())
}

fn render_system(mode: DisplayMode, orbital_scale: f64) -> Vec<Point3<f64>> {
    let raws = raw_system();
    let max_radius = system_max_realistic_radius(extents(&raws), orbital_scale);
    raws.iter()
        .enumerate()
        .map(|(i, raw)| {
            transform(raw, OrbitSlot::new(i, raws.len()), mode, orbital_scale, max_radius)
        })
        .collect()
}

#[test]
fn realistic_mode_scales_raw_positions() {
    let raw = Point3::new(1.0, -2.0, 3.0);
    let p = transform(&raw, OrbitSlot::new(0, 1), DisplayMode::Realistic, 10.0, 1.0);
    assert_eq!(p, Point3::new(10.0, -20.0, 30.0));
}

#[test]
fn navigational_spacing_is_constant() {
    let positions = render_system(DisplayMode::Navigational, 10.0);
    let radii: Vec<f64> = positions.iter().map(|p| p.coords.norm()).collect();

    let spacing = radii[0];
    for pair in radii.windows(2) {
        assert_relative_eq!(pair[1] - pair[0], spacing, max_relative = 1e-9);
    }
}

#[test]
fn navigational_footprint_matches_realistic() {
    for orbital_scale in [1.0, 10.0, 20.0, 0.01] {
        let realistic = render_system(DisplayMode::Realistic, orbital_scale);
        let navigational = render_system(DisplayMode::Navigational, orbital_scale);

        let outer_realistic = realistic
            .iter()
            .map(|p| p.coords.norm())
            .fold(0.0, f64::max);
        let outer_navigational = navigational
            .iter()
            .map(|p| p.coords.norm())
            .fold(0.0, f64::max);

        assert!((outer_navigational - outer_realistic).abs() < 1e-5);
    }
}

#[test]
fn navigational_keeps_direction() {
    let raw = Point3::new(0.0, 3.0, 4.0);
    let p = transform(&raw, OrbitSlot::new(1, 2), DisplayMode::Navigational, 2.0, 0.0);

    // No usable footprint: unscaled slot radius 1.0·2
    assert_relative_eq!(p.coords.norm(), 2.0, epsilon = 1e-12);
    assert_relative_eq!(p.y / p.z, 0.75, epsilon = 1e-12);
}

#[test]
fn body_at_origin_falls_back_to_x_axis() {
    let p = transform(
        &Point3::origin(),
        OrbitSlot::new(0, 1),
        DisplayMode::Navigational,
        4.0,
        0.0,
    );
    assert_eq!(p, Point3::new(2.0, 0.0, 0.0));
}

#[test]
fn degenerate_slots_stay_finite_and_positive() {
    let spacing = base_spacing(10.0);
    assert_eq!(spacing, 5.0);

    assert_eq!(equidistant_radius(OrbitSlot::new(0, 0), 10.0, 50.0), 5.0);
    assert_eq!(equidistant_radius(OrbitSlot::new(2, 3), 10.0, f64::NAN), 15.0);
    assert_eq!(equidistant_radius(OrbitSlot::new(2, 3), 10.0, -1.0), 15.0);

    assert_eq!(system_max_realistic_radius(Vec::<f64>::new(), 10.0), 0.0);
    assert_eq!(system_max_realistic_radius([2.0, 0.5], 10.0), 20.0);
}

#[test]
fn profile_lays_slots_on_a_lane() {
    let positions = render_system(DisplayMode::Profile, 20.0);
    let navigational = render_system(DisplayMode::Navigational, 20.0);

    for (profile, nav) in positions.iter().zip(&navigational) {
        assert_eq!(profile.y, 0.0);
        assert_eq!(profile.z, 0.0);
        assert_relative_eq!(profile.x, nav.coords.norm() + 20.0, max_relative = 1e-12);
    }
}

#[test]
fn profile_focus_matches_placement() {
    let raws = raw_system();
    let max_radius = system_max_realistic_radius(extents(&raws), 20.0);

    for (i, raw) in raws.iter().enumerate() {
        let slot = OrbitSlot::new(i, raws.len());
        let placed = transform(raw, slot, DisplayMode::Profile, 20.0, max_radius);
        assert_eq!(profile_focus_point(slot, 20.0, max_radius), placed);
    }
}

#[test]
fn equidistant_spacing_is_positive_and_non_decreasing() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    for _ in 0..200 {
        let count = rng.random_range(1..20);
        let orbital_scale = 10f64.powf(rng.random_range(-3.0..2.0));
        let max_radius = 10f64.powf(rng.random_range(-4.0..2.0));

        let radii: Vec<f64> = (0..count)
            .map(|i| equidistant_radius(OrbitSlot::new(i, count), orbital_scale, max_radius))
            .collect();

        assert!(radii[0] > 0.0);
        let gaps: Vec<f64> = radii.windows(2).map(|w| w[1] - w[0]).collect();
        for gap in &gaps {
            assert!(*gap > 0.0);
        }
        for pair in gaps.windows(2) {
            assert!(pair[1] >= pair[0] * (1.0 - 1e-9));
        }
    }
}

#[test]
fn transform_is_deterministic() {
    let raw = Point3::new(0.3, 0.1, -0.7);
    let slot = OrbitSlot::new(2, 5);
    for mode in DisplayMode::ALL {
        assert_eq!(
            transform(&raw, slot, mode, 10.0, 7.5),
            transform(&raw, slot, mode, 10.0, 7.5)
        );
    }
}
