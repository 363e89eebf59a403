//! Property tests for preview camera placement.

use proptest::prelude::*;

use grove::domain::services::{place_camera, Bounds, PreviewSettings};

fn bounds() -> impl Strategy<Value = Bounds> {
    (
        proptest::array::uniform3(-100.0f64..100.0),
        proptest::array::uniform3(0.01f64..50.0),
    ).prop_map(|(min, size)| {
        Bounds::new(min, [min[0] + size[0], min[1] + size[1], min[2] + size[2]])
    })
}

fn distance(a: [f64; 3], b: [f64; 3]) -> f64 {
    ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2) + (a[2] - b[2]).powi(2)).sqrt()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the camera sits 2.5 x the longest side away from the box center.
    #[test]
    fn property_camera_distance_scales_with_box(b in bounds()) {
        let settings = PreviewSettings::default();
        let cam = place_camera(Some(&b), &settings);

        let expected = b.longest_side() * settings.distance_factor;
        let actual = distance(cam.location, b.center());
        prop_assert!((actual - expected).abs() < 1e-6 * expected.max(1.0));
    }

    /// PROPERTY: the camera is above the box center and keeps a level horizon.
    #[test]
    fn property_camera_looks_down_with_level_horizon(b in bounds()) {
        let cam = place_camera(Some(&b), &PreviewSettings::default());

        prop_assert!(cam.location[2] > b.center()[2]);
        prop_assert_eq!(cam.rotation_euler[1], 0.0);
    }

    /// PROPERTY: the union box contains both inputs.
    #[test]
    fn property_union_contains_inputs(a in bounds(), b in bounds()) {
        let u = a.union(&b);
        for i in 0..3 {
            prop_assert!(u.min[i] <= a.min[i] && u.min[i] <= b.min[i]);
            prop_assert!(u.max[i] >= a.max[i] && u.max[i] >= b.max[i]);
        }
    }
}
