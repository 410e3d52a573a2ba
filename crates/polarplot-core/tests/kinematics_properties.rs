use polarplot_core::{
    lengths_from_point, point_from_lengths, KinematicsError, LengthPair, Point, SpoolGeometry,
    StepCommand, TautStringPolicy,
};
use proptest::prelude::*;

fn geometry() -> SpoolGeometry {
    SpoolGeometry::new(400.0).unwrap()
}

#[test]
fn test_known_lengths() {
    let lengths = lengths_from_point(geometry(), Point::new(100.0, 100.0));
    assert!((lengths.left - 141.421).abs() < 1e-3);
    assert!((lengths.right - 320.156).abs() < 1e-3);
}

#[test]
fn test_anchor_points() {
    let at_left = lengths_from_point(geometry(), Point::new(0.0, 0.0));
    assert_eq!(at_left, LengthPair::new(0.0, 400.0));

    let at_right = lengths_from_point(geometry(), Point::new(400.0, 0.0));
    assert_eq!(at_right, LengthPair::new(400.0, 0.0));
}

proptest! {
    #[test]
    fn round_trip_inside_reachable_region(x in -200.0f64..600.0, y in 1.0f64..800.0) {
        let lengths = lengths_from_point(geometry(), Point::new(x, y));
        let solved = point_from_lengths(geometry(), lengths, TautStringPolicy::Reject).unwrap();
        prop_assert!((solved.x - x).abs() < 1e-6);
        prop_assert!((solved.y - y).abs() < 1e-6);
    }

    #[test]
    fn mirror_symmetry_about_midline(x in -200.0f64..600.0, y in 0.0f64..800.0) {
        let direct = lengths_from_point(geometry(), Point::new(x, y));
        let mirrored = lengths_from_point(geometry(), Point::new(400.0 - x, y));
        prop_assert!((direct.left - mirrored.right).abs() < 1e-9);
        prop_assert!((direct.right - mirrored.left).abs() < 1e-9);
    }

    #[test]
    fn short_strings_are_flagged(left in 0.0f64..200.0, frac in 0.0f64..0.999) {
        let right = (400.0 - left) * frac;
        let err = point_from_lengths(geometry(), LengthPair::new(left, right), TautStringPolicy::Reject)
            .unwrap_err();
        let is_taut = matches!(err, KinematicsError::TautString { .. });
        prop_assert!(is_taut);
    }

    #[test]
    fn packed_commands_survive_unpacking(value in 0u8..64) {
        let cmd = StepCommand::unpack(value);
        prop_assert_eq!(StepCommand::unpack(cmd.pack()), cmd);
    }
}
