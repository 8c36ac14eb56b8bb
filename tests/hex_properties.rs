//! Property tests for hex geometry and routing

use proptest::prelude::*;
use sector_tactics::core::types::Position;
use sector_tactics::tactical::*;

fn position() -> impl Strategy<Value = Position> {
    (-20i32..40, -20i32..40).prop_map(|(x, y)| Position::new(x, y))
}

proptest! {
    #[test]
    fn prop_center_roundtrip(pos in position(), size in 0.5f64..200.0) {
        let center = hex_center(pos, size);
        prop_assert_eq!(pixel_to_hex(center.x, center.y, size), pos);
    }

    #[test]
    fn prop_cube_round_sums_to_zero(x in -50.0f64..50.0, z in -50.0f64..50.0, jitter in -1e-6f64..1e-6) {
        let cube = cube_round(x, -x - z + jitter, z);
        prop_assert_eq!(cube.x + cube.y + cube.z, 0);
    }

    #[test]
    fn prop_vertices_surround_center(pos in position(), size in 0.5f64..200.0) {
        let center = hex_center(pos, size);
        for vertex in hex_vertices(pos, size) {
            prop_assert!((vertex.distance(center) - size).abs() < 1e-6 * size.max(1.0));
        }
    }

    #[test]
    fn prop_path_length_and_endpoints(a in position(), b in position()) {
        let path = compute_path(a, Some(b));
        if a == b {
            prop_assert!(path.is_empty());
        } else {
            prop_assert_eq!(path.len() as u32, hex_distance(a, b) + 1);
            prop_assert_eq!(path[0], a);
            prop_assert_eq!(*path.last().unwrap(), b);
            for pair in path.windows(2) {
                prop_assert!(hex_distance(pair[0], pair[1]) <= 1);
            }
        }
    }

    #[test]
    fn prop_distance_symmetric(a in position(), b in position()) {
        prop_assert_eq!(hex_distance(a, b), hex_distance(b, a));
    }
}
