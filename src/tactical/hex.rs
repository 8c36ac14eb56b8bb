//! Hex coordinate system for sector maps (odd-q offset, flat-top)
//!
//! Cells are addressed by offset `Position`s; cube coordinates are used for
//! distance, rounding and interpolation.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::core::types::Position;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Cube hex coordinate, always satisfying `x + y + z == 0`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Cube {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Cube {
    /// Build from the two independent axes; `y` is derived
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, y: -x - z, z }
    }

    /// Convert back to odd-q offset coordinates
    pub fn to_position(self) -> Position {
        Position::new(self.x, self.z + (self.x - self.x % 2) / 2)
    }

    pub fn distance(&self, other: &Self) -> u32 {
        steps(
            (self.x as i64, self.y as i64, self.z as i64),
            (other.x as i64, other.y as i64, other.z as i64),
        )
    }

    /// The 6 adjacent cubes, clockwise from north-east
    pub fn neighbors(&self) -> [Cube; 6] {
        [
            Cube::new(self.x + 1, self.z - 1),
            Cube::new(self.x + 1, self.z),
            Cube::new(self.x, self.z + 1),
            Cube::new(self.x - 1, self.z + 1),
            Cube::new(self.x - 1, self.z),
            Cube::new(self.x, self.z - 1),
        ]
    }
}

impl Position {
    /// Convert odd-q offset to cube coordinates for algorithms.
    pub fn to_cube(&self) -> Cube {
        Cube::new(self.x, self.y - (self.x - self.x % 2) / 2)
    }

    /// Get the 6 neighbor cells (no bounds check).
    pub fn neighbors(&self) -> [Position; 6] {
        self.to_cube().neighbors().map(Cube::to_position)
    }
}

/// Distance between two cells in hex steps
///
/// Defined for any pair of positions; saturates at `u32::MAX`.
pub fn hex_distance(a: Position, b: Position) -> u32 {
    steps(wide_cube(a), wide_cube(b))
}

/// Cube coordinates in i64, so far-off positions cannot overflow
fn wide_cube(pos: Position) -> (i64, i64, i64) {
    let x = pos.x as i64;
    let z = pos.y as i64 - (x - x % 2) / 2;
    (x, -x - z, z)
}

fn steps(a: (i64, i64, i64), b: (i64, i64, i64)) -> u32 {
    let total = (a.0 - b.0).abs() + (a.1 - b.1).abs() + (a.2 - b.2).abs();
    u32::try_from(total / 2).unwrap_or(u32::MAX)
}

/// Round fractional cube coordinates to the nearest cube
///
/// The component with the largest rounding error is recomputed from the other
/// two so the result sums to zero. Equal errors prefer correcting x, then y.
pub fn cube_round(x: f64, y: f64, z: f64) -> Cube {
    let mut rx = x.round();
    let mut ry = y.round();
    let mut rz = z.round();

    let x_diff = (rx - x).abs();
    let y_diff = (ry - y).abs();
    let z_diff = (rz - z).abs();

    if x_diff >= y_diff && x_diff >= z_diff {
        rx = -ry - rz;
    } else if y_diff >= z_diff {
        ry = -rx - rz;
    } else {
        rz = -rx - ry;
    }

    Cube {
        x: rx as i32,
        y: ry as i32,
        z: rz as i32,
    }
}

/// Pixel-space center of a cell.
pub fn hex_center(pos: Position, size: f64) -> DVec2 {
    let x = size * 1.5 * pos.x as f64;
    let y = SQRT_3 * size * (pos.y as f64 + 0.5 * (pos.x % 2) as f64);
    DVec2::new(x, y)
}

/// The 6 corners of a cell, vertex `i` at `60° * i` from the center.
pub fn hex_vertices(pos: Position, size: f64) -> [DVec2; 6] {
    let center = hex_center(pos, size);
    std::array::from_fn(|i| {
        let angle = (60.0 * i as f64).to_radians();
        DVec2::new(center.x + size * angle.cos(), center.y + size * angle.sin())
    })
}

/// Convert pixel position to the cell containing it.
pub fn pixel_to_hex(x: f64, y: f64, size: f64) -> Position {
    let q = x * (2.0 / 3.0) / size;
    let r = (-x / 3.0 + SQRT_3 / 3.0 * y) / size;
    cube_round(q, -q - r, r).to_position()
}

/// Geometry helpers bound to one hex size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexLayout {
    pub size: f64,
}

impl HexLayout {
    pub fn new(size: f64) -> Self {
        Self { size }
    }

    pub fn center(&self, pos: Position) -> DVec2 {
        hex_center(pos, self.size)
    }

    pub fn vertices(&self, pos: Position) -> [DVec2; 6] {
        hex_vertices(pos, self.size)
    }

    pub fn pixel_to_hex(&self, point: DVec2) -> Position {
        pixel_to_hex(point.x, point.y, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: DVec2, x: f64, y: f64) -> bool {
        (a.x - x).abs() < 1e-9 && (a.y - y).abs() < 1e-9
    }

    #[test]
    fn test_center_origin() {
        assert!(approx(hex_center(Position::new(0, 0), 40.0), 0.0, 0.0));
    }

    #[test]
    fn test_center_odd_column_offset() {
        // Odd columns drop by half a cell height
        let center = hex_center(Position::new(1, 0), 10.0);
        assert!(approx(center, 15.0, SQRT_3 * 5.0));
    }

    #[test]
    fn test_center_even_column() {
        let center = hex_center(Position::new(2, 3), 10.0);
        assert!(approx(center, 30.0, SQRT_3 * 30.0));
    }

    #[test]
    fn test_vertices_at_radius() {
        let pos = Position::new(3, 4);
        let center = hex_center(pos, 25.0);
        for vertex in hex_vertices(pos, 25.0) {
            assert!((vertex.distance(center) - 25.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_first_vertex_is_east() {
        let vertices = hex_vertices(Position::new(0, 0), 10.0);
        assert!(approx(vertices[0], 10.0, 0.0));
        assert!(approx(vertices[3], -10.0, 0.0));
    }

    #[test]
    fn test_pixel_to_hex_roundtrip() {
        for x in 0..11 {
            for y in 0..10 {
                let pos = Position::new(x, y);
                let center = hex_center(pos, 40.0);
                assert_eq!(pixel_to_hex(center.x, center.y, 40.0), pos);
            }
        }
    }

    #[test]
    fn test_pixel_near_center_maps_to_cell() {
        let pos = Position::new(4, 6);
        let center = hex_center(pos, 30.0);
        assert_eq!(pixel_to_hex(center.x + 8.0, center.y - 8.0, 30.0), pos);
    }

    #[test]
    fn test_negative_column_roundtrip() {
        let pos = Position::new(-3, -2);
        let layout = HexLayout::new(12.0);
        assert_eq!(layout.pixel_to_hex(layout.center(pos)), pos);
    }

    #[test]
    fn test_offset_cube_conversion() {
        let pos = Position::new(5, 7);
        let cube = pos.to_cube();
        assert_eq!(cube.x + cube.y + cube.z, 0);
        assert_eq!(cube.to_position(), pos);
    }

    #[test]
    fn test_cube_round_preserves_constraint() {
        let cube = cube_round(0.4, 0.3, -0.7);
        assert_eq!(cube.x + cube.y + cube.z, 0);
    }

    #[test]
    fn test_cube_round_tie_corrects_x() {
        // x and z errors are both 0.5, x wins the tie
        let cube = cube_round(0.5, 0.0, -0.5);
        assert_eq!(cube, Cube { x: 1, y: 0, z: -1 });
        let cube = cube_round(-0.5, 0.0, 0.5);
        assert_eq!(cube.x + cube.y + cube.z, 0);
    }

    #[test]
    fn test_distance() {
        assert_eq!(hex_distance(Position::new(2, 3), Position::new(7, 3)), 5);
        assert_eq!(hex_distance(Position::new(2, 3), Position::new(5, 5)), 4);
        assert_eq!(hex_distance(Position::new(0, 0), Position::new(10, 9)), 14);
    }

    #[test]
    fn test_distance_far_apart_positions() {
        let a = Position::new(i32::MAX - 1, 0);
        let b = Position::new(i32::MIN + 1, 0);
        assert_eq!(hex_distance(a, b), 4_294_967_293);
        assert_eq!(hex_distance(b, a), 4_294_967_293);
    }

    #[test]
    fn test_distance_saturates() {
        let a = Position::new(i32::MIN, i32::MIN);
        let b = Position::new(i32::MAX, i32::MAX);
        assert_eq!(hex_distance(a, b), u32::MAX);
    }

    #[test]
    fn test_distance_same() {
        let a = Position::new(4, 4);
        assert_eq!(hex_distance(a, a), 0);
    }

    #[test]
    fn test_neighbors_even_column() {
        let mut neighbors = Position::new(2, 3).neighbors().to_vec();
        neighbors.sort_by_key(|p| (p.x, p.y));
        assert_eq!(
            neighbors,
            vec![
                Position::new(1, 2),
                Position::new(1, 3),
                Position::new(2, 2),
                Position::new(2, 4),
                Position::new(3, 2),
                Position::new(3, 3),
            ]
        );
    }

    #[test]
    fn test_neighbors_are_adjacent() {
        let pos = Position::new(3, 3);
        for neighbor in pos.neighbors() {
            assert_eq!(hex_distance(pos, neighbor), 1);
        }
    }
}
