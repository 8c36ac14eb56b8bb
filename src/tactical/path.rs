//! Straight-line route preview on the hex grid
//!
//! Interpolates in cube space and rounds each sample back onto the grid.
//! Every call recomputes the route from scratch.

use crate::core::types::Position;
use crate::tactical::hex::{cube_round, hex_distance};

/// Cells on the straight line from `start` to `destination`, both included
///
/// Returns an empty route when there is no destination or it equals `start`.
/// Otherwise the route holds `hex_distance(start, destination) + 1` cells.
pub fn compute_path(start: Position, destination: Option<Position>) -> Vec<Position> {
    let Some(destination) = destination else {
        return Vec::new();
    };

    let n = hex_distance(start, destination);
    if n == 0 {
        return Vec::new();
    }

    let a = start.to_cube();
    let b = destination.to_cube();
    let lerp = |from: i32, to: i32, t: f64| from as f64 + (to as f64 - from as f64) * t;

    (0..=n)
        .map(|i| {
            let t = i as f64 / n as f64;
            cube_round(lerp(a.x, b.x, t), lerp(a.y, b.y, t), lerp(a.z, b.z, t)).to_position()
        })
        .collect()
}

/// Breadcrumb cells strictly between `start` and `destination`
pub fn route_steps(start: Position, destination: Position) -> Vec<Position> {
    let path = compute_path(start, Some(destination));
    if path.len() <= 2 {
        return Vec::new();
    }
    path[1..path.len() - 1].to_vec()
}

/// Number of moves along a computed route
pub fn path_distance(path: &[Position]) -> u32 {
    path.len().saturating_sub(1) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_destination() {
        assert!(compute_path(Position::new(3, 3), None).is_empty());
    }

    #[test]
    fn test_same_cell() {
        let p = Position::new(4, 2);
        assert!(compute_path(p, Some(p)).is_empty());
        assert_eq!(path_distance(&compute_path(p, Some(p))), 0);
    }

    #[test]
    fn test_straight_row() {
        let path = compute_path(Position::new(2, 3), Some(Position::new(7, 3)));
        let expected: Vec<Position> = (2..=7).map(|x| Position::new(x, 3)).collect();
        assert_eq!(path, expected);
    }

    #[test]
    fn test_vertical_column() {
        let path = compute_path(Position::new(1, 1), Some(Position::new(1, 5)));
        assert_eq!(path.len(), 5);
        assert!(path.iter().all(|p| p.x == 1));
    }

    #[test]
    fn test_diagonal_route() {
        let path = compute_path(Position::new(5, 5), Some(Position::new(0, 9)));
        assert_eq!(
            path,
            vec![
                Position::new(5, 5),
                Position::new(4, 6),
                Position::new(3, 6),
                Position::new(3, 7),
                Position::new(2, 8),
                Position::new(1, 8),
                Position::new(0, 9),
            ]
        );
    }

    #[test]
    fn test_consecutive_cells_adjacent() {
        let path = compute_path(Position::new(0, 0), Some(Position::new(10, 9)));
        assert_eq!(path.len(), 15);
        for pair in path.windows(2) {
            assert_eq!(hex_distance(pair[0], pair[1]), 1);
        }
    }

    #[test]
    fn test_route_steps_exclude_endpoints() {
        let steps = route_steps(Position::new(0, 0), Position::new(3, 0));
        assert_eq!(steps, vec![Position::new(1, 0), Position::new(2, 0)]);
        assert!(route_steps(Position::new(0, 0), Position::new(1, 0)).is_empty());
    }

    #[test]
    fn test_repeatable() {
        let a = compute_path(Position::new(0, 0), Some(Position::new(4, 2)));
        let b = compute_path(Position::new(0, 0), Some(Position::new(4, 2)));
        assert_eq!(a, b);
        assert_eq!(path_distance(&a), 4);
    }
}
