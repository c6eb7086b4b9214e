//! The solved-state check.

use cubik_core::{Color, Direction};
use cubik_grid::CubeGrid;

fn in_play_colors(grid: &CubeGrid, direction: Direction) -> impl Iterator<Item = Color> + '_ {
    grid.cubes()
        .map(move |cube| cube.face(direction))
        .filter(|face| face.in_play())
        .map(|face| face.color())
}

/// The single color shown by every in-play sticker facing `direction`.
///
/// Returns `None` if two such stickers differ. A direction with no in-play
/// stickers, impossible in a well-formed grid, has no color either.
pub fn uniform_color(grid: &CubeGrid, direction: Direction) -> Option<Color> {
    let mut colors = in_play_colors(grid, direction);
    let first = colors.next()?;
    colors.all(|c| c == first).then_some(first)
}

/// Whether every outward direction shows one uniform color.
///
/// Read-only; safe to call after every move.
pub fn is_solved(grid: &CubeGrid) -> bool {
    Direction::ALL
        .iter()
        .all(|&d| in_play_colors(grid, d).next().is_none() || uniform_color(grid, d).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubik_core::{Axis, Palette, Turn};

    #[test]
    fn fresh_grids_are_solved() {
        for n in 2..=6 {
            assert!(is_solved(&CubeGrid::new(n).unwrap()));
        }
    }

    #[test]
    fn custom_palette_is_solved() {
        let palette = Palette::new([
            Color::Red,
            Color::Orange,
            Color::White,
            Color::Yellow,
            Color::Green,
            Color::Blue,
        ])
        .unwrap();
        let grid = CubeGrid::with_palette(3, &palette).unwrap();
        assert!(is_solved(&grid));
        assert_eq!(uniform_color(&grid, Direction::Top), Some(Color::Red));
        assert_eq!(uniform_color(&grid, Direction::West), Some(Color::Blue));
    }

    #[test]
    fn single_turn_breaks_solution() {
        let mut grid = CubeGrid::new(3).unwrap();
        grid.rotate_layer(Axis::X, 0, Turn::Positive).unwrap();
        assert!(!is_solved(&grid));
        // The turned layer is perpendicular to X, so east and west stay whole.
        assert_eq!(uniform_color(&grid, Direction::East), Some(Color::Red));
        assert_eq!(uniform_color(&grid, Direction::Top), None);
    }

    #[test]
    fn whole_cube_turn_stays_solved() {
        let mut grid = CubeGrid::new(3).unwrap();
        for layer in 0..3 {
            grid.rotate_layer(Axis::Y, layer, Turn::Negative).unwrap();
        }
        assert!(is_solved(&grid));
        assert_ne!(uniform_color(&grid, Direction::North), Some(Color::Blue));
    }
}
