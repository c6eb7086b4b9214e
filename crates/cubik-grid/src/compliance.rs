//! Structural invariant checks for cube grids.
//!
//! These functions panic with a descriptive message when a grid violates
//! one of its invariants. They are used by this crate's own tests and by
//! downstream integration tests after arbitrary rotation sequences.

use cubik_core::{Color, Direction};
use indexmap::{IndexMap, IndexSet};

use crate::grid::CubeGrid;

/// Assert that every coordinate holds exactly one cube at its own slot.
pub fn assert_lattice_bijection(grid: &CubeGrid) {
    let size = grid.size();
    let mut seen = IndexSet::new();
    for (i, cube) in grid.cubes().enumerate() {
        let coord = cube.coord();
        assert_eq!(
            size.index_of(coord),
            Some(i),
            "cube at slot {i} claims coordinate {coord}"
        );
        assert!(seen.insert(coord), "coordinate {coord} appears twice");
    }
    assert_eq!(
        seen.len(),
        size.cell_count(),
        "lattice has {} cubes, expected {}",
        seen.len(),
        size.cell_count()
    );
}

/// Assert that each cube's six face labels cover all six directions and
/// that direction lookup agrees with the labels.
pub fn assert_direction_bijection(grid: &CubeGrid) {
    for cube in grid.cubes() {
        let labels: IndexSet<Direction> = cube.faces().iter().map(|f| f.direction()).collect();
        assert_eq!(
            labels.len(),
            6,
            "cube at {} has repeated labels: {:?}",
            cube.coord(),
            cube.faces()
        );
        for d in Direction::ALL {
            assert_eq!(
                cube.face(d).direction(),
                d,
                "cube at {} resolves {d} to the wrong face",
                cube.coord()
            );
        }
    }
}

/// Assert that a face is in play exactly when it points out of the lattice,
/// and that only in-play faces carry a sticker color.
pub fn assert_in_play_outward(grid: &CubeGrid) {
    let size = grid.size();
    for cube in grid.cubes() {
        for face in cube.faces() {
            let outward = face.direction().points_outward(cube.coord(), size);
            assert_eq!(
                face.in_play(),
                outward,
                "cube at {} face {} in_play={} but outward={outward}",
                cube.coord(),
                face.direction(),
                face.in_play()
            );
            assert_eq!(
                face.color() == Color::Neutral,
                !face.in_play(),
                "cube at {} face {} has color {} with in_play={}",
                cube.coord(),
                face.direction(),
                face.color(),
                face.in_play()
            );
        }
    }
}

/// Assert that the grid holds `N²` in-play stickers of each palette color.
pub fn assert_sticker_census(grid: &CubeGrid) {
    let n = grid.size().get();
    let mut counts: IndexMap<Color, usize> = IndexMap::new();
    for face in grid.cubes().flat_map(|c| c.faces().iter()) {
        if face.in_play() {
            *counts.entry(face.color()).or_insert(0) += 1;
        }
    }
    assert_eq!(counts.len(), 6, "expected six sticker colors, found {counts:?}");
    for (color, count) in counts {
        assert_eq!(count, n * n, "{color} appears on {count} stickers, expected {}", n * n);
    }
}

/// Run every structural check on a grid.
pub fn run_full_compliance(grid: &CubeGrid) {
    assert_lattice_bijection(grid);
    assert_direction_bijection(grid);
    assert_in_play_outward(grid);
    assert_sticker_census(grid);
}
