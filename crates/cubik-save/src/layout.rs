//! The persisted layout and conversion to and from live grids.

use cubik_core::{Color, CubeSize, Direction};
use cubik_grid::{CubeGrid, StickerFace, UnitCube};
use indexmap::IndexMap;
use log::debug;

use crate::error::ImportError;

/// One persisted face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FaceRecord {
    /// Whether the face is on the outer shell.
    pub in_play: bool,
    /// The direction the face currently points.
    pub direction: Direction,
    /// The sticker color.
    pub color: Color,
}

/// One persisted unit cube: its faces in slot order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PersistedCube {
    /// Faces in [`Direction::ALL`] slot order. Must hold exactly six.
    pub faces: Vec<FaceRecord>,
}

/// A whole grid in storable form.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PersistedLayout {
    /// Edge length.
    pub cube_size: usize,
    /// Cubes in row-major order, `(x * size + y) * size + z`.
    pub cubes: Vec<PersistedCube>,
}

/// Capture a grid's complete state.
pub fn export_state(grid: &CubeGrid) -> PersistedLayout {
    let cubes = grid
        .cubes()
        .map(|cube| PersistedCube {
            faces: cube
                .faces()
                .iter()
                .map(|f| FaceRecord {
                    in_play: f.in_play(),
                    direction: f.direction(),
                    color: f.color(),
                })
                .collect(),
        })
        .collect();
    debug!("exported {} grid", grid.size());
    PersistedLayout {
        cube_size: grid.size().get(),
        cubes,
    }
}

/// Rebuild a grid from a layout.
///
/// # Errors
///
/// Returns [`ImportError`] if the size is unsupported, the record or face
/// counts are wrong, a cube's directions are not a bijection, an in-play
/// flag disagrees with the cube's position, a sticker color disagrees with
/// its in-play flag, or the outer stickers are not six colors of `N²`
/// stickers each. Nothing is built until every record has been checked.
pub fn import_state(layout: &PersistedLayout) -> Result<CubeGrid, ImportError> {
    let size = CubeSize::new(layout.cube_size).map_err(|_| ImportError::InvalidSize {
        size: layout.cube_size,
    })?;
    if layout.cubes.len() != size.cell_count() {
        return Err(ImportError::CellCountMismatch {
            expected: size.cell_count(),
            found: layout.cubes.len(),
        });
    }
    for (index, cube) in layout.cubes.iter().enumerate() {
        validate_cube(size, index, cube)?;
    }
    validate_census(size, layout)?;

    let cubes = layout
        .cubes
        .iter()
        .enumerate()
        .map(|(index, cube)| {
            let faces: [StickerFace; 6] = std::array::from_fn(|slot| {
                let f = cube.faces[slot];
                StickerFace::new(f.direction, f.color, f.in_play)
            });
            UnitCube::from_faces(size.coord_of(index), faces)
        })
        .collect::<Result<Vec<_>, _>>()?;
    let grid = CubeGrid::from_cubes(size, cubes)?;
    debug!("imported {size} grid");
    Ok(grid)
}

fn validate_cube(size: CubeSize, index: usize, cube: &PersistedCube) -> Result<(), ImportError> {
    if cube.faces.len() != 6 {
        return Err(ImportError::FaceCountMismatch {
            index,
            found: cube.faces.len(),
        });
    }
    let coord = size.coord_of(index);
    let mut seen = [false; 6];
    for (slot, face) in cube.faces.iter().enumerate() {
        let entry = &mut seen[face.direction.slot()];
        if *entry {
            return Err(ImportError::DuplicateDirection {
                index,
                direction: face.direction,
            });
        }
        *entry = true;
        if face.in_play != face.direction.points_outward(coord, size) {
            return Err(ImportError::InPlayMismatch { index, slot });
        }
        if face.in_play == (face.color == Color::Neutral) {
            return Err(ImportError::ColorMismatch { index, slot });
        }
    }
    Ok(())
}

/// Every outer face shows one of six colors, `N²` stickers of each.
fn validate_census(size: CubeSize, layout: &PersistedLayout) -> Result<(), ImportError> {
    let mut counts: IndexMap<Color, usize> = IndexMap::new();
    for face in layout.cubes.iter().flat_map(|c| c.faces.iter()) {
        if face.in_play {
            *counts.entry(face.color).or_insert(0) += 1;
        }
    }
    if counts.len() != 6 {
        return Err(ImportError::ColorCount {
            found: counts.len(),
        });
    }
    let expected = size.get() * size.get();
    match counts.into_iter().find(|&(_, count)| count != expected) {
        Some((color, found)) => Err(ImportError::StickerCount {
            color,
            found,
            expected,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubik_core::{Axis, Turn};

    #[test]
    fn export_orders_cubes_row_major() {
        let grid = CubeGrid::new(2).unwrap();
        let layout = export_state(&grid);
        assert_eq!(layout.cube_size, 2);
        assert_eq!(layout.cubes.len(), 8);
        // Index 1 is (0, 0, 1): bottom, north, west faces are outer.
        let faces = &layout.cubes[1].faces;
        assert_eq!(faces.len(), 6);
        assert_eq!(faces[0].direction, Direction::Top);
        assert!(!faces[0].in_play);
        assert!(faces[1].in_play);
        assert!(faces[2].in_play);
        assert!(!faces[3].in_play);
        assert!(faces[5].in_play);
    }

    #[test]
    fn round_trip_after_moves() {
        let mut grid = CubeGrid::new(4).unwrap();
        grid.rotate_layer(Axis::X, 3, Turn::Positive).unwrap();
        grid.rotate_layer(Axis::Y, 1, Turn::Negative).unwrap();
        grid.rotate_layer(Axis::Z, 0, Turn::Positive).unwrap();
        let back = import_state(&export_state(&grid)).unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    fn rejects_bad_size() {
        let layout = PersistedLayout {
            cube_size: 7,
            cubes: vec![],
        };
        assert_eq!(import_state(&layout), Err(ImportError::InvalidSize { size: 7 }));
    }

    #[test]
    fn rejects_wrong_cube_count() {
        let mut layout = export_state(&CubeGrid::new(3).unwrap());
        layout.cubes.pop();
        assert_eq!(
            import_state(&layout),
            Err(ImportError::CellCountMismatch {
                expected: 27,
                found: 26
            })
        );
    }

    #[test]
    fn rejects_wrong_face_count() {
        let mut layout = export_state(&CubeGrid::new(2).unwrap());
        layout.cubes[5].faces.pop();
        assert_eq!(
            import_state(&layout),
            Err(ImportError::FaceCountMismatch { index: 5, found: 5 })
        );
    }

    #[test]
    fn rejects_duplicate_direction() {
        let mut layout = export_state(&CubeGrid::new(3).unwrap());
        // The centre cube is all interior, so only the labels matter.
        layout.cubes[13].faces[4].direction = Direction::West;
        assert_eq!(
            import_state(&layout),
            Err(ImportError::DuplicateDirection {
                index: 13,
                direction: Direction::West
            })
        );
    }

    #[test]
    fn rejects_inconsistent_in_play() {
        let mut layout = export_state(&CubeGrid::new(3).unwrap());
        layout.cubes[0].faces[0].in_play = true;
        assert_eq!(
            import_state(&layout),
            Err(ImportError::InPlayMismatch { index: 0, slot: 0 })
        );
    }

    #[test]
    fn rejects_neutral_in_play() {
        let mut layout = export_state(&CubeGrid::new(3).unwrap());
        // Slot 1 of the origin cube is its outer bottom face.
        layout.cubes[0].faces[1].color = Color::Neutral;
        assert_eq!(
            import_state(&layout),
            Err(ImportError::ColorMismatch { index: 0, slot: 1 })
        );
    }

    #[test]
    fn rejects_colored_interior() {
        let mut layout = export_state(&CubeGrid::new(3).unwrap());
        layout.cubes[13].faces[0].color = Color::Red;
        assert_eq!(
            import_state(&layout),
            Err(ImportError::ColorMismatch { index: 13, slot: 0 })
        );
    }

    #[test]
    fn rejects_single_colored_shell() {
        let mut layout = export_state(&CubeGrid::new(2).unwrap());
        for face in layout.cubes.iter_mut().flat_map(|c| c.faces.iter_mut()) {
            if face.in_play {
                face.color = Color::White;
            }
        }
        assert_eq!(import_state(&layout), Err(ImportError::ColorCount { found: 1 }));
    }

    #[test]
    fn rejects_unbalanced_sticker_counts() {
        let mut layout = export_state(&CubeGrid::new(2).unwrap());
        // Repaint one red east sticker of the (1, 0, 0) cube white.
        let east = Direction::East.slot();
        layout.cubes[4].faces[east].color = Color::White;
        assert_eq!(
            import_state(&layout),
            Err(ImportError::StickerCount {
                color: Color::White,
                found: 5,
                expected: 4
            })
        );
    }
}
