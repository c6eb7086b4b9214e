//! The N×N×N grid of unit cubes.

use cubik_core::{Axis, Coord3, CubeSize, GridError, Palette, RotationError, Turn};

use crate::slice::{layer_indices, rotate_coord};
use crate::unit::UnitCube;

/// Exclusive owner of every unit cube in a lattice.
///
/// Cells are stored row-major (`(x * N + y) * N + z`), the same order used
/// by the persisted layout. The grid is always fully populated: each
/// coordinate holds exactly one cube and each cube sits at the slot its
/// coordinate names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CubeGrid {
    size: CubeSize,
    cells: Vec<UnitCube>,
}

impl CubeGrid {
    /// Create a solved grid with the default palette.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidSize`] unless `2 <= size <= 6`.
    pub fn new(size: usize) -> Result<Self, GridError> {
        Self::with_palette(size, &Palette::default())
    }

    /// Create a solved grid whose outer stickers follow `palette`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidSize`] unless `2 <= size <= 6`.
    pub fn with_palette(size: usize, palette: &Palette) -> Result<Self, GridError> {
        let size = CubeSize::new(size)?;
        let cells = (0..size.cell_count())
            .map(|i| UnitCube::solved(size.coord_of(i), size, palette))
            .collect();
        Ok(Self { size, cells })
    }

    /// Assemble a grid from cubes supplied in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::CellCountMismatch`] if `cubes.len() != N³`, or
    /// [`GridError::MisplacedCube`] if a cube's coordinate does not match
    /// its slot.
    pub fn from_cubes(size: CubeSize, cubes: Vec<UnitCube>) -> Result<Self, GridError> {
        if cubes.len() != size.cell_count() {
            return Err(GridError::CellCountMismatch {
                expected: size.cell_count(),
                found: cubes.len(),
            });
        }
        if let Some((index, cube)) = cubes
            .iter()
            .enumerate()
            .find(|(i, c)| size.index_of(c.coord()) != Some(*i))
        {
            return Err(GridError::MisplacedCube {
                index,
                coord: cube.coord(),
            });
        }
        Ok(Self { size, cells: cubes })
    }

    /// Edge length.
    pub fn size(&self) -> CubeSize {
        self.size
    }

    /// The unit cube at `(x, y, z)`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfRange`] if any component is negative or not
    /// below the edge length.
    pub fn get(&self, x: i32, y: i32, z: i32) -> Result<&UnitCube, GridError> {
        self.at(Coord3::new(x, y, z))
    }

    /// The unit cube at `coord`. See [`CubeGrid::get`].
    pub fn at(&self, coord: Coord3) -> Result<&UnitCube, GridError> {
        self.size
            .index_of(coord)
            .map(|i| &self.cells[i])
            .ok_or(GridError::OutOfRange {
                coord,
                size: self.size.get(),
            })
    }

    /// All cubes in row-major order.
    pub fn cubes(&self) -> impl ExactSizeIterator<Item = &UnitCube> + '_ {
        self.cells.iter()
    }

    /// Render-space centre of the cell at `coord`: `coord - (N-1)/2` per
    /// axis, so the whole lattice is centred on the origin.
    pub fn position(&self, coord: Coord3) -> [f32; 3] {
        let half = (self.size.get() as f32 - 1.0) / 2.0;
        [
            coord.x as f32 - half,
            coord.y as f32 - half,
            coord.z as f32 - half,
        ]
    }

    /// Turn one slice a quarter turn about `axis`.
    ///
    /// Cubes in the slice move to their rotated slots and every one of
    /// their faces is re-labelled; cubes outside the slice are untouched.
    /// No cube is created, dropped or cloned. This is the raw geometric
    /// step: it records no history and takes no rotation lock.
    ///
    /// # Errors
    ///
    /// Returns [`RotationError::InvalidLayer`] if `layer >= N`; the grid is
    /// unchanged.
    pub fn rotate_layer(
        &mut self,
        axis: Axis,
        layer: usize,
        turn: Turn,
    ) -> Result<(), RotationError> {
        if layer >= self.size.get() {
            return Err(RotationError::InvalidLayer {
                layer,
                size: self.size.get(),
            });
        }
        let members = layer_indices(self.size, axis, layer);

        // dest[i] is the slot the cube now at i must move to.
        let mut dest: Vec<usize> = (0..self.cells.len()).collect();
        for &i in &members {
            let to = rotate_coord(self.size.coord_of(i), axis, turn, self.size);
            if let Some(j) = self.size.index_of(to) {
                dest[i] = j;
            }
        }

        // Follow each permutation cycle with swaps; every swap parks one
        // cube in its final slot.
        for &i in &members {
            while dest[i] != i {
                let j = dest[i];
                self.cells.swap(i, j);
                dest.swap(i, j);
            }
        }

        for &i in &members {
            let cube = &mut self.cells[i];
            cube.set_coord(self.size.coord_of(i));
            cube.rotate_labels(axis, turn);
        }
        Ok(())
    }
}
