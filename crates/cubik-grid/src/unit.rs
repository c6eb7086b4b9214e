//! Sticker faces and unit cubes.

use cubik_core::{Axis, Color, Coord3, CubeSize, Direction, GridError, Palette, Turn};

/// One face of one unit cube.
///
/// `in_play` and `color` are fixed at construction; only `direction`
/// changes, when the owning cube is rotated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StickerFace {
    direction: Direction,
    color: Color,
    in_play: bool,
}

impl StickerFace {
    /// Build a face.
    pub fn new(direction: Direction, color: Color, in_play: bool) -> Self {
        Self {
            direction,
            color,
            in_play,
        }
    }

    /// The direction this face currently points.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The sticker color ([`Color::Neutral`] for interior faces).
    pub fn color(&self) -> Color {
        self.color
    }

    /// Whether the face lies on the outer shell.
    pub fn in_play(&self) -> bool {
        self.in_play
    }
}

/// A unit cube: a lattice coordinate and six faces.
///
/// Faces are kept in construction slot order ([`Direction::ALL`]); the slot
/// identifies the physical face while its label moves under rotation. A
/// reverse table maps each direction to the slot currently facing it, so
/// the labels always form a bijection over the six directions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UnitCube {
    coord: Coord3,
    faces: [StickerFace; 6],
    slot_by_direction: [u8; 6],
}

impl UnitCube {
    /// A freshly assembled cube at `coord`: each slot faces its own
    /// direction, outer faces carry the palette color and are in play,
    /// interior faces are neutral.
    pub fn solved(coord: Coord3, size: CubeSize, palette: &Palette) -> Self {
        let faces = Direction::ALL.map(|d| {
            let in_play = d.points_outward(coord, size);
            let color = if in_play {
                palette.color(d)
            } else {
                Color::Neutral
            };
            StickerFace::new(d, color, in_play)
        });
        Self {
            coord,
            faces,
            slot_by_direction: [0, 1, 2, 3, 4, 5],
        }
    }

    /// Rebuild a cube from persisted faces.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::DuplicateDirection`] if two faces share a label.
    pub fn from_faces(coord: Coord3, faces: [StickerFace; 6]) -> Result<Self, GridError> {
        let slot_by_direction = Self::index_labels(&faces)
            .map_err(|direction| GridError::DuplicateDirection { coord, direction })?;
        Ok(Self {
            coord,
            faces,
            slot_by_direction,
        })
    }

    /// Build the direction → slot table, or return the first repeated label.
    fn index_labels(faces: &[StickerFace; 6]) -> Result<[u8; 6], Direction> {
        let mut table = [u8::MAX; 6];
        for (slot, face) in faces.iter().enumerate() {
            let entry = &mut table[face.direction.slot()];
            if *entry != u8::MAX {
                return Err(face.direction);
            }
            *entry = slot as u8;
        }
        Ok(table)
    }

    /// Lattice coordinate.
    pub fn coord(&self) -> Coord3 {
        self.coord
    }

    /// All six faces in slot order.
    pub fn faces(&self) -> &[StickerFace; 6] {
        &self.faces
    }

    /// The face currently pointing in `direction`.
    pub fn face(&self, direction: Direction) -> &StickerFace {
        &self.faces[self.slot_by_direction[direction.slot()] as usize]
    }

    /// Re-label every face for a quarter turn about `axis`.
    pub(crate) fn rotate_labels(&mut self, axis: Axis, turn: Turn) {
        for (slot, face) in self.faces.iter_mut().enumerate() {
            face.direction = face.direction.rotated(axis, turn);
            self.slot_by_direction[face.direction.slot()] = slot as u8;
        }
    }

    pub(crate) fn set_coord(&mut self, coord: Coord3) {
        self.coord = coord;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size3() -> CubeSize {
        CubeSize::new(3).unwrap()
    }

    #[test]
    fn solved_corner_has_three_outer_faces() {
        let cube = UnitCube::solved(Coord3::new(0, 2, 0), size3(), &Palette::default());
        let outer: Vec<Direction> = cube
            .faces()
            .iter()
            .filter(|f| f.in_play())
            .map(|f| f.direction())
            .collect();
        assert_eq!(outer, vec![Direction::Top, Direction::South, Direction::West]);
        assert_eq!(cube.face(Direction::Top).color(), Color::White);
        assert_eq!(cube.face(Direction::East).color(), Color::Neutral);
    }

    #[test]
    fn centre_cube_is_all_interior() {
        let cube = UnitCube::solved(Coord3::new(1, 1, 1), size3(), &Palette::default());
        assert!(cube.faces().iter().all(|f| !f.in_play()));
        assert!(cube.faces().iter().all(|f| f.color() == Color::Neutral));
    }

    #[test]
    fn face_lookup_follows_labels_after_rotation() {
        let mut cube = UnitCube::solved(Coord3::new(2, 2, 2), size3(), &Palette::default());
        cube.rotate_labels(Axis::Z, Turn::Positive);
        // The red east sticker now faces up.
        assert_eq!(cube.face(Direction::Top).color(), Color::Red);
        for d in Direction::ALL {
            assert_eq!(cube.face(d).direction(), d);
        }
    }

    #[test]
    fn duplicate_labels_rejected() {
        let coord = Coord3::new(0, 0, 0);
        let mut faces = Direction::ALL.map(|d| StickerFace::new(d, Color::Neutral, false));
        faces[1] = StickerFace::new(Direction::Top, Color::Neutral, false);
        assert_eq!(
            UnitCube::from_faces(coord, faces),
            Err(GridError::DuplicateDirection {
                coord,
                direction: Direction::Top
            })
        );
    }

    #[test]
    fn from_faces_accepts_permuted_labels() {
        let coord = Coord3::new(0, 0, 0);
        let faces = Direction::ALL.map(|d| StickerFace::new(d.opposite(), Color::Neutral, false));
        let cube = UnitCube::from_faces(coord, faces).unwrap();
        assert_eq!(cube.face(Direction::Top).direction(), Direction::Top);
        assert_eq!(cube.faces()[0].direction(), Direction::Bottom);
    }
}
