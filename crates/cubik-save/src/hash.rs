//! FNV-1a fingerprints of grid state.
//!
//! Not cryptographically secure; used for fast equality checks such as
//! confirming that two seeded scrambles produced the same grid.

use cubik_grid::CubeGrid;

use crate::layout::{export_state, PersistedLayout};

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Hash a layout: the edge length, then every face of every cube in order.
///
/// The cube count is folded in so that layouts differing only by a
/// truncated tail hash differently.
pub fn layout_fingerprint(layout: &PersistedLayout) -> u64 {
    let mut hash = fnv1a_u32(FNV_OFFSET, layout.cube_size as u32);
    hash = fnv1a_u32(hash, layout.cubes.len() as u32);
    for cube in &layout.cubes {
        hash = fnv1a_byte(hash, cube.faces.len() as u8);
        for face in &cube.faces {
            hash = fnv1a_byte(hash, u8::from(face.in_play));
            hash = fnv1a_byte(hash, face.direction.slot() as u8);
            hash = fnv1a_byte(hash, face.color.tag());
        }
    }
    hash
}

/// Hash a grid's exported layout.
pub fn grid_fingerprint(grid: &CubeGrid) -> u64 {
    layout_fingerprint(&export_state(grid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubik_core::{Axis, Turn};

    #[test]
    fn equal_grids_hash_equal() {
        let a = CubeGrid::new(3).unwrap();
        let b = CubeGrid::new(3).unwrap();
        assert_eq!(grid_fingerprint(&a), grid_fingerprint(&b));
    }

    #[test]
    fn a_move_changes_the_hash() {
        let a = CubeGrid::new(3).unwrap();
        let mut b = a.clone();
        b.rotate_layer(Axis::Z, 1, Turn::Positive).unwrap();
        assert_ne!(grid_fingerprint(&a), grid_fingerprint(&b));
    }

    #[test]
    fn size_is_part_of_the_hash() {
        let a = CubeGrid::new(2).unwrap();
        let b = CubeGrid::new(3).unwrap();
        assert_ne!(grid_fingerprint(&a), grid_fingerprint(&b));
    }

    #[test]
    fn empty_layout_is_nonzero() {
        let layout = PersistedLayout {
            cube_size: 0,
            cubes: vec![],
        };
        assert_ne!(layout_fingerprint(&layout), 0);
    }
}
