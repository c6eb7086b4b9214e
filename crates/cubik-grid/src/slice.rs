//! Slice selection and the in-plane quarter-turn formula.
//!
//! A slice (layer) is every cell whose coordinate along the rotation axis
//! equals the layer index. A quarter turn keeps that coordinate and maps
//! the two in-plane components `(a, b)`, taken in [`Axis::plane`] order,
//! to `(N-1-b, a)` for +90° or `(b, N-1-a)` for -90°. The formula is exact
//! integer arithmetic and maps the slice onto itself.

use cubik_core::{Axis, Coord3, CubeSize, Turn};
use smallvec::SmallVec;

/// Row-major indices of one slice. A 6×6 face is the largest slice.
pub type LayerIndices = SmallVec<[usize; 36]>;

/// Row-major indices of every cell whose `axis` component equals `layer`,
/// in ascending order. Empty if `layer` is not below the edge length.
pub fn layer_indices(size: CubeSize, axis: Axis, layer: usize) -> LayerIndices {
    let n = size.get();
    let mut out = LayerIndices::new();
    if layer >= n {
        return out;
    }
    let (a, b) = axis.plane();
    for i in 0..n {
        for j in 0..n {
            let coord = Coord3::new(0, 0, 0)
                .with_component(axis, layer as i32)
                .with_component(a, i as i32)
                .with_component(b, j as i32);
            if let Some(index) = size.index_of(coord) {
                out.push(index);
            }
        }
    }
    out.sort_unstable();
    out
}

/// Where `coord` lands after a quarter turn of its slice about `axis`.
pub fn rotate_coord(coord: Coord3, axis: Axis, turn: Turn, size: CubeSize) -> Coord3 {
    let edge = size.get() as i32 - 1;
    let (pa, pb) = axis.plane();
    let a = coord.component(pa);
    let b = coord.component(pb);
    let (na, nb) = match turn {
        Turn::Positive => (edge - b, a),
        Turn::Negative => (b, edge - a),
    };
    coord.with_component(pa, na).with_component(pb, nb)
}
