//! Binary encode/decode for saved layouts.
//!
//! All integers are little-endian. Directions are stored by slot
//! ([`Direction::slot`]) and colors by [`Color::tag`]. Decoding checks the
//! container; [`load_grid`] additionally runs the layout through
//! [`import_state`].

use std::io::{Read, Write};

use cubik_core::{Color, CubeSize, Direction};
use cubik_grid::CubeGrid;
use log::debug;

use crate::error::PersistError;
use crate::layout::{export_state, import_state, FaceRecord, PersistedCube, PersistedLayout};
use crate::{FORMAT_VERSION, MAGIC};

// ── Primitives ──────────────────────────────────────────────────

/// Write a single byte.
pub fn write_u8(w: &mut dyn Write, v: u8) -> Result<(), PersistError> {
    w.write_all(&[v])?;
    Ok(())
}

/// Write a little-endian u32.
pub fn write_u32_le(w: &mut dyn Write, v: u32) -> Result<(), PersistError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Read a single byte.
pub fn read_u8(r: &mut dyn Read) -> Result<u8, PersistError> {
    let mut buf = [0u8; 1];
    r.read_exact(&mut buf)?;
    Ok(buf[0])
}

/// Read a little-endian u32.
pub fn read_u32_le(r: &mut dyn Read) -> Result<u32, PersistError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

fn narrow_u8(value: usize, what: &str) -> Result<u8, PersistError> {
    u8::try_from(value).map_err(|_| PersistError::MalformedRecord {
        detail: format!("{what} {value} does not fit in a byte"),
    })
}

// ── Layout ──────────────────────────────────────────────────────

/// Write `layout` with the magic/version header.
///
/// The layout is written as given; it is not validated against the grid
/// rules.
///
/// # Errors
///
/// [`PersistError::Io`] on write failure, or
/// [`PersistError::MalformedRecord`] if a count does not fit its field.
pub fn encode_layout(w: &mut dyn Write, layout: &PersistedLayout) -> Result<(), PersistError> {
    w.write_all(&MAGIC)?;
    write_u8(w, FORMAT_VERSION)?;
    write_u8(w, narrow_u8(layout.cube_size, "cube size")?)?;
    let count = u32::try_from(layout.cubes.len()).map_err(|_| PersistError::MalformedRecord {
        detail: format!("{} cube records do not fit in a u32", layout.cubes.len()),
    })?;
    write_u32_le(w, count)?;
    for cube in &layout.cubes {
        write_u8(w, narrow_u8(cube.faces.len(), "face count")?)?;
        for face in &cube.faces {
            write_u8(w, u8::from(face.in_play))?;
            write_u8(w, face.direction.slot() as u8)?;
            write_u8(w, face.color.tag())?;
        }
    }
    Ok(())
}

/// Read a layout written by [`encode_layout`].
///
/// # Errors
///
/// - [`PersistError::InvalidMagic`] / [`PersistError::UnsupportedVersion`]
///   for a foreign or newer container.
/// - [`PersistError::Io`] for truncated input.
/// - [`PersistError::UnknownDirection`] / [`PersistError::UnknownColor`]
///   for unrecognized tags.
/// - [`PersistError::MalformedRecord`] for an in-play byte other than 0 or 1.
pub fn decode_layout(r: &mut dyn Read) -> Result<PersistedLayout, PersistError> {
    let mut magic = [0u8; 4];
    r.read_exact(&mut magic)?;
    if magic != MAGIC {
        return Err(PersistError::InvalidMagic);
    }
    let version = read_u8(r)?;
    if version != FORMAT_VERSION {
        return Err(PersistError::UnsupportedVersion { found: version });
    }
    let cube_size = read_u8(r)? as usize;
    let count = read_u32_le(r)? as usize;

    // A corrupt count must not drive a huge allocation.
    let max_cells = CubeSize::MAX * CubeSize::MAX * CubeSize::MAX;
    let mut cubes = Vec::with_capacity(count.min(max_cells));
    for index in 0..count {
        let face_count = read_u8(r)? as usize;
        let mut faces = Vec::with_capacity(face_count);
        for _ in 0..face_count {
            let in_play = match read_u8(r)? {
                0 => false,
                1 => true,
                other => {
                    return Err(PersistError::MalformedRecord {
                        detail: format!("cube {index}: in-play byte {other}"),
                    })
                }
            };
            let tag = read_u8(r)?;
            let direction =
                Direction::from_slot(tag as usize).ok_or(PersistError::UnknownDirection { tag })?;
            let tag = read_u8(r)?;
            let color = Color::from_tag(tag).ok_or(PersistError::UnknownColor { tag })?;
            faces.push(FaceRecord {
                in_play,
                direction,
                color,
            });
        }
        cubes.push(PersistedCube { faces });
    }
    Ok(PersistedLayout { cube_size, cubes })
}

/// Export `grid` and write it.
///
/// # Errors
///
/// See [`encode_layout`].
pub fn save_grid(w: &mut dyn Write, grid: &CubeGrid) -> Result<(), PersistError> {
    encode_layout(w, &export_state(grid))?;
    debug!("saved {} grid", grid.size());
    Ok(())
}

/// Read and import a grid.
///
/// # Errors
///
/// See [`decode_layout`]; additionally [`PersistError::Import`] if the
/// decoded layout is not a valid grid.
pub fn load_grid(r: &mut dyn Read) -> Result<CubeGrid, PersistError> {
    let layout = decode_layout(r)?;
    Ok(import_state(&layout)?)
}
