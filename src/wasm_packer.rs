//! Flat `f64` buffers exchanged with the wasm host.
//!
//! Layout: `[count, size_0, .., size_{count-1}, x, y, x, y, ..]` where sizes are point counts.
//! Output sizes are negated for holes; input sizes are read by magnitude so a result can be
//! passed straight back in.

use crate::geometry::{
    point::Point,
    polygon::{Contour, Polygon},
};

fn read_count(value: f64) -> Option<usize> {
    let value = value.abs();
    if !value.is_finite() || value.fract() != 0.0 || value > u32::MAX as f64 {
        return None;
    }

    Some(value as usize)
}

/// `None` when the header does not match the buffer length.
pub fn unpack_polygons(buffer: &[f64]) -> Option<Vec<Polygon>> {
    if buffer.is_empty() {
        return Some(Vec::new());
    }

    let count = read_count(buffer[0])?;
    let header_len = count.checked_add(1)?;
    let sizes = buffer.get(1..header_len)?;
    let mut offset = header_len;
    let mut result = Vec::with_capacity(count);

    for size in sizes {
        let point_count = read_count(*size)?;
        let end = point_count.checked_mul(2)?.checked_add(offset)?;
        let data = buffer.get(offset..end)?;

        result.push(
            data.chunks_exact(2)
                .map(|chunk| Point::new(chunk[0], chunk[1]))
                .collect(),
        );
        offset = end;
    }

    if offset != buffer.len() {
        return None;
    }

    Some(result)
}

pub fn pack_contours(contours: &[Contour]) -> Vec<f64> {
    let total_points: usize = contours.iter().map(|contour| contour.points.len()).sum();
    let header_len = 1 + contours.len();
    let mut result = Vec::with_capacity(header_len + total_points * 2);

    result.push(contours.len() as f64);

    for contour in contours {
        let size = contour.points.len() as f64;
        result.push(if contour.is_hole { -size } else { size });
    }

    for contour in contours {
        for point in &contour.points {
            result.push(point.x);
            result.push(point.y);
        }
    }

    result
}
