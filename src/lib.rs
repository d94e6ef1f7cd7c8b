use log::{warn, LevelFilter};
use wasm_bindgen::prelude::*;
use web_sys::js_sys::Float64Array;

pub mod clipper;
pub mod clipper_config;
pub mod geometry;
pub mod utils;
pub mod wasm_packer;

pub use crate::clipper::{ClipError, ClipType, Clipper, PolyFillType, PolyType};
pub use crate::clipper_config::ClipperConfig;
pub use crate::geometry::point::Point;
pub use crate::geometry::polygon::{Contour, Polygon};

use crate::geometry::polygon::polygon_area as signed_area;
use crate::wasm_packer::{pack_contours, unpack_polygons};

fn to_level_filter(level: u8) -> LevelFilter {
    match level {
        0 => LevelFilter::Off,
        1 => LevelFilter::Error,
        2 => LevelFilter::Warn,
        3 => LevelFilter::Info,
        4 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

#[wasm_bindgen]
pub fn init_logger(level: u8) -> bool {
    utils::wasm_logger::init(to_level_filter(level))
}

/// Signed area of a flat `[x0, y0, x1, y1, ..]` ring.
#[wasm_bindgen]
pub fn polygon_area(points: &[f64]) -> f64 {
    let polygon: Polygon = points
        .chunks_exact(2)
        .map(|chunk| Point::new(chunk[0], chunk[1]))
        .collect();

    signed_area(&polygon)
}

/// Runs one boolean operation over packed buffers (see `wasm_packer`).
/// An empty vector means the run was rejected; an empty result is `[0.0]`.
pub fn clip_packed(config: u32, clip_type: u8, subject: &[f64], clip: &[f64]) -> Vec<f64> {
    let clip_type = match ClipType::from_u8(clip_type) {
        Some(clip_type) => clip_type,
        None => {
            warn!("unknown clip type {}", clip_type);
            return Vec::new();
        }
    };

    let (subject, clip) = match (unpack_polygons(subject), unpack_polygons(clip)) {
        (Some(subject), Some(clip)) => (subject, clip),
        _ => {
            warn!("malformed polygon buffer");
            return Vec::new();
        }
    };

    let mut clipper = Clipper::with_config(ClipperConfig::from(config));
    clipper.add_polygons(&subject, PolyType::Subject);
    clipper.add_polygons(&clip, PolyType::Clip);

    match clipper.execute(clip_type) {
        Ok(contours) => pack_contours(&contours),
        Err(_) => Vec::new(),
    }
}

#[wasm_bindgen]
pub fn clip_polygons(config: u32, clip_type: u8, subject: &[f64], clip: &[f64]) -> Float64Array {
    let packed = clip_packed(config, clip_type, subject, clip);
    let out = Float64Array::new_with_length(packed.len() as u32);

    out.copy_from(&packed);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn flat_polygon_area() {
        assert_relative_eq!(polygon_area(&[0.0, 0.0, 2.0, 0.0, 2.0, 3.0, 0.0, 3.0]), 6.0);
        assert_relative_eq!(polygon_area(&[0.0, 0.0, 2.0, 0.0]), 0.0);
    }

    #[test]
    fn clip_packed_rejects_bad_input() {
        let square = [1.0, 4.0, 0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0];
        let config = ClipperConfig::default().serialize();

        assert!(clip_packed(config, 9, &square, &[]).is_empty());
        assert!(clip_packed(config, 1, &[2.0, 4.0], &[]).is_empty());
    }

    #[test]
    fn clip_packed_intersection_of_overlapping_squares() {
        let subject = [1.0, 4.0, 0.0, 0.0, 2.0, 0.0, 2.0, 2.0, 0.0, 2.0];
        let clip = [1.0, 4.0, 1.0, 1.0, 3.0, 1.0, 3.0, 3.0, 1.0, 3.0];
        let config = ClipperConfig::default().serialize();

        let packed = clip_packed(config, ClipType::Intersection as u8, &subject, &clip);

        assert_eq!(&packed[..2], &[1.0, 4.0]);
        assert_relative_eq!(polygon_area(&packed[2..]), 1.0);
    }
}
