// Boolean polygon clipping: edge arena, sweep state and output ring assembly

pub mod clipper;
pub mod constants;
pub mod contributing;
pub mod enums;
pub mod error;
pub mod intersect_node;
pub mod local_minima;
pub mod out_rec;
pub mod scanbeam;
pub mod t_edge;
pub mod utils;

#[cfg(test)]
pub mod tests;

pub use clipper::Clipper;
pub use enums::*;
pub use error::ClipError;
