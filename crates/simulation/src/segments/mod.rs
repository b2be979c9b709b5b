//! Segments: the pieces a path is cut into.
//!
//! A path over stations `[A, B, C]` becomes
//! `Path(A,B) → Padding(A,B,C) → Path(B,C)`: one path segment per
//! consecutive pair, joined by padding (corner) segments. Looped paths add
//! the closing pair and the closing corners.

pub mod derive;
mod tests;
pub mod types;

pub use derive::{derive_segment_kinds, link_segments};
pub use types::*;
