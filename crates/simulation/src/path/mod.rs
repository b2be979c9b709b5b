//! Paths (metro lines).
//!
//! A `Path` owns its ordered stations, the segments derived from them, the
//! travel ring its metros follow and the metros themselves. Any change to
//! the station list or the loop flag rebuilds segments and ring in one go
//! and re-points every metro onto the new ring.

mod movement;
pub mod state;

pub use state::Path;

pub type PathId = u32;
