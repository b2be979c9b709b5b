//! Passenger routing over the current line network.
//!
//! Routes are found on a throwaway [`StationGraph`] built from every path
//! that is not mid-creation, searched breadth-first (every hop costs the
//! same), then collapsed so a passenger only stops where they must change
//! lines.

pub mod collapse;
pub mod graph;
pub mod lines;

pub use collapse::skip_same_path;
pub use graph::{GraphNode, StationGraph};
pub use lines::LineIndex;
