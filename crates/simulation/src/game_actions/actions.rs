use serde::{Deserialize, Serialize};

use crate::path::PathId;
use crate::path_editing::EditCommand;
use crate::station::StationId;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum GameAction {
    NewGame {
        seed: u64,
    },
    SetPaused {
        paused: bool,
    },
    SetSpeed {
        speed: u32,
    },
    AllowSteps {
        steps: u32,
    },
    /// Draw a whole path in one go, optionally closing it into a loop.
    CreatePath {
        stations: Vec<StationId>,
        close_loop: bool,
    },
    /// Extend `path` from its terminus `from` to `to`.
    ExpandPath {
        path: PathId,
        from: StationId,
        to: StationId,
    },
    RemovePath {
        path: PathId,
    },
    InsertStation {
        path: PathId,
        segment_start: StationId,
        segment_end: StationId,
        station: StationId,
    },
    RemoveStation {
        path: PathId,
        station: StationId,
    },
    /// Open a creating session, to be driven by `Gesture`s.
    StartPath {
        station: StationId,
    },
    /// Open an expanding session on the `index`-th path at `station`.
    StartExpanding {
        station: StationId,
        index: usize,
    },
    Gesture {
        command: EditCommand,
    },
}
