//! Interactive path editing.
//!
//! An editing session is a small state machine fed one [`EditCommand`] per
//! input event. Creating and expanding sessions share the [`PathEdit`]
//! contract; intermediate-station editing is a separate one-shot mode.
//! At most one session exists network-wide (see `path_manager`).
//!
//! | command            | creating / expanding          | intermediate        |
//! |--------------------|-------------------------------|---------------------|
//! | `Motion(station)`  | add the station               | insert/remove it    |
//! | `Up(Some(station))`| try to end on the station     | stop                |
//! | `Up(None)`         | try to end on the last station| stop                |
//! | `Down`             | abort                         | stop                |

pub mod creating;
pub mod error;
pub mod expanding;
pub mod intermediate;
mod tests;

pub use creating::CreatingPath;
pub use error::EditError;
pub use expanding::ExpandingPath;
pub use intermediate::EditingIntermediateStations;

use serde::{Deserialize, Serialize};

use crate::network::NetworkComponents;
use crate::path::PathId;
use crate::station::StationId;

/// One input event, already resolved to the station under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditCommand {
    Motion(StationId),
    Up(Option<StationId>),
    Down,
}

/// Whether the session wants more commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionFlow {
    Continue,
    Done,
}

/// Shared contract of the creating and expanding sessions.
pub trait PathEdit {
    fn path_id(&self) -> PathId;
    fn is_active(&self) -> bool;

    fn add_station(&mut self, network: &mut NetworkComponents, station: StationId);
    fn try_end_on_station(&mut self, network: &mut NetworkComponents, station: StationId);
    fn try_end_on_last_station(&mut self, network: &mut NetworkComponents);
    fn abort(&mut self, network: &mut NetworkComponents);

    /// Consume one command and report whether the session continues.
    fn handle(&mut self, network: &mut NetworkComponents, command: EditCommand) -> SessionFlow {
        assert!(self.is_active(), "command sent to a finished editing session");
        match command {
            EditCommand::Motion(station) => self.add_station(network, station),
            EditCommand::Up(Some(station)) => self.try_end_on_station(network, station),
            EditCommand::Up(None) => self.try_end_on_last_station(network),
            EditCommand::Down => self.abort(network),
        }
        if self.is_active() {
            SessionFlow::Continue
        } else {
            SessionFlow::Done
        }
    }
}
