use serde::{Deserialize, Serialize};

use crate::path_editing::EditError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActionResult {
    Success,
    /// The action succeeded but produced a warning the caller should see
    /// (e.g. a clamped speed).
    SuccessWithWarning(String),
    Error(ActionError),
}

impl ActionResult {
    /// Returns `true` for both `Success` and `SuccessWithWarning`.
    pub fn is_success(&self) -> bool {
        matches!(self, ActionResult::Success | ActionResult::SuccessWithWarning(_))
    }

    /// Extract the warning string if present.
    pub fn warning(&self) -> Option<&str> {
        match self {
            ActionResult::SuccessWithWarning(w) => Some(w.as_str()),
            _ => None,
        }
    }
}

impl From<Result<(), ActionError>> for ActionResult {
    fn from(result: Result<(), ActionError>) -> Self {
        match result {
            Ok(()) => ActionResult::Success,
            Err(e) => ActionResult::Error(e),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActionError {
    SessionActive,
    NoActiveSession,
    LimitReached,
    NotFound,
    NotATerminus,
    PathIsLooped,
    SegmentOccupied,
    TooFewStations,
    AlreadyExists,
    InvalidParameter(String),
}

impl From<EditError> for ActionError {
    fn from(error: EditError) -> Self {
        match error {
            EditError::SessionActive => ActionError::SessionActive,
            EditError::NoActiveSession => ActionError::NoActiveSession,
            EditError::PathLimitReached | EditError::NoColorAvailable => ActionError::LimitReached,
            EditError::StationNotFound(_)
            | EditError::PathNotFound(_)
            | EditError::NoPathAtStation(_)
            | EditError::NoSegmentAtPosition => ActionError::NotFound,
            EditError::NotATerminus(_) => ActionError::NotATerminus,
            EditError::PathIsLooped(_) => ActionError::PathIsLooped,
            EditError::SegmentOccupied => ActionError::SegmentOccupied,
            EditError::TooFewStations => ActionError::TooFewStations,
        }
    }
}
