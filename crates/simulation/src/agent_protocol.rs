//! Agent text protocol types for the `--agent` headless mode.
//!
//! External programs drive the network over newline-delimited JSON: one
//! [`AgentCommand`] per stdin line, one [`AgentResponse`] per stdout line.
//! The I/O loop itself lives in `crates/app/src/agent_mode.rs`.

use serde::{Deserialize, Serialize};

use crate::game_actions::{ActionResult, GameAction};
use crate::network_observation::NetworkObservation;

// ---------------------------------------------------------------------------
// Commands (stdin → simulation)
// ---------------------------------------------------------------------------

/// A single command sent by the external agent. The `cmd` field is the tag.
#[derive(Debug, Deserialize)]
#[serde(tag = "cmd")]
pub enum AgentCommand {
    #[serde(rename = "observe")]
    Observe,

    /// Execute one game action before the next tick.
    #[serde(rename = "act")]
    Act { action: GameAction },

    /// Execute several game actions in order.
    #[serde(rename = "batch_act")]
    BatchAct { actions: Vec<GameAction> },

    /// Advance the simulation by `ticks` fixed-update ticks.
    #[serde(rename = "step")]
    Step { ticks: u64 },

    /// Regenerate the stations from `seed` and drop every path.
    #[serde(rename = "new_game")]
    NewGame { seed: u64 },

    #[serde(rename = "quit")]
    Quit,
}

// ---------------------------------------------------------------------------
// Responses (simulation → stdout)
// ---------------------------------------------------------------------------

/// Every response carries the protocol version next to a tagged payload.
#[derive(Debug, Serialize)]
pub struct AgentResponse {
    pub protocol_version: u32,
    #[serde(flatten)]
    pub payload: ResponsePayload,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum ResponsePayload {
    #[serde(rename = "ready")]
    Ready,

    #[serde(rename = "observation")]
    Observation { observation: NetworkObservation },

    #[serde(rename = "action_result")]
    ActionResult { result: ActionResult },

    #[serde(rename = "batch_result")]
    BatchResult { results: Vec<ActionResult> },

    /// Reports the tick counter after stepping.
    #[serde(rename = "step_complete")]
    StepComplete { tick: u64 },

    #[serde(rename = "ok")]
    Ok,

    #[serde(rename = "error")]
    Error { message: String },

    #[serde(rename = "goodbye")]
    Goodbye,
}

/// Bump when the command/response schema changes.
pub const PROTOCOL_VERSION: u32 = 1;

pub fn make_response(payload: ResponsePayload) -> AgentResponse {
    AgentResponse {
        protocol_version: PROTOCOL_VERSION,
        payload,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_actions::ActionError;
    use crate::path_editing::EditCommand;

    #[test]
    fn deserialize_observe_command() {
        let cmd: AgentCommand = serde_json::from_str(r#"{"cmd":"observe"}"#).unwrap();
        assert!(matches!(cmd, AgentCommand::Observe));
    }

    #[test]
    fn deserialize_act_command() {
        let json = r#"{"cmd":"act","action":{"CreatePath":{"stations":[0,4,2],"close_loop":false}}}"#;
        let cmd: AgentCommand = serde_json::from_str(json).unwrap();
        match cmd {
            AgentCommand::Act { action } => assert_eq!(
                action,
                GameAction::CreatePath {
                    stations: vec![0, 4, 2],
                    close_loop: false
                }
            ),
            other => panic!("expected Act, got {other:?}"),
        }
    }

    #[test]
    fn deserialize_batch_of_gestures() {
        let json = r#"{"cmd":"batch_act","actions":[
            {"StartPath":{"station":1}},
            {"Gesture":{"command":{"Motion":3}}},
            {"Gesture":{"command":"Down"}}
        ]}"#;
        let cmd: AgentCommand = serde_json::from_str(json).unwrap();
        let AgentCommand::BatchAct { actions } = cmd else {
            panic!("expected BatchAct");
        };
        assert_eq!(actions.len(), 3);
        assert_eq!(
            actions[2],
            GameAction::Gesture {
                command: EditCommand::Down
            }
        );
    }

    #[test]
    fn deserialize_step_and_new_game() {
        let cmd: AgentCommand = serde_json::from_str(r#"{"cmd":"step","ticks":100}"#).unwrap();
        assert!(matches!(cmd, AgentCommand::Step { ticks: 100 }));
        let cmd: AgentCommand = serde_json::from_str(r#"{"cmd":"new_game","seed":42}"#).unwrap();
        assert!(matches!(cmd, AgentCommand::NewGame { seed: 42 }));
        let cmd: AgentCommand = serde_json::from_str(r#"{"cmd":"quit"}"#).unwrap();
        assert!(matches!(cmd, AgentCommand::Quit));
    }

    #[test]
    fn serialize_ready_response() {
        let json = serde_json::to_string(&make_response(ResponsePayload::Ready)).unwrap();
        assert!(json.contains("\"protocol_version\":1"));
        assert!(json.contains("\"type\":\"ready\""));
    }

    #[test]
    fn serialize_observation_response() {
        let resp = make_response(ResponsePayload::Observation {
            observation: NetworkObservation::default(),
        });
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"type\":\"observation\""));
        assert!(json.contains("\"max_queue\":0"));
        assert!(json.contains("\"failed\":false"));
    }

    #[test]
    fn serialize_action_results() {
        let resp = make_response(ResponsePayload::BatchResult {
            results: vec![
                ActionResult::Success,
                ActionResult::Error(ActionError::SegmentOccupied),
            ],
        });
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"type\":\"batch_result\""));
        assert!(json.contains("SegmentOccupied"));
    }

    #[test]
    fn serialize_step_complete_response() {
        let resp = make_response(ResponsePayload::StepComplete { tick: 42 });
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"type\":\"step_complete\""));
        assert!(json.contains("\"tick\":42"));
    }

    #[test]
    fn serialize_error_and_goodbye() {
        let resp = make_response(ResponsePayload::Error {
            message: "bad line".to_string(),
        });
        assert!(serde_json::to_string(&resp).unwrap().contains("bad line"));
        let resp = make_response(ResponsePayload::Goodbye);
        assert!(serde_json::to_string(&resp)
            .unwrap()
            .contains("\"type\":\"goodbye\""));
    }

    #[test]
    fn unknown_or_malformed_commands_fail_to_parse() {
        assert!(serde_json::from_str::<AgentCommand>(r#"{"cmd":"query","layers":[]}"#).is_err());
        assert!(serde_json::from_str::<AgentCommand>(r#"{not valid json"#).is_err());
    }
}
