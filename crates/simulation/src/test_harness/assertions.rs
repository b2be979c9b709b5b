//! Assertion helpers for `TestNetwork` integration tests.

use crate::game_actions::ActionResult;
use crate::station::StationId;

use super::TestNetwork;

impl TestNetwork {
    // -----------------------------------------------------------------------
    // Assertions
    // -----------------------------------------------------------------------

    pub fn assert_score_at_least(&self, min: u32) {
        let score = self.score();
        assert!(score >= min, "Expected score >= {min}, got {score}");
    }

    /// Assert the path at `index` visits exactly `expected`, in order.
    pub fn assert_path_stations(&self, index: usize, expected: &[StationId]) {
        let actual = self.stations_of(index);
        assert_eq!(
            actual, expected,
            "Path {index} visits {actual:?}, expected {expected:?}"
        );
    }

    pub fn assert_waiting_at(&self, station: StationId, expected: usize) {
        let waiting = self.waiting_at(station);
        assert_eq!(
            waiting, expected,
            "Expected {expected} passengers waiting at station {station}, got {waiting}"
        );
    }

    pub fn assert_not_failed(&self) {
        let observation = self.observation();
        assert!(
            !observation.failed,
            "Network failed: max queue {}, tick {}",
            observation.max_queue, observation.tick
        );
    }

    pub fn assert_last_action_succeeded(&self) {
        match self.last_action_result() {
            Some(result) if result.is_success() => {}
            Some(ActionResult::Error(error)) => panic!("Last action failed: {error:?}"),
            other => panic!("Expected a successful action, got {other:?}"),
        }
    }
}
