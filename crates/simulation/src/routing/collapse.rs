use std::collections::BTreeSet;

use super::graph::StationGraph;
use crate::path::PathId;
use crate::station::StationId;

/// Collapse a stop-by-stop route into a board-until-transfer route.
///
/// Consecutive stations are merged into one run while the intersection of
/// their path sets stays non-empty; only run endpoints are kept. Routes of
/// two stations or fewer are returned unchanged.
pub fn skip_same_path(route: &[StationId], graph: &StationGraph) -> Vec<StationId> {
    if route.len() <= 2 {
        return route.to_vec();
    }

    let mut kept = vec![route[0]];
    let mut running: BTreeSet<PathId> = graph.paths_of(route[0]);
    for (i, &station) in route.iter().enumerate().skip(1) {
        let paths = graph.paths_of(station);
        let shared: BTreeSet<PathId> = running.intersection(&paths).copied().collect();
        if shared.is_empty() {
            // The run ended at the previous station; a new one starts there.
            let transfer = route[i - 1];
            kept.push(transfer);
            running = graph
                .paths_of(transfer)
                .intersection(&paths)
                .copied()
                .collect();
        } else {
            running = shared;
        }
    }
    if let Some(&last) = route.last() {
        kept.push(last);
    }
    kept
}
