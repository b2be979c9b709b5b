use std::collections::{BTreeSet, HashMap};

use pathfinding::prelude::bfs;

use crate::path::{Path, PathId};
use crate::station::StationId;

/// One station in the routing graph. Neighbour and path sets are ordered so
/// searches are reproducible.
#[derive(Debug, Clone)]
pub struct GraphNode {
    pub station: StationId,
    pub neighbors: BTreeSet<usize>,
    pub paths: BTreeSet<PathId>,
}

/// Per-search station graph. Owns its nodes; nothing outlives the search.
#[derive(Debug, Clone, Default)]
pub struct StationGraph {
    nodes: Vec<GraphNode>,
    index: HashMap<StationId, usize>,
}

impl StationGraph {
    /// Build a node for every station and link consecutive stations of every
    /// finished path. Looped paths also link their last and first stations.
    pub fn build(stations: impl IntoIterator<Item = StationId>, paths: &[Path]) -> Self {
        let mut graph = Self::default();
        for station in stations {
            graph.node_index(station);
        }
        for path in paths.iter().filter(|p| !p.is_being_created) {
            let ids: Vec<StationId> = path.station_ids().collect();
            for &id in &ids {
                let node = graph.node_index(id);
                graph.nodes[node].paths.insert(path.id);
            }
            for pair in ids.windows(2) {
                graph.link(pair[0], pair[1]);
            }
            if path.is_looped() && ids.len() > 2 {
                graph.link(ids[ids.len() - 1], ids[0]);
            }
        }
        graph
    }

    fn node_index(&mut self, station: StationId) -> usize {
        if let Some(&index) = self.index.get(&station) {
            return index;
        }
        let index = self.nodes.len();
        self.nodes.push(GraphNode {
            station,
            neighbors: BTreeSet::new(),
            paths: BTreeSet::new(),
        });
        self.index.insert(station, index);
        index
    }

    fn link(&mut self, a: StationId, b: StationId) {
        let ia = self.node_index(a);
        let ib = self.node_index(b);
        self.nodes[ia].neighbors.insert(ib);
        self.nodes[ib].neighbors.insert(ia);
    }

    pub fn node(&self, station: StationId) -> Option<&GraphNode> {
        self.index.get(&station).map(|&i| &self.nodes[i])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Paths serving `station` (empty when it is on no finished path).
    pub fn paths_of(&self, station: StationId) -> BTreeSet<PathId> {
        self.node(station).map(|n| n.paths.clone()).unwrap_or_default()
    }

    /// Fewest-hop route from `start` to `end`, both included. Empty when
    /// `end` is unreachable or either station is unknown.
    pub fn search(&self, start: StationId, end: StationId) -> Vec<StationId> {
        let (Some(&from), Some(&to)) = (self.index.get(&start), self.index.get(&end)) else {
            return Vec::new();
        };
        bfs(
            &from,
            |&node| self.nodes[node].neighbors.iter().copied().collect::<Vec<_>>(),
            |&node| node == to,
        )
        .map(|route| route.into_iter().map(|i| self.nodes[i].station).collect())
        .unwrap_or_default()
    }
}
