//! petgraph-based directed graph view of a parsed diagram.
//!
//! Edge endpoints that name no declared node still get a vertex, marked as a
//! placeholder, so that dangling references never break graph algorithms.

use std::collections::{HashMap, HashSet};

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::{Bfs, EdgeRef};

use super::types::{FlowDiagram, GraphEdge};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    pub id: String,
    /// True when the id only appears as an edge endpoint.
    pub placeholder: bool,
}

pub struct DiagramGraph {
    /// Edge weights are indices into `FlowDiagram::edges`.
    pub graph: DiGraph<Vertex, usize>,
    pub node_indices: HashMap<String, NodeIndex>,
}

impl DiagramGraph {
    pub fn build(diagram: &FlowDiagram) -> Self {
        let mut graph = DiGraph::new();
        let mut node_indices = HashMap::new();

        for id in diagram.nodes.keys() {
            let idx = graph.add_node(Vertex {
                id: id.clone(),
                placeholder: false,
            });
            node_indices.insert(id.clone(), idx);
        }

        for (position, edge) in diagram.edges.iter().enumerate() {
            let source = vertex_for(&mut graph, &mut node_indices, &edge.from);
            let target = vertex_for(&mut graph, &mut node_indices, &edge.to);
            graph.add_edge(source, target, position);
        }

        DiagramGraph {
            graph,
            node_indices,
        }
    }

    /// Ids reachable from `start` (inclusive) along edge direction.
    pub fn reachable_from(&self, start: &str) -> HashSet<&str> {
        let mut reachable = HashSet::new();
        let Some(&start_idx) = self.node_indices.get(start) else {
            return reachable;
        };
        let mut bfs = Bfs::new(&self.graph, start_idx);
        while let Some(nx) = bfs.next(&self.graph) {
            reachable.insert(self.graph[nx].id.as_str());
        }
        reachable
    }

    /// Outgoing edges of `node_id` in declaration order.
    pub fn outgoing_edges<'d>(&self, diagram: &'d FlowDiagram, node_id: &str) -> Vec<&'d GraphEdge> {
        let Some(&idx) = self.node_indices.get(node_id) else {
            return vec![];
        };
        let mut positions: Vec<usize> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| *e.weight())
            .collect();
        positions.sort_unstable();
        positions
            .into_iter()
            .filter_map(|p| diagram.edges.get(p))
            .collect()
    }
}

fn vertex_for(
    graph: &mut DiGraph<Vertex, usize>,
    node_indices: &mut HashMap<String, NodeIndex>,
    id: &str,
) -> NodeIndex {
    if let Some(&idx) = node_indices.get(id) {
        return idx;
    }
    let idx = graph.add_node(Vertex {
        id: id.to_string(),
        placeholder: true,
    });
    node_indices.insert(id.to_string(), idx);
    idx
}
