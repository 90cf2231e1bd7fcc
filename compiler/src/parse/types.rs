//! Graph IR produced by the diagram parser and consumed by the transformer.
//!
//! All collections keep insertion order: node order in the diagram text is the
//! order of the generated script, so it must not depend on hashing.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::shape::ShapeKind;

// =============================================================================
// DIAGRAM
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowDiagram {
    /// Direction from the `flowchart TD` header, if one was present.
    pub direction: Option<Direction>,
    pub nodes: IndexMap<String, GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub subgraphs: IndexMap<String, Subgraph>,
    /// `classDef` name → verbatim style string, minus any trailing `;`.
    pub style_classes: IndexMap<String, String>,
}

impl FlowDiagram {
    /// Outgoing edges of `id`, in declaration order.
    pub fn outgoing<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a GraphEdge> + 'a {
        self.edges.iter().filter(move |e| e.from == id)
    }

    /// Edge endpoints that name no declared node.
    pub fn dangling_references(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for edge in &self.edges {
            for id in [edge.from.as_str(), edge.to.as_str()] {
                if !self.nodes.contains_key(id) && !out.contains(&id) {
                    out.push(id);
                }
            }
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    TopDown,
    BottomUp,
    LeftRight,
    RightLeft,
}

// =============================================================================
// NODES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: String,
    /// Display text exactly as written between the quotes.
    pub text: String,
    pub shape: ShapeKind,
    /// Style classes in assignment order. Duplicates are harmless.
    pub classes: Vec<String>,
    /// Innermost subgraph open at declaration time.
    pub subgraph: Option<String>,
}

// =============================================================================
// EDGES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    pub label: Option<String>,
    /// Trailing annotation after the edge's target, kept verbatim.
    pub style: Option<String>,
    pub link: LinkKind,
}

/// Visual style of the arrow token. Recorded, never interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkKind {
    pub stroke: Stroke,
    pub head: bool,
}

impl Default for LinkKind {
    fn default() -> Self {
        LinkKind {
            stroke: Stroke::Solid,
            head: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Stroke {
    Solid,
    Dotted,
    Thick,
}

// =============================================================================
// SUBGRAPHS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subgraph {
    pub id: String,
    /// Defaults to the id when no bracketed title is given.
    pub title: String,
    pub parent: Option<String>,
    pub classes: Vec<String>,
}
