//! Graph-level validation phase, run only in strict mode.
//!
//! Validates the parsed diagram before transformation. Edges that point at
//! undeclared nodes are accepted; the runtime resolves those labels.

pub mod structural;

pub use structural::entry_node;

use crate::error::CompilerError;
use crate::parse::graph::DiagramGraph;
use crate::parse::types::FlowDiagram;

/// Validate the diagram structure. Returns all errors found.
pub fn validate_diagram(diagram: &FlowDiagram, graph: &DiagramGraph) -> Vec<CompilerError> {
    structural::validate_structural(diagram, graph)
}

/// First structural problem, if any.
pub fn check_diagram(diagram: &FlowDiagram) -> Result<(), CompilerError> {
    let graph = DiagramGraph::build(diagram);
    match validate_diagram(diagram, &graph).into_iter().next() {
        Some(error) => Err(error),
        None => Ok(()),
    }
}
