//! Graph-level structural validation rules (V001–V004).

use std::collections::HashMap;

use crate::error::CompilerError;
use crate::parse::graph::DiagramGraph;
use crate::parse::types::FlowDiagram;
use crate::transform::decision::{BranchKey, classify_label};

/// Run all structural validation rules. Returns all errors found.
pub fn validate_structural(diagram: &FlowDiagram, graph: &DiagramGraph) -> Vec<CompilerError> {
    let mut errors = Vec::new();

    v001_has_nodes(diagram, &mut errors);
    v002_decision_has_labeled_branch(diagram, graph, &mut errors);
    v003_no_duplicate_digits(diagram, graph, &mut errors);
    v004_all_reachable_from_entry(diagram, graph, &mut errors);

    errors
}

/// The first node whose id starts with `start`, else the first declared node.
pub fn entry_node(diagram: &FlowDiagram) -> Option<&str> {
    diagram
        .nodes
        .keys()
        .find(|id| id.to_lowercase().starts_with("start"))
        .or_else(|| diagram.nodes.keys().next())
        .map(String::as_str)
}

fn v001_has_nodes(diagram: &FlowDiagram, errors: &mut Vec<CompilerError>) {
    if diagram.is_empty() {
        errors.push(CompilerError::validate(
            "V001",
            "Diagram contains no node declarations",
            None,
        ));
    }
}

fn v002_decision_has_labeled_branch(
    diagram: &FlowDiagram,
    graph: &DiagramGraph,
    errors: &mut Vec<CompilerError>,
) {
    for node in diagram.nodes.values().filter(|n| n.shape.is_decision()) {
        let labeled = graph
            .outgoing_edges(diagram, &node.id)
            .iter()
            .any(|e| e.label.is_some());
        if !labeled {
            errors.push(CompilerError::validate(
                "V002",
                format!("Decision node '{}' has no labeled outgoing edge", node.id),
                Some(node.id.clone()),
            ));
        }
    }
}

fn v003_no_duplicate_digits(
    diagram: &FlowDiagram,
    graph: &DiagramGraph,
    errors: &mut Vec<CompilerError>,
) {
    for node in diagram.nodes.values().filter(|n| n.shape.is_decision()) {
        let mut seen: HashMap<&str, &str> = HashMap::new();
        for edge in graph.outgoing_edges(diagram, &node.id) {
            let Some(label) = edge.label.as_deref() else {
                continue;
            };
            let BranchKey::Digit(digit) = classify_label(label) else {
                continue;
            };
            if let Some(first) = seen.insert(digit, edge.to.as_str()) {
                errors.push(CompilerError::validate(
                    "V003",
                    format!(
                        "Decision node '{}' maps digit {} to both '{}' and '{}'",
                        node.id, digit, first, edge.to
                    ),
                    Some(node.id.clone()),
                ));
            }
        }
    }
}

fn v004_all_reachable_from_entry(
    diagram: &FlowDiagram,
    graph: &DiagramGraph,
    errors: &mut Vec<CompilerError>,
) {
    let Some(entry) = entry_node(diagram) else {
        return;
    };
    let reachable = graph.reachable_from(entry);

    for id in diagram.nodes.keys() {
        if !reachable.contains(id.as_str()) {
            errors.push(CompilerError::validate(
                "V004",
                format!("Node '{}' is not reachable from '{}'", id, entry),
                Some(id.clone()),
            ));
        }
    }
}
