#![allow(dead_code)]

use ivr_compiler::ir::IvrNode;
use ivr_compiler::parse::{self, FlowDiagram};
use ivr_compiler::transform::{self, TransformOptions};

pub const SIMPLE_CALLOUT: &str = include_str!("../fixtures/simple_callout.mmd");
pub const PIN_CHANGE: &str = include_str!("../fixtures/pin_change.mmd");
pub const TRANSFER_FLOW: &str = include_str!("../fixtures/transfer_flow.mmd");
pub const SHAPES_AND_STYLES: &str = include_str!("../fixtures/shapes_and_styles.mmd");

/// Transform without the injected Start / Problems / Goodbye nodes.
pub fn bare(text: &str) -> Vec<IvrNode> {
    transform::transform(&parse::parse(text), &TransformOptions { standard_nodes: false })
}

/// Transform with default options.
pub fn full(text: &str) -> Vec<IvrNode> {
    transform::transform(&parse::parse(text), &TransformOptions::default())
}

pub fn find<'a>(nodes: &'a [IvrNode], label: &str) -> &'a IvrNode {
    nodes
        .iter()
        .find(|n| n.label == label)
        .unwrap_or_else(|| panic!("no node labeled '{label}'"))
}

pub fn labels(nodes: &[IvrNode]) -> Vec<&str> {
    nodes.iter().map(|n| n.label.as_str()).collect()
}

pub fn node_ids(diagram: &FlowDiagram) -> Vec<&str> {
    diagram.nodes.keys().map(String::as_str).collect()
}

/// Single-node diagram with the given id, shape-opening text and close.
pub fn one_node(id: &str, open: &str, text: &str, close: &str) -> String {
    format!("flowchart TD\n    {id}{open}\"{text}\"{close}\n")
}
