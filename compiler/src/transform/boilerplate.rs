//! Standard entry / error / exit nodes every call flow relies on.

use tracing::debug;

use super::commands::ERROR_OUT;
use super::prompt::GOODBYE_PROMPT;
use crate::ir::types::{IvrNode, MaxLoop};
use crate::parse::types::FlowDiagram;

pub const START_LABEL: &str = "Start";
pub const PROBLEMS_LABEL: &str = "Problems";
pub const GOODBYE_LABEL: &str = "Goodbye";
/// Loop target of the injected start node.
pub const MAIN_LABEL: &str = "Main";
pub const START_MAX_LOOPS: u32 = 3;
/// Runtime pseudo-label that ends the call.
pub const HANGUP: &str = "hangup";

pub fn start_node() -> IvrNode {
    let mut node = IvrNode::new(START_LABEL).with_log("Entry point to call flow");
    node.max_loop = Some(MaxLoop(
        MAIN_LABEL.to_string(),
        START_MAX_LOOPS,
        PROBLEMS_LABEL.to_string(),
    ));
    node.nobarge = true;
    node
}

pub fn problems_node() -> IvrNode {
    let mut node = IvrNode::new(PROBLEMS_LABEL);
    node.gosub = Some(ERROR_OUT.gosub());
    node.goto = Some(GOODBYE_LABEL.to_string());
    node
}

pub fn goodbye_node() -> IvrNode {
    let mut node = IvrNode::new(GOODBYE_LABEL).with_log("Goodbye message");
    node.play_prompt = Some(vec![GOODBYE_PROMPT.to_string()]);
    node.nobarge = true;
    node.goto = Some(HANGUP.to_string());
    node
}

fn declares_start(diagram: &FlowDiagram) -> bool {
    diagram
        .nodes
        .keys()
        .any(|id| id.to_lowercase().starts_with("start"))
}

fn has_label(nodes: &[IvrNode], label: &str) -> bool {
    nodes.iter().any(|n| n.label == label)
}

/// Prepend the start node and append the problems / goodbye nodes when the
/// diagram does not already provide them. Labels stay unique: an id such as
/// `_start` already yields a `Start` node, so nothing is prepended for it.
pub fn inject(diagram: &FlowDiagram, nodes: &mut Vec<IvrNode>) {
    if !declares_start(diagram) && !has_label(nodes, START_LABEL) {
        debug!("injecting start node");
        nodes.insert(0, start_node());
    }
    if !has_label(nodes, PROBLEMS_LABEL) {
        debug!("injecting problems node");
        nodes.push(problems_node());
    }
    if !has_label(nodes, GOODBYE_LABEL) {
        debug!("injecting goodbye node");
        nodes.push(goodbye_node());
    }
}
