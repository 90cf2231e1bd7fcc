//! Parse phase: diagram text → Graph IR (+ petgraph view).
//!
//! Parsing is permissive and never fails: lines that match no statement are
//! skipped. Strict checks live in `crate::validate`.

pub mod graph;
pub mod lines;
pub mod normalize;
pub mod shape;
pub mod types;

pub use graph::DiagramGraph;
pub use shape::ShapeKind;
pub use types::*;

use tracing::{debug, trace};

use lines::{EdgeDecl, Line};

/// Parse flowchart text into a `FlowDiagram`.
pub fn parse(text: &str) -> FlowDiagram {
    let mut builder = DiagramBuilder::default();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        let line = line.strip_suffix(';').map(str::trim_end).unwrap_or(line);
        if line.is_empty() || line.starts_with("%%") {
            continue;
        }

        match lines::classify(line) {
            Some(statement) => {
                trace!(line = index + 1, ?statement, "classified");
                builder.apply(statement);
            }
            None => debug!(line = index + 1, text = line, "ignoring unrecognized line"),
        }
    }

    builder.finish()
}

/// Parse text and build the graph view in one step.
pub fn parse_and_build(text: &str) -> (FlowDiagram, DiagramGraph) {
    let diagram = parse(text);
    let graph = DiagramGraph::build(&diagram);
    (diagram, graph)
}

#[derive(Default)]
struct DiagramBuilder {
    diagram: FlowDiagram,
    /// Open subgraphs, innermost last.
    open: Vec<String>,
    /// `class` statements, applied once every declaration is known.
    class_assignments: Vec<(String, String)>,
}

impl DiagramBuilder {
    fn apply(&mut self, statement: Line<'_>) {
        match statement {
            Line::Header(direction) => {
                self.diagram.direction.get_or_insert(direction);
            }
            Line::SubgraphOpen { id, title } => {
                let subgraph = Subgraph {
                    id: id.to_string(),
                    title: title.unwrap_or(id).to_string(),
                    parent: self.open.last().cloned(),
                    classes: Vec::new(),
                };
                self.diagram.subgraphs.insert(id.to_string(), subgraph);
                self.open.push(id.to_string());
            }
            Line::SubgraphClose => {
                if self.open.pop().is_none() {
                    debug!("`end` without an open subgraph");
                }
            }
            Line::ClassDef { name, style } => {
                self.diagram
                    .style_classes
                    .insert(name.to_string(), style.to_string());
            }
            Line::ClassAssign { targets, class } => {
                for target in targets {
                    self.class_assignments
                        .push((target.to_string(), class.to_string()));
                }
            }
            Line::Node { id, shape, text } => {
                if self.diagram.nodes.contains_key(id) {
                    debug!(id, "node redeclared, last declaration wins");
                }
                let node = GraphNode {
                    id: id.to_string(),
                    text: text.to_string(),
                    shape,
                    classes: Vec::new(),
                    subgraph: self.open.last().cloned(),
                };
                self.diagram.nodes.insert(id.to_string(), node);
            }
            Line::Edges(edges) => {
                self.diagram
                    .edges
                    .extend(edges.into_iter().map(into_graph_edge));
            }
        }
    }

    fn finish(mut self) -> FlowDiagram {
        for (target, class) in self.class_assignments {
            if let Some(node) = self.diagram.nodes.get_mut(&target) {
                node.classes.push(class);
            } else if let Some(subgraph) = self.diagram.subgraphs.get_mut(&target) {
                subgraph.classes.push(class);
            } else {
                debug!(target = %target, class = %class, "class assigned to unknown id");
            }
        }
        if !self.open.is_empty() {
            debug!(open = ?self.open, "subgraphs left open at end of input");
        }
        self.diagram
    }
}

fn into_graph_edge(edge: EdgeDecl<'_>) -> GraphEdge {
    GraphEdge {
        from: edge.from.to_string(),
        to: edge.to.to_string(),
        label: edge.label.map(str::to_string),
        style: edge.style.map(str::to_string),
        link: edge.link,
    }
}
