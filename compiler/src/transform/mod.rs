//! Graph IR → ordered IVR script nodes.
//!
//! Transformation never fails: anything the heuristics do not recognize falls
//! back to a text-to-speech prompt.

pub mod boilerplate;
pub mod commands;
pub mod decision;
pub mod label;
pub mod prompt;
pub mod style;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use label::humanize;
pub use prompt::PromptResolver;
pub use style::{NoopStyle, StyleHook};

use crate::ir::types::IvrNode;
use crate::parse::shape::ShapeKind;
use crate::parse::types::{FlowDiagram, GraphEdge, GraphNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransformOptions {
    /// Inject the start / problems / goodbye nodes when absent.
    pub standard_nodes: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        TransformOptions {
            standard_nodes: true,
        }
    }
}

pub struct Transformer<'a> {
    prompts: PromptResolver<'a>,
    style: &'a dyn StyleHook,
    options: TransformOptions,
}

impl<'a> Transformer<'a> {
    pub fn new(options: TransformOptions) -> Self {
        Transformer {
            prompts: PromptResolver::builtin(),
            style: &NoopStyle,
            options,
        }
    }

    pub fn with_style(mut self, style: &'a dyn StyleHook) -> Self {
        self.style = style;
        self
    }

    pub fn with_prompts(mut self, prompts: PromptResolver<'a>) -> Self {
        self.prompts = prompts;
        self
    }

    pub fn transform(&self, diagram: &FlowDiagram) -> Vec<IvrNode> {
        let mut nodes: Vec<IvrNode> = diagram
            .nodes
            .values()
            .map(|node| self.transform_node(diagram, node))
            .collect();

        if self.options.standard_nodes {
            boilerplate::inject(diagram, &mut nodes);
        }
        nodes
    }

    pub fn transform_node(&self, diagram: &FlowDiagram, node: &GraphNode) -> IvrNode {
        let mut out = IvrNode::new(humanize(&node.id)).with_log(node.text.clone());

        for class in &node.classes {
            if let Some(style) = diagram.style_classes.get(class) {
                self.style.apply(&mut out, style);
            }
        }

        let outgoing: Vec<&GraphEdge> = diagram.outgoing(&node.id).collect();
        match node.shape {
            ShapeKind::Decision => decision::apply(&mut out, &outgoing),
            ShapeKind::Rectangle
            | ShapeKind::Rounded
            | ShapeKind::Stadium
            | ShapeKind::Subroutine
            | ShapeKind::Cylinder
            | ShapeKind::Circle
            | ShapeKind::Asymmetric
            | ShapeKind::Hexagon => {
                out.play_prompt = Some(vec![self.prompts.resolve(&node.text)]);
                match outgoing.as_slice() {
                    [only] => out.goto = Some(humanize(&only.to)),
                    [] => {}
                    many => debug!(
                        node = %node.id,
                        edges = many.len(),
                        "action node has several outgoing edges, no goto emitted"
                    ),
                }
            }
        }

        commands::apply(&mut out, &node.text);
        out
    }
}

/// Transform with the built-in prompt table and no style behavior.
pub fn transform(diagram: &FlowDiagram, options: &TransformOptions) -> Vec<IvrNode> {
    Transformer::new(*options).transform(diagram)
}
