//! Full pipeline: normalize → parse → validate → transform → IR validate → export.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::CompilerError;
use crate::export::{self, ExportFormat};
use crate::ir::types::IvrNode;
use crate::ir::validate_ir;
use crate::parse::{self, normalize};
use crate::transform::{self, TransformOptions};
use crate::validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompileOptions {
    /// Reject diagrams and scripts that break the structural rules.
    pub strict: bool,
    pub standard_nodes: bool,
    /// Clean up raw language-model output before parsing.
    pub normalize: bool,
    pub format: ExportFormat,
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            strict: false,
            standard_nodes: true,
            normalize: false,
            format: ExportFormat::Js,
        }
    }
}

impl CompileOptions {
    pub fn transform_options(&self) -> TransformOptions {
        TransformOptions {
            standard_nodes: self.standard_nodes,
        }
    }
}

/// Diagram text to node sequence. Only strict mode can fail.
pub fn compile(text: &str, options: &CompileOptions) -> Result<Vec<IvrNode>, Vec<CompilerError>> {
    let normalized;
    let text = if options.normalize {
        normalized = normalize::normalize_model_output(text);
        normalized.as_str()
    } else {
        text
    };

    let (diagram, graph) = parse::parse_and_build(text);
    info!(
        nodes = diagram.nodes.len(),
        edges = diagram.edges.len(),
        subgraphs = diagram.subgraphs.len(),
        "parsed diagram"
    );
    let dangling = diagram.dangling_references();
    if !dangling.is_empty() {
        debug!(?dangling, "edges point at undeclared nodes");
    }

    if options.strict {
        let errors = validate::validate_diagram(&diagram, &graph);
        if !errors.is_empty() {
            return Err(errors);
        }
    }

    let nodes = transform::transform(&diagram, &options.transform_options());

    if options.strict {
        let errors = validate_ir(&nodes);
        if !errors.is_empty() {
            return Err(errors.into_iter().map(CompilerError::from).collect());
        }
    }

    info!(nodes = nodes.len(), "generated script");
    Ok(nodes)
}

/// Diagram text to rendered script in `options.format`.
pub fn convert(text: &str, options: &CompileOptions) -> Result<String, Vec<CompilerError>> {
    let nodes = compile(text, options)?;
    export::render(&nodes, options.format).map_err(|e| vec![CompilerError::from(e)])
}
