//! WASM entry points for browser use.

use wasm_bindgen::prelude::*;

use crate::error::CompilerError;
use crate::pipeline::{self, CompileOptions};

/// Full pipeline: diagram text → rendered script.
/// `options_json` is a `CompileOptions` object; an empty string means defaults.
/// Returns a JSON object with either `output` (success) or `errors` (failure).
#[wasm_bindgen]
pub fn convert_diagram(text: &str, options_json: &str) -> JsValue {
    let result = convert_diagram_inner(text, options_json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn convert_diagram_inner(text: &str, options_json: &str) -> CompileResult {
    let options = match parse_options(options_json) {
        Ok(o) => o,
        Err(e) => return CompileResult::Errors { errors: vec![e.into()] },
    };

    match pipeline::convert(text, &options) {
        Ok(output) => CompileResult::Success { output },
        Err(errors) => CompileResult::Errors {
            errors: errors.into_iter().map(ErrorDto::from).collect(),
        },
    }
}

/// Run the strict checks only.
/// Returns a JSON array of CompilerError objects.
#[wasm_bindgen]
pub fn validate_diagram(text: &str) -> JsValue {
    let result = validate_diagram_inner(text);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_diagram_inner(text: &str) -> Vec<ErrorDto> {
    let options = CompileOptions {
        strict: true,
        ..Default::default()
    };
    match pipeline::compile(text, &options) {
        Ok(_) => vec![],
        Err(errors) => errors.into_iter().map(ErrorDto::from).collect(),
    }
}

fn parse_options(options_json: &str) -> Result<CompileOptions, CompilerError> {
    if options_json.trim().is_empty() {
        return Ok(CompileOptions::default());
    }
    serde_json::from_str(options_json)
        .map_err(|e| CompilerError::parse("P001", format!("Failed to parse options JSON: {}", e)))
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct ErrorDto {
    code: String,
    phase: String,
    message: String,
    node_id: Option<String>,
}

impl From<CompilerError> for ErrorDto {
    fn from(e: CompilerError) -> Self {
        ErrorDto {
            code: e.code,
            phase: e.phase.to_string(),
            message: e.message,
            node_id: e.node_id,
        }
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "status")]
enum CompileResult {
    #[serde(rename = "success")]
    Success { output: String },
    #[serde(rename = "errors")]
    Errors { errors: Vec<ErrorDto> },
}
