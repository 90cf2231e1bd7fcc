//! Cleanup of diagram text returned by the image-to-diagram model service.
//!
//! Model replies tend to arrive wrapped in code fences and with inconsistent
//! indentation. The result is fed to the same parser as hand-written text.

const HEADER: &str = "flowchart TD";
const INDENT: &str = "    ";

/// Strip code fences, make sure a flowchart header is present and re-indent
/// every statement by four spaces.
pub fn normalize_model_output(text: &str) -> String {
    let unfenced = text.replace("```mermaid", "").replace("```", "");
    let body = unfenced.trim_start();

    let mut out: Vec<String> = Vec::new();
    if !is_header(body) {
        out.push(HEADER.to_string());
    }
    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            out.push(String::new());
        } else if is_header(line) {
            out.push(line.to_string());
        } else {
            out.push(format!("{INDENT}{line}"));
        }
    }

    while out.last().is_some_and(|l| l.is_empty()) {
        out.pop();
    }
    out.join("\n")
}

fn is_header(line: &str) -> bool {
    line.starts_with("flowchart") || line.starts_with("graph ")
}
