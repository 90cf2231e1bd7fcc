//! Invariant checks over a generated node sequence.
//!
//! Targets of `goto`/`branch` are deliberately not resolved: scripts may jump
//! to labels defined outside the diagram.

use std::collections::HashSet;

use crate::ir::types::IvrNode;

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub code: &'static str,
    pub message: String,
    /// Label of the offending node, if applicable.
    pub label: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.label {
            Some(label) => write!(f, "[{}] {} (at node '{}')", self.code, self.message, label),
            None => write!(f, "[{}] {}", self.code, self.message),
        }
    }
}

/// Validate a node sequence against all invariants. Returns all errors found.
pub fn validate_ir(nodes: &[IvrNode]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    validate_non_empty(nodes, &mut errors);
    validate_labels_present(nodes, &mut errors);
    validate_unique_labels(nodes, &mut errors);
    validate_decisions_branch(nodes, &mut errors);

    errors
}

fn validate_non_empty(nodes: &[IvrNode], errors: &mut Vec<ValidationError>) {
    if nodes.is_empty() {
        errors.push(ValidationError {
            code: "E001",
            message: "Script must contain at least one node".into(),
            label: None,
        });
    }
}

fn validate_labels_present(nodes: &[IvrNode], errors: &mut Vec<ValidationError>) {
    for (position, node) in nodes.iter().enumerate() {
        if node.label.trim().is_empty() {
            errors.push(ValidationError {
                code: "E002",
                message: format!("Node at position {} has an empty label", position),
                label: None,
            });
        }
    }
}

fn validate_unique_labels(nodes: &[IvrNode], errors: &mut Vec<ValidationError>) {
    let mut seen = HashSet::new();
    for node in nodes {
        if !seen.insert(node.label.as_str()) {
            errors.push(ValidationError {
                code: "E003",
                message: format!("Duplicate label '{}'", node.label),
                label: Some(node.label.clone()),
            });
        }
    }
}

fn validate_decisions_branch(nodes: &[IvrNode], errors: &mut Vec<ValidationError>) {
    for node in nodes.iter().filter(|n| n.is_decision()) {
        let empty = node.branch.as_ref().is_none_or(|b| b.is_empty());
        if empty {
            errors.push(ValidationError {
                code: "E004",
                message: "Digit collection without any branch target".into(),
                label: Some(node.label.clone()),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::types::GetDigits;

    fn digits() -> GetDigits {
        GetDigits {
            num_digits: 1,
            max_tries: 3,
            max_time: 7,
            valid_choices: String::new(),
            error_prompt: "callflow:1009".into(),
            none_prompt: "callflow:1009".into(),
        }
    }

    #[test]
    fn empty_sequence() {
        let errors = validate_ir(&[]);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, "E001");
    }

    #[test]
    fn duplicate_and_empty_labels() {
        let nodes = vec![IvrNode::new("Menu"), IvrNode::new(""), IvrNode::new("Menu")];
        let codes: Vec<&str> = validate_ir(&nodes).iter().map(|e| e.code).collect();
        assert_eq!(codes, vec!["E002", "E003"]);
    }

    #[test]
    fn decision_needs_a_branch() {
        let mut node = IvrNode::new("Input");
        node.get_digits = Some(digits());
        let errors = validate_ir(&[node]);
        assert_eq!(errors[0].code, "E004");
        assert_eq!(
            errors[0].to_string(),
            "[E004] Digit collection without any branch target (at node 'Input')"
        );
    }
}
