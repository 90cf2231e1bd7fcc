//! Decision (diamond) nodes: digit collection plus a branch map.

use indexmap::IndexMap;
use winnow::ascii::{digit1, space0};
use winnow::prelude::*;

use super::label::humanize;
use super::prompt::INVALID_ENTRY_PROMPT;
use crate::ir::types::{GetDigits, IvrNode};
use crate::parse::types::GraphEdge;

pub const NUM_DIGITS: u32 = 1;
pub const MAX_TRIES: u32 = 3;
pub const MAX_TIME_SECS: u32 = 7;

/// Branch keys used for invalid input and timeouts.
pub const ERROR_KEY: &str = "error";
pub const NONE_KEY: &str = "none";

/// How an outgoing edge label maps onto the branch map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchKey<'a> {
    /// `3 - decline`
    Digit(&'a str),
    /// Mentions `invalid` or `no input`; routes both error and timeout.
    Invalid,
    /// Anything else is used verbatim as the key.
    Literal(&'a str),
}

pub fn classify_label(label: &str) -> BranchKey<'_> {
    let mut input = label;
    if let Ok(digits) = digit_choice.parse_next(&mut input) {
        return BranchKey::Digit(digits);
    }
    let lowered = label.to_lowercase();
    if lowered.contains("invalid") || lowered.contains("no input") {
        BranchKey::Invalid
    } else {
        BranchKey::Literal(label)
    }
}

fn digit_choice<'s>(input: &mut &'s str) -> winnow::Result<&'s str> {
    let digits = digit1.parse_next(input)?;
    (space0, "-").parse_next(input)?;
    Ok(digits)
}

/// Attach `getDigits` and `branch` to `node` from its outgoing edges.
/// Unlabeled edges contribute nothing.
pub fn apply(node: &mut IvrNode, outgoing: &[&GraphEdge]) {
    let mut branch: IndexMap<String, String> = IndexMap::new();
    let mut choices: Vec<&str> = Vec::new();

    for edge in outgoing {
        let Some(label) = edge.label.as_deref() else {
            continue;
        };
        let target = humanize(&edge.to);
        match classify_label(label) {
            BranchKey::Digit(digit) => {
                choices.push(digit);
                branch.insert(digit.to_string(), target);
            }
            BranchKey::Invalid => {
                branch.insert(ERROR_KEY.to_string(), target.clone());
                branch.insert(NONE_KEY.to_string(), target);
            }
            BranchKey::Literal(key) => {
                branch.insert(key.to_string(), target);
            }
        }
    }

    node.get_digits = Some(GetDigits {
        num_digits: NUM_DIGITS,
        max_tries: MAX_TRIES,
        max_time: MAX_TIME_SECS,
        valid_choices: choices.join("|"),
        error_prompt: INVALID_ENTRY_PROMPT.to_string(),
        none_prompt: INVALID_ENTRY_PROMPT.to_string(),
    });
    node.branch = Some(branch);
}
