//! Keyword heuristics that attach runtime commands based on node text.

use indexmap::IndexMap;

use crate::ir::types::{Gosub, IvrNode};

/// Routine that records the call outcome.
pub const SAVE_RESULT_ROUTINE: &str = "SaveCallResult";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultCode {
    /// Any of these (lower-case) appearing in the text selects this code.
    pub keywords: &'static [&'static str],
    pub code: u32,
    pub name: &'static str,
}

impl ResultCode {
    pub fn gosub(&self) -> Gosub {
        Gosub::Call(SAVE_RESULT_ROUTINE.to_string(), self.code, self.name.to_string())
    }
}

pub const ACCEPT: ResultCode = ResultCode {
    keywords: &["accept"],
    code: 1001,
    name: "Accept",
};
pub const DECLINE: ResultCode = ResultCode {
    keywords: &["decline"],
    code: 1002,
    name: "Decline",
};
pub const NOT_HOME: ResultCode = ResultCode {
    keywords: &["not_home", "not home"],
    code: 1006,
    name: "Not Home",
};
pub const QUALIFIED_NO: ResultCode = ResultCode {
    keywords: &["qualified_no", "qualified no"],
    code: 1145,
    name: "QualNo",
};
pub const ERROR_OUT: ResultCode = ResultCode {
    keywords: &["error"],
    code: 1198,
    name: "Error Out",
};

/// Checked in this order; the first hit wins.
pub const RESULT_CODES: &[ResultCode] = &[ACCEPT, DECLINE, NOT_HOME, QUALIFIED_NO, ERROR_OUT];

/// Text that marks an announcement the caller must not barge into.
pub const NO_BARGE_KEYWORDS: &[&str] = &["goodbye", "recorded", "message", "please"];

pub const TRANSFER_KEYWORD: &str = "transfer";
pub const TRANSFER_ROUTINE: &str = "XferCall";
pub const TRANSFER_MODULE: &str = "../../util/xfer.js";
pub const TRANSFER_RINGBACK_VAR: &str = "transfer_ringback";
pub const TRANSFER_RINGBACK_PROMPT: &str = "callflow:2223";

pub fn result_code_for(lowered: &str) -> Option<&'static ResultCode> {
    RESULT_CODES
        .iter()
        .find(|rc| rc.keywords.iter().any(|k| lowered.contains(k)))
}

/// Apply result-code, no-barge and transfer detection to `node`.
/// Transfer runs last and replaces any result-code call.
pub fn apply(node: &mut IvrNode, text: &str) {
    let lowered = text.to_lowercase();

    if let Some(rc) = result_code_for(&lowered) {
        node.gosub = Some(rc.gosub());
    }

    if NO_BARGE_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        node.nobarge = true;
    }

    if lowered.contains(TRANSFER_KEYWORD) {
        let mut vars = IndexMap::new();
        vars.insert(
            TRANSFER_RINGBACK_VAR.to_string(),
            TRANSFER_RINGBACK_PROMPT.to_string(),
        );
        node.setvar = Some(vars);
        node.include = Some(TRANSFER_MODULE.to_string());
        node.gosub = Some(Gosub::Routine(TRANSFER_ROUTINE.to_string()));
    }
}
