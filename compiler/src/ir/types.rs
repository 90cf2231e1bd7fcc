//! IVR script IR: the ordered node sequence handed to the export step.
//!
//! Field names follow the call-flow runtime's script format, so a JSON or
//! YAML rendering of `Vec<IvrNode>` is directly loadable by the runtime.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// =============================================================================
// SCRIPT NODE
// =============================================================================

/// One entry of the generated call-flow script.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IvrNode {
    /// Unique within the sequence; also the target of `goto`/`branch`.
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_loop: Option<MaxLoop>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_prompt: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get_digits: Option<GetDigits>,
    /// Input symbol → target label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<IndexMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goto: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gosub: Option<Gosub>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setvar: Option<IndexMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<String>,
    /// Prompts on this node cannot be interrupted by caller input.
    #[serde(default, skip_serializing_if = "is_false", with = "nobarge_flag")]
    pub nobarge: bool,
}

impl IvrNode {
    pub fn new(label: impl Into<String>) -> Self {
        IvrNode {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn with_log(mut self, log: impl Into<String>) -> Self {
        self.log = Some(log.into());
        self
    }

    pub fn is_decision(&self) -> bool {
        self.get_digits.is_some()
    }
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// The runtime spells the flag as the string `"1"`.
mod nobarge_flag {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *flag { "1" } else { "0" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(raw == "1")
    }
}

// =============================================================================
// DIRECTIVES
// =============================================================================

/// `[target, attempts, overflow]`: re-enter `target` at most `attempts` times,
/// then continue at `overflow`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaxLoop(pub String, pub u32, pub String);

/// Digit collection parameters of a decision node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDigits {
    pub num_digits: u32,
    pub max_tries: u32,
    /// Seconds.
    pub max_time: u32,
    /// Accepted digits joined with `|`.
    pub valid_choices: String,
    pub error_prompt: String,
    pub none_prompt: String,
}

/// Subroutine call directive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Gosub {
    /// `[routine, result code, display name]`
    Call(String, u32, String),
    /// Bare routine name.
    Routine(String),
}

impl Gosub {
    pub fn routine(&self) -> &str {
        match self {
            Gosub::Call(name, _, _) | Gosub::Routine(name) => name,
        }
    }

    pub fn result_code(&self) -> Option<u32> {
        match self {
            Gosub::Call(_, code, _) => Some(*code),
            Gosub::Routine(_) => None,
        }
    }
}
