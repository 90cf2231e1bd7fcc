//! Node shape registry: the closed set of supported shapes and their delimiters.

use serde::{Deserialize, Serialize};

/// Declared visual category of a flowchart node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShapeKind {
    Rectangle,
    Rounded,
    Stadium,
    Subroutine,
    Cylinder,
    Circle,
    Asymmetric,
    Decision,
    Hexagon,
}

impl ShapeKind {
    pub fn is_decision(self) -> bool {
        matches!(self, ShapeKind::Decision)
    }
}

/// One row of the shape table.
#[derive(Debug, Clone, Copy)]
pub struct ShapeDelimiters {
    pub kind: ShapeKind,
    pub open: &'static str,
    pub close: &'static str,
}

/// Every node declaration is `id <open>"text"<close>`. The opener is always
/// followed by a quote, so no two rows can match the same line.
pub const SHAPES: &[ShapeDelimiters] = &[
    ShapeDelimiters { kind: ShapeKind::Rectangle, open: "[", close: "]" },
    ShapeDelimiters { kind: ShapeKind::Rounded, open: "(", close: ")" },
    ShapeDelimiters { kind: ShapeKind::Stadium, open: "([", close: "])" },
    ShapeDelimiters { kind: ShapeKind::Subroutine, open: "[[", close: "]]" },
    ShapeDelimiters { kind: ShapeKind::Cylinder, open: "[(", close: ")]" },
    ShapeDelimiters { kind: ShapeKind::Circle, open: "((", close: "))" },
    ShapeDelimiters { kind: ShapeKind::Asymmetric, open: ">", close: "]" },
    ShapeDelimiters { kind: ShapeKind::Decision, open: "{", close: "}" },
    ShapeDelimiters { kind: ShapeKind::Hexagon, open: "{{", close: "}}" },
];
