//! Style-class hook.
//!
//! `classDef` styles carry no IVR behavior yet. The transformer still calls the
//! hook once per registered class on a node so behavior can be plugged in
//! without touching the transform itself.

use crate::ir::types::IvrNode;

pub trait StyleHook {
    /// `style` is the verbatim `classDef` body, e.g. `fill:#f96,stroke:#333`.
    fn apply(&self, node: &mut IvrNode, style: &str);
}

/// Default hook: leaves the node untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStyle;

impl StyleHook for NoopStyle {
    fn apply(&self, _node: &mut IvrNode, _style: &str) {}
}

impl<F> StyleHook for F
where
    F: Fn(&mut IvrNode, &str),
{
    fn apply(&self, node: &mut IvrNode, style: &str) {
        self(node, style)
    }
}
