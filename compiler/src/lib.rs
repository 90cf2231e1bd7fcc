pub mod error;
pub mod export;
pub mod ir;
pub mod parse;
pub mod pipeline;
pub mod transform;
pub mod validate;
pub mod wasm;

pub use pipeline::{CompileOptions, compile, convert};
