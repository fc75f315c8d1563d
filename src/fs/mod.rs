//! File system layer
//!
//! Source tree scanning, extension keys, and the metadata-preserving copy
//! primitives the copier is built from.

mod extension;
mod operations;
mod scanner;

pub use extension::*;
pub use operations::*;
pub use scanner::*;
