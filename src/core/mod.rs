//! Core sorting engine
//!
//! Per-file copier, the task dispatcher that fans copies out, and the
//! top-level sorter that ties scanning and dispatch together.

mod copier;
mod dispatcher;
mod sorter;

pub use copier::*;
pub use dispatcher::*;
pub use sorter::*;
