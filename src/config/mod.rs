//! Configuration module
//!
//! CLI arguments and the resolved runtime settings for a sort run.

mod settings;

pub use settings::*;
