//! JSON configuration for the command-line tools.
//!
//! - [`runner`] – inputs, output format and lane parameters for `lane_demo`.

pub mod runner;
