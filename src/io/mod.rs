//! Input/Output for the test-input generator
//!
//! This module handles logging setup and test-file serialization.

mod output;
mod testfile;

pub use output::setup_logging;
pub use testfile::TestFileWriter;
