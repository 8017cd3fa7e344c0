//! Runtime detection and generator execution
//!
//! This module provides:
//! - Node.js / npx detection (advisory)
//! - Execution of the external project generator

pub mod check;
pub mod tool;

pub use check::{check_node, check_npx, check_runtimes, missing_runtimes, RuntimeInfo};
pub use tool::ToolManager;
