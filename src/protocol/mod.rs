//! Host protocol handling.
//!
//! Line-oriented commands let a host application (a UI, a script, a test
//! harness) feed army tokens to the engine and read back the best route
//! and its step-by-step breakdown.

pub mod parser;

pub use parser::{parse_command, Command};
