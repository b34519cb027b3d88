//! Tauri IPC Commands
//!
//! These commands bridge the form UI to the Rust core.

pub mod cars;
pub mod diagnostics;
