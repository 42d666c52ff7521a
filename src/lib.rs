//! Hatch Library
//!
//! This library provides the core functionality for the `hatch` CLI.

pub mod commands;
pub mod core;
pub mod error;
pub mod utils;
