//! Sysweep - A command-line utility for disk and system inspection
//!
//! This crate provides functionality for:
//! - Listing files in a directory by size
//! - Cleaning cache files and oversized files
//! - Reporting memory, storage, and process information
//!
//! Every report can be rendered as a table, JSON, or YAML, and refreshed
//! on a fixed interval (watch mode).

pub mod cleaner;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod parser;
pub mod platform;
pub mod provider;
pub mod record;
pub mod render;
pub mod watch;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, SweepError};
