//! Data models for MAC address generation.
//!
//! This module contains the addresses themselves, the run configuration and
//! the output formats.

// Export submodules
pub mod config;
pub mod document;
pub mod format;
pub mod mac_address;
