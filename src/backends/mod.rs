//! Backends module - Filesystem traversal
//!
//! Provides:
//! - walk: recursive fragment discovery with walkdir

pub mod walk;
