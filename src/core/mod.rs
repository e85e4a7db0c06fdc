//! Core module - Fragment model, errors and file-level building blocks
//!
//! This module provides:
//! - Fragment and FragmentSet (the merge data model)
//! - MergeError, the error type shared by every stage
//! - Recursive search patterns
//! - File identity checks
//! - Fragment reading and merged output writing

pub mod error;
pub mod file_reader;
pub mod model;
pub mod paths;
pub mod pattern;
pub mod writer;
