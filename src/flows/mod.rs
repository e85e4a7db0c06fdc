//! Flows module - End-to-end workflows
//!
//! - merge: walk, read and write the merged compile-commands array

pub mod merge;
