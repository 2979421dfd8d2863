//! Filesystem collection
//!
//! Walks a root directory, filters excluded files and hashes the rest into
//! a deterministic, path-sorted list of file records.

pub mod collector;
pub mod hasher;
pub mod path;
pub mod walker;
