//! SML Manifest: Deterministic manifest generation for sample project trees
//!
//! Walks a directory tree, hashes every published file and renders a
//! `manifest.sml` document with a version identifier derived from the
//! tree's contents.

pub mod cli;
pub mod config;
pub mod error;
pub mod exclude;
pub mod generator;
pub mod logging;
pub mod manifest;
pub mod tree;
pub mod types;
pub mod version;
