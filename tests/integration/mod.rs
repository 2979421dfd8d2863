//! Integration tests for manifest generation

mod determinism;
