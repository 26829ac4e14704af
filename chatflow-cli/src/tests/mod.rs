//! Unit tests for chatflow-cli, organized by module.
//!
//! Tests are BDD-style with clear Given/When/Then comments and descriptive names.
//! Each submodule documents the behaviour under test.
