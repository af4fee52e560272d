//! Shared fixtures for gapwatch integration tests.

pub mod traces;
