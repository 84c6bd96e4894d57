//! Shared model types for the integration tests.

pub mod people;
