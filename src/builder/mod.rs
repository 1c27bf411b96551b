//! Builder API for ergonomic state machine construction.
//!
//! This module provides the fluent builder that collects reducers and the
//! macros that declare state and action enums with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
