//! The reducer-driven state machine.
//!
//! # Key Concepts
//!
//! - **Process**: resolve the action's handler, compute the next state,
//!   store it and notify the observer, all on the caller's stack
//! - **Observer**: a single optional callback; the first one ever installed
//!   is told the current state immediately
//! - **Exclusivity**: `process` takes `&mut self`, so calls are serialized by
//!   the borrow checker and an observer cannot re-enter its machine

mod error;
#[allow(clippy::module_inception)]
mod machine;

pub use error::ProcessError;
pub use machine::{Observer, StateMachine};
