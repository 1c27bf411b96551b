//! Build errors for the state machine builder.

use thiserror::Error;

/// Errors that can occur when building a state machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Duplicate handlers registered for actions: {}", .actions.join(", "))]
    DuplicateHandlers { actions: Vec<String> },
}
