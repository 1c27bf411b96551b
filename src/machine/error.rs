//! Errors returned while processing actions.

use crate::core::HandlerError;
use thiserror::Error;

/// Errors that can occur when processing an action.
///
/// Either way the machine's state is left as it was before the call.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("No handler registered for action '{action}'")]
    UnhandledAction { action: String },

    #[error("Handler for action '{action}' failed: {source}")]
    HandlerFailed {
        action: String,
        #[source]
        source: HandlerError,
    },
}
