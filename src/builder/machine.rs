//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{Action, HandlerError, Reducer, ReducerRegistry, State};
use crate::machine::StateMachine;

/// Builder for constructing state machines with a fluent API.
///
/// Handlers are collected in registration order and validated together in
/// [`build`](Self::build).
pub struct StateMachineBuilder<S: State, A: Action> {
    initial: S,
    entries: Vec<(String, Reducer<S, A>)>,
}

impl<S: State, A: Action> StateMachineBuilder<S, A> {
    /// Create a new builder starting from `initial`.
    pub fn new(initial: S) -> Self {
        Self {
            initial,
            entries: Vec::new(),
        }
    }

    /// Register a handler for the named action variant.
    pub fn on<F>(mut self, action: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&S, &A) -> S + 'static,
    {
        let reducer: Reducer<S, A> =
            Box::new(move |state: &S, action: &A| Ok(handler(state, action)));
        self.entries.push((action.into(), reducer));
        self
    }

    /// Register a fallible handler for the named action variant.
    ///
    /// An `Err` returned by the handler reaches the caller of
    /// [`StateMachine::process`] as its error source.
    pub fn try_on<F, E>(mut self, action: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&S, &A) -> Result<S, E> + 'static,
        E: Into<HandlerError>,
    {
        let reducer: Reducer<S, A> =
            Box::new(move |state: &S, action: &A| handler(state, action).map_err(Into::into));
        self.entries.push((action.into(), reducer));
        self
    }

    /// Build the state machine.
    /// Returns an error if any action variant has more than one handler.
    pub fn build(self) -> Result<StateMachine<S, A>, BuildError> {
        let registry = ReducerRegistry::from_entries(self.entries)?;
        Ok(StateMachine::from_parts(self.initial, registry))
    }
}
