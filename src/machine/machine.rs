//! State machine that applies registered reducers to actions.

use crate::builder::{BuildError, StateMachineBuilder};
use crate::core::{Action, ReducerRegistry, State};
use crate::machine::error::ProcessError;

/// Callback invoked with every new state.
pub type Observer<S> = Box<dyn Fn(&S)>;

/// State machine that applies reducers to actions and notifies one observer.
///
/// # Example
///
/// ```rust
/// use sluice::{action_enum, state_enum, StateMachine};
///
/// state_enum! {
///     enum Light { Red, Green }
/// }
///
/// action_enum! {
///     enum Signal { Go, Stop }
/// }
///
/// let mut machine = StateMachine::create(Light::Red, |b| {
///     b.on("Go", |_, _| Light::Green).on("Stop", |_, _| Light::Red)
/// })
/// .unwrap();
///
/// machine.process(Signal::Go).unwrap();
/// assert_eq!(machine.current_state(), &Light::Green);
/// ```
pub struct StateMachine<S: State, A: Action> {
    current: S,
    registry: ReducerRegistry<S, A>,
    observer: Option<Observer<S>>,
    attach_notified: bool,
}

impl<S: State, A: Action> StateMachine<S, A> {
    /// Create a machine in `initial`, registering handlers through `configure`.
    ///
    /// No notification fires at creation.
    pub fn create<F>(initial: S, configure: F) -> Result<Self, BuildError>
    where
        F: FnOnce(StateMachineBuilder<S, A>) -> StateMachineBuilder<S, A>,
    {
        configure(StateMachineBuilder::new(initial)).build()
    }

    /// Start a fluent builder in `initial`.
    pub fn builder(initial: S) -> StateMachineBuilder<S, A> {
        StateMachineBuilder::new(initial)
    }

    pub(crate) fn from_parts(initial: S, registry: ReducerRegistry<S, A>) -> Self {
        Self {
            current: initial,
            registry,
            observer: None,
            attach_notified: false,
        }
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    pub fn registry(&self) -> &ReducerRegistry<S, A> {
        &self.registry
    }

    pub fn has_observer(&self) -> bool {
        self.observer.is_some()
    }

    /// Install the state-change observer, replacing any previous one.
    ///
    /// The first observer ever installed on this machine is invoked once,
    /// immediately, with the current state. Later installs are silent.
    pub fn set_observer<F>(&mut self, observer: F)
    where
        F: Fn(&S) + 'static,
    {
        let observer: Observer<S> = Box::new(observer);
        if !self.attach_notified {
            self.attach_notified = true;
            tracing::trace!(state = self.current.name(), "notifying first observer");
            observer(&self.current);
        }
        self.observer = Some(observer);
    }

    /// Detach the observer. The current state is kept.
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Apply the handler registered for `action` and notify the observer.
    ///
    /// On error the current state is unchanged and nothing is notified.
    pub fn process(&mut self, action: A) -> Result<&S, ProcessError> {
        let reducer = match self.registry.resolve(&action) {
            Ok(reducer) => reducer,
            Err(err) => {
                tracing::warn!(action = action.name(), error = %err, "action rejected");
                return Err(err);
            }
        };

        let next = reducer(&self.current, &action).map_err(|source| {
            tracing::warn!(action = action.name(), error = %source, "handler failed");
            ProcessError::HandlerFailed {
                action: action.name().to_string(),
                source,
            }
        })?;

        tracing::debug!(
            action = action.name(),
            from = self.current.name(),
            to = next.name(),
            ephemeral = next.is_ephemeral(),
            "processed action"
        );

        self.current = next;

        if let Some(observer) = &self.observer {
            observer(&self.current);
        }

        Ok(&self.current)
    }
}
