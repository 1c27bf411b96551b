//! Action trait for inputs that drive the state machine.

use std::fmt::Debug;

/// Trait for actions processed by a state machine.
///
/// The variant name is the dispatch key: the machine looks up the handler
/// registered under `name()` for every processed action, so every value of
/// one variant must report the same name regardless of its payload.
///
/// # Example
///
/// ```rust
/// use sluice::core::Action;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum CounterAction {
///     Increment,
///     Add(i64),
/// }
///
/// impl Action for CounterAction {
///     fn name(&self) -> &str {
///         match self {
///             Self::Increment => "Increment",
///             Self::Add(_) => "Add",
///         }
///     }
/// }
///
/// assert_eq!(CounterAction::Add(5).name(), "Add");
/// ```
pub trait Action: Debug + 'static {
    /// Get the action's variant name, used to resolve its handler.
    fn name(&self) -> &str;
}
