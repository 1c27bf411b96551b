//! Core State trait for state machine states.
//!
//! States are the values a machine moves between. A state type decides for
//! itself which of its variants are ephemeral: one-shot events that should be
//! observed once by whoever is listening and never replayed afterwards.

use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure - no side effects. States represent immutable
/// values that describe the current condition of the machine.
///
/// # Required Traits
///
/// - `Clone`: States are cloned into replay caches
/// - `PartialEq`: States must be comparable in tests and by observers
/// - `Debug`: States must be debuggable for diagnostics
///
/// # Example
///
/// ```rust
/// use sluice::core::State;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum ScreenState {
///     Loading,
///     Loaded(Vec<String>),
///     Toast(String),
/// }
///
/// impl State for ScreenState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Loading => "Loading",
///             Self::Loaded(_) => "Loaded",
///             Self::Toast(_) => "Toast",
///         }
///     }
///
///     fn is_ephemeral(&self) -> bool {
///         matches!(self, Self::Toast(_))
///     }
/// }
///
/// assert!(ScreenState::Toast("saved".into()).is_ephemeral());
/// assert!(!ScreenState::Loading.is_ephemeral());
/// ```
pub trait State: Clone + PartialEq + Debug + 'static {
    /// Get the state's variant name for display/logging.
    fn name(&self) -> &str;

    /// Check if this state is a one-shot event.
    ///
    /// Ephemeral states are delivered to the subscriber attached at the
    /// moment they are emitted and are never cached for replay.
    ///
    /// Default implementation returns `false`.
    fn is_ephemeral(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    enum TestState {
        Idle,
        Counting(u32),
        Flash(String),
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Counting(_) => "Counting",
                Self::Flash(_) => "Flash",
            }
        }

        fn is_ephemeral(&self) -> bool {
            matches!(self, Self::Flash(_))
        }
    }

    #[derive(Clone, PartialEq, Debug)]
    struct Plain;

    impl State for Plain {
        fn name(&self) -> &str {
            "Plain"
        }
    }

    #[test]
    fn state_name_ignores_payload() {
        assert_eq!(TestState::Idle.name(), "Idle");
        assert_eq!(TestState::Counting(3).name(), "Counting");
        assert_eq!(TestState::Flash("hi".into()).name(), "Flash");
    }

    #[test]
    fn is_ephemeral_identifies_one_shot_states() {
        assert!(!TestState::Idle.is_ephemeral());
        assert!(!TestState::Counting(1).is_ephemeral());
        assert!(TestState::Flash("hi".into()).is_ephemeral());
    }

    #[test]
    fn states_are_persistent_by_default() {
        assert!(!Plain.is_ephemeral());
    }
}
