//! Reducer registry: one handler per action variant.

use super::action::Action;
use super::state::State;
use crate::builder::BuildError;
use crate::machine::ProcessError;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::error::Error;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Error raised by a fallible handler.
///
/// Kept boxed and unmodified as the `source` of
/// [`ProcessError::HandlerFailed`], so callers can downcast to the original type.
pub type HandlerError = Box<dyn Error + Send + Sync>;

/// Type alias for reducer functions stored in the registry.
pub type Reducer<S, A> = Box<dyn Fn(&S, &A) -> Result<S, HandlerError>>;

/// Immutable table mapping action variant names to reducers.
///
/// Built once by [`StateMachineBuilder`](crate::builder::StateMachineBuilder)
/// and owned by a single machine.
pub struct ReducerRegistry<S: State, A: Action> {
    handlers: HashMap<String, Reducer<S, A>>,
}

impl<S: State, A: Action> ReducerRegistry<S, A> {
    /// Build a registry from `(variant, reducer)` pairs in registration order.
    ///
    /// Every registration is checked; the error lists each variant that was
    /// registered more than once, in the order the duplicates were found.
    pub(crate) fn from_entries(entries: Vec<(String, Reducer<S, A>)>) -> Result<Self, BuildError> {
        let mut handlers = HashMap::with_capacity(entries.len());
        let mut checks: Vec<Validation<(), NonEmptyVec<String>>> = Vec::new();

        for (name, reducer) in entries {
            let check = match handlers.entry(name) {
                Entry::Occupied(entry) => Validation::fail(entry.key().clone()),
                Entry::Vacant(entry) => {
                    entry.insert(reducer);
                    Validation::success(())
                }
            };
            checks.push(check);
        }

        match Validation::all_vec(checks) {
            Validation::Success(_) => Ok(Self { handlers }),
            Validation::Failure(duplicates) => {
                let mut actions: Vec<String> = Vec::new();
                for name in duplicates.iter() {
                    if !actions.contains(name) {
                        actions.push(name.clone());
                    }
                }
                Err(BuildError::DuplicateHandlers { actions })
            }
        }
    }

    /// Find the reducer for this action's variant.
    pub fn resolve(&self, action: &A) -> Result<&Reducer<S, A>, ProcessError> {
        self.handlers
            .get(action.name())
            .ok_or_else(|| ProcessError::UnhandledAction {
                action: action.name().to_string(),
            })
    }

    /// Check if a handler is registered for the named variant.
    pub fn handles(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Registered variant names, sorted.
    pub fn action_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
