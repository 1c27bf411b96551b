//! Sluice: a unidirectional reducer state machine with a replay conduit
//!
//! Actions go in, states come out. A [`StateMachine`] applies the handler
//! registered for each action's variant to its current state and reports the
//! result to a single observer. A [`DamFlow`] sits between the machine and a
//! UI-style subscriber: it replays the latest persistent state to every new
//! subscriber and lets ephemeral one-shot states through exactly once.
//!
//! # Core Concepts
//!
//! - **State / Action**: application-defined types implementing the `State`
//!   and `Action` traits (or declared with `state_enum!` / `action_enum!`)
//! - **Reducers**: pure `(state, action) -> state` handlers, one per variant
//! - **DamFlow**: single-subscriber conduit with a one-slot replay cache
//!
//! Everything runs synchronously on the caller's stack.
//!
//! # Example
//!
//! ```rust
//! use sluice::{action_enum, state_enum, StateMachine};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! state_enum! {
//!     enum Upload {
//!         Idle,
//!         Sending,
//!         Done,
//!         Failed,
//!     }
//!     ephemeral: [Failed]
//! }
//!
//! action_enum! {
//!     enum UploadAction {
//!         Send,
//!         Finish,
//!         Error,
//!     }
//! }
//!
//! let mut machine = StateMachine::create(Upload::Idle, |b| {
//!     b.on("Send", |_, _| Upload::Sending)
//!         .on("Finish", |_, _| Upload::Done)
//!         .on("Error", |_, _| Upload::Failed)
//! })
//! .unwrap();
//!
//! let flow = machine.state_dam_flow();
//! machine.process(UploadAction::Send).unwrap();
//! machine.process(UploadAction::Error).unwrap();
//!
//! // A late subscriber sees the last persistent state, not the failure event.
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//! flow.subscribe(move |state: &Upload| sink.borrow_mut().push(state.clone()));
//! assert_eq!(*seen.borrow(), vec![Upload::Sending]);
//! ```

pub mod builder;
pub mod core;
pub mod flow;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::{BuildError, StateMachineBuilder};
pub use crate::core::{Action, State};
pub use crate::flow::DamFlow;
pub use crate::machine::{ProcessError, StateMachine};
