//! Core types shared by the machine and the conduit.
//!
//! This module contains the capabilities the application's own types provide:
//! - State definitions via the `State` trait, including ephemeral tagging
//! - Action definitions via the `Action` trait
//! - The reducer registry that maps action variants to handlers

mod action;
mod registry;
mod state;

pub use action::Action;
pub use registry::{HandlerError, Reducer, ReducerRegistry};
pub use state::State;
