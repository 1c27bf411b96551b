//! Replay conduit between a state machine and a UI-style observer.
//!
//! - [`DamFlow`]: one live subscriber, latest persistent value replayed on
//!   subscribe, ephemeral values delivered live only
//! - [`bind`] / [`state_dam_flow`]: feed a machine's states into a flow,
//!   classifying each with [`State::is_ephemeral`](crate::core::State::is_ephemeral)
//!
//! For several independent observers, bind several flows to several
//! machines; a flow never fans out.

mod binding;
mod dam;

pub use binding::{bind, state_dam_flow};
pub use dam::{DamFlow, Subscriber};
