//! Counter with toast notifications
//!
//! This example demonstrates a reducer state machine feeding a DamFlow.
//!
//! Key concepts:
//! - One handler per action variant
//! - Late subscribers replay the latest persistent state
//! - Ephemeral toasts are shown once and never replayed
//! - A toast carries the count, so the next `Add` continues from it
//!
//! Run with: cargo run --example counter

use sluice::{action_enum, state_enum, StateMachine, StateMachineBuilder};

state_enum! {
    enum CounterState {
        Value(i64),
        Toast { count: i64, message: String },
    }
    ephemeral: [Toast]
}

action_enum! {
    enum CounterAction {
        Add(i64),
        Announce,
    }
}

fn value_of(state: &CounterState) -> i64 {
    match state {
        CounterState::Value(n) => *n,
        CounterState::Toast { count, .. } => *count,
    }
}

fn configure(
    builder: StateMachineBuilder<CounterState, CounterAction>,
) -> StateMachineBuilder<CounterState, CounterAction> {
    builder
        .on("Add", |state, action| match action {
            CounterAction::Add(n) => CounterState::Value(value_of(state) + n),
            _ => state.clone(),
        })
        .on("Announce", |state, _| {
            let count = value_of(state);
            CounterState::Toast {
                count,
                message: format!("counter is at {count}"),
            }
        })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Counter Example ===\n");

    let mut machine = StateMachine::create(CounterState::Value(0), configure)?;
    let flow = machine.state_dam_flow();

    machine.process(CounterAction::Add(2))?;
    machine.process(CounterAction::Add(3))?;

    println!("Attaching the view:");
    flow.subscribe(|state: &CounterState| println!("  view <- {state:?}"));

    machine.process(CounterAction::Announce)?;
    machine.process(CounterAction::Add(-1))?;

    println!("\nView detached and re-attached:");
    flow.unsubscribe();
    flow.subscribe(|state: &CounterState| println!("  view <- {state:?}"));

    println!("\nFinal state: {:?}", machine.current_state());

    println!("\n=== Example Complete ===");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_survives_a_toast() {
        let mut machine = StateMachine::create(CounterState::Value(0), configure).unwrap();

        machine.process(CounterAction::Add(2)).unwrap();
        machine.process(CounterAction::Add(3)).unwrap();
        let toast = machine.process(CounterAction::Announce).unwrap().clone();
        machine.process(CounterAction::Add(-1)).unwrap();

        assert_eq!(
            toast,
            CounterState::Toast {
                count: 5,
                message: "counter is at 5".to_string()
            }
        );
        assert_eq!(machine.current_state(), &CounterState::Value(4));
    }

    #[test]
    fn late_view_sees_count_not_toast() {
        let mut machine = StateMachine::create(CounterState::Value(0), configure).unwrap();
        let flow = machine.state_dam_flow();

        machine.process(CounterAction::Add(5)).unwrap();
        machine.process(CounterAction::Announce).unwrap();

        assert_eq!(flow.latest(), Some(CounterState::Value(5)));
    }
}
