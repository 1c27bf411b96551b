//! Binds a state machine's observer slot to a [`DamFlow`].

use super::dam::DamFlow;
use crate::core::{Action, State};
use crate::machine::StateMachine;

/// Route every state the machine reports into `flow`.
///
/// Each notification is sent as ephemeral or persistent according to
/// [`State::is_ephemeral`]. Installing the observer counts as an observer
/// attach on the machine, so the first binding on a machine sends its current
/// state into the flow right away.
pub fn bind<S, A>(machine: &mut StateMachine<S, A>, flow: &DamFlow<S>)
where
    S: State,
    A: Action,
{
    let sink = flow.clone();
    machine.set_observer(move |state: &S| sink.send(state.clone(), state.is_ephemeral()));
}

/// Create a fresh [`DamFlow`] fed by `machine`.
pub fn state_dam_flow<S, A>(machine: &mut StateMachine<S, A>) -> DamFlow<S>
where
    S: State,
    A: Action,
{
    let flow = DamFlow::new();
    bind(machine, &flow);
    flow
}

impl<S: State, A: Action> StateMachine<S, A> {
    /// Create a fresh [`DamFlow`] fed by this machine.
    ///
    /// Replaces any observer already installed.
    pub fn state_dam_flow(&mut self) -> DamFlow<S> {
        state_dam_flow(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, PartialEq, Debug)]
    enum Screen {
        Blank,
        Ready,
        Toast,
    }

    impl State for Screen {
        fn name(&self) -> &str {
            match self {
                Self::Blank => "Blank",
                Self::Ready => "Ready",
                Self::Toast => "Toast",
            }
        }

        fn is_ephemeral(&self) -> bool {
            matches!(self, Self::Toast)
        }
    }

    #[derive(Debug)]
    enum Input {
        Load,
        Notify,
    }

    impl Action for Input {
        fn name(&self) -> &str {
            match self {
                Self::Load => "Load",
                Self::Notify => "Notify",
            }
        }
    }

    fn screen() -> StateMachine<Screen, Input> {
        StateMachine::create(Screen::Blank, |b| {
            b.on("Load", |_, _| Screen::Ready)
                .on("Notify", |_, _| Screen::Toast)
        })
        .unwrap()
    }

    #[test]
    fn first_binding_caches_current_state() {
        let mut machine = screen();

        let flow = machine.state_dam_flow();

        assert!(machine.has_observer());
        assert_eq!(flow.latest(), Some(Screen::Blank));
    }

    #[test]
    fn processed_states_reach_the_flow() {
        let mut machine = screen();
        let flow = state_dam_flow(&mut machine);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        flow.subscribe(move |s: &Screen| sink.borrow_mut().push(s.clone()));

        machine.process(Input::Load).unwrap();

        assert_eq!(*seen.borrow(), vec![Screen::Blank, Screen::Ready]);
    }

    #[test]
    fn ephemeral_states_bypass_the_cache() {
        let mut machine = screen();
        let flow = machine.state_dam_flow();
        machine.process(Input::Load).unwrap();

        machine.process(Input::Notify).unwrap();

        assert_eq!(machine.current_state(), &Screen::Toast);
        assert_eq!(flow.latest(), Some(Screen::Ready));
    }

    #[test]
    fn bind_reuses_an_existing_flow() {
        let mut machine = screen();
        let flow = DamFlow::new();
        flow.send_value(Screen::Ready);

        bind(&mut machine, &flow);

        assert_eq!(flow.latest(), Some(Screen::Blank));
    }
}
