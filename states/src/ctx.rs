use std::any::{TypeId, type_name};
use std::collections::HashMap;

use crate::{Command, State, StateCtxError};

/// Registry of application states and commands, keyed by type.
///
/// One value is stored per concrete state type; accessing a type that was
/// never [`add_state`](Self::add_state)-ed panics with a [`StateCtxError`]
/// (that is a wiring bug, not a runtime condition).
#[derive(Default)]
pub struct StateCtx {
    states: HashMap<TypeId, Box<dyn State>>,
    commands: HashMap<TypeId, Box<dyn Command>>,
}

impl StateCtx {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a state value. Replaces any previous value of the same type.
    pub fn add_state<T: State>(&mut self, state: T) {
        self.states.insert(TypeId::of::<T>(), Box::new(state));
    }

    /// Register a command so it can be [`dispatch`](Self::dispatch)-ed later.
    pub fn record_command<C: Command>(&mut self, command: C) {
        self.commands.insert(TypeId::of::<C>(), Box::new(command));
    }

    /// Read access to a registered state.
    pub fn state<T: State>(&self) -> &T {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|s| s.as_any().downcast_ref::<T>())
            .unwrap_or_else(|| {
                panic!(
                    "{}",
                    StateCtxError::StateNotRegistered {
                        type_name: type_name::<T>(),
                    }
                )
            })
    }

    /// Mutable access to a registered state.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|s| s.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| {
                panic!(
                    "{}",
                    StateCtxError::StateNotRegistered {
                        type_name: type_name::<T>(),
                    }
                )
            })
    }

    /// Mutate a state in place.
    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    /// Run a registered command against the current states.
    pub fn dispatch<C: Command>(&mut self) {
        let Some(command) = self.commands.get(&TypeId::of::<C>()) else {
            panic!(
                "{}",
                StateCtxError::CommandNotRegistered {
                    type_name: type_name::<C>(),
                }
            )
        };
        log::debug!("dispatch {}", type_name::<C>());
        let mut deps = Dep {
            states: &mut self.states,
        };
        command.run(&mut deps);
    }
}

/// View over the registered states handed to a running [`Command`].
pub struct Dep<'a> {
    states: &'a mut HashMap<TypeId, Box<dyn State>>,
}

impl Dep<'_> {
    /// Read access to a registered state.
    pub fn state_ref<T: State>(&self) -> &T {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|s| s.as_any().downcast_ref::<T>())
            .unwrap_or_else(|| {
                panic!(
                    "{}",
                    StateCtxError::StateNotRegistered {
                        type_name: type_name::<T>(),
                    }
                )
            })
    }

    /// Mutable access to a registered state.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|s| s.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| {
                panic!(
                    "{}",
                    StateCtxError::StateNotRegistered {
                        type_name: type_name::<T>(),
                    }
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::Any;

    #[derive(Debug, Default)]
    struct Counter {
        value: i32,
    }

    impl State for Counter {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    #[derive(Debug, Default)]
    struct StepInput {
        step: i32,
    }

    impl State for StepInput {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    #[derive(Debug, Default)]
    struct IncrementCommand;

    impl Command for IncrementCommand {
        fn run(&self, deps: &mut Dep<'_>) {
            let step = deps.state_ref::<StepInput>().step;
            deps.state_mut::<Counter>().value += step;
        }
    }

    fn setup_ctx() -> StateCtx {
        let mut ctx = StateCtx::new();
        ctx.add_state(Counter::default());
        ctx.add_state(StepInput { step: 1 });
        ctx.record_command(IncrementCommand);
        ctx
    }

    #[test]
    fn test_add_and_read_state() {
        let ctx = setup_ctx();
        assert_eq!(ctx.state::<Counter>().value, 0);
    }

    #[test]
    fn test_state_mut_and_update() {
        let mut ctx = setup_ctx();
        ctx.state_mut::<Counter>().value = 7;
        assert_eq!(ctx.state::<Counter>().value, 7);

        ctx.update::<Counter>(|c| c.value += 1);
        assert_eq!(ctx.state::<Counter>().value, 8);
    }

    #[test]
    fn test_add_state_replaces_previous_value() {
        let mut ctx = setup_ctx();
        ctx.state_mut::<Counter>().value = 5;
        ctx.add_state(Counter::default());
        assert_eq!(ctx.state::<Counter>().value, 0);
    }

    #[test]
    fn test_dispatch_reads_input_and_mutates_state() {
        let mut ctx = setup_ctx();

        ctx.dispatch::<IncrementCommand>();
        assert_eq!(ctx.state::<Counter>().value, 1);

        ctx.update::<StepInput>(|input| input.step = 10);
        ctx.dispatch::<IncrementCommand>();
        assert_eq!(ctx.state::<Counter>().value, 11);
    }

    #[test]
    #[should_panic(expected = "is not registered")]
    fn test_missing_state_panics() {
        let ctx = StateCtx::new();
        let _ = ctx.state::<Counter>();
    }

    #[test]
    #[should_panic(expected = "is not registered")]
    fn test_missing_command_panics() {
        let mut ctx = StateCtx::new();
        ctx.dispatch::<IncrementCommand>();
    }
}
