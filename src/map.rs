//! Lifting a program into its parent's message space.

use core::marker::PhantomData;

use portable_atomic_util::Arc;

use crate::{Dispatcher, Effect, Logic, Program};

/// A program whose emitted messages pass through a transform.
///
/// Created by [`map_program`]. Incoming messages stay in the inner program's
/// own space; only what the program dispatches (from effects, views and
/// teardown) is transformed on its way out.
pub struct MappedProgram<P, F, To> {
    program: P,
    transform: Arc<F>,
    _to: PhantomData<fn() -> To>,
}

/// Lift `program` so that every message it emits is passed through `transform`.
///
/// - `init` keeps the inner state and maps the initial effect.
/// - `update` forwards the message unchanged and maps the resulting effect.
/// - `view` hands the inner view a dispatcher that transforms before forwarding.
/// - `done` exists exactly when the inner program has one; its effect is mapped too.
///
/// # Example
///
/// ```rust
/// use mvu_compose::{map_program, Dispatcher, FnProgram, Logic};
///
/// let counter = FnProgram::builder()
///     .init(|| (0u32, None))
///     .update(|step: u32, count: &u32| (count + step, None))
///     .view(|count: &u32, _: &Dispatcher<u32>| *count)
///     .build()
///     .unwrap();
///
/// let labelled = map_program(counter, |step: u32| format!("counter:{step}"));
/// let (state, effect) = labelled.init();
/// assert_eq!(state, 0);
/// assert!(effect.is_none());
/// ```
pub fn map_program<P, F, To>(program: P, transform: F) -> MappedProgram<P, F, To>
where
    P: Logic,
    To: 'static,
    F: Fn(P::Emit) -> To + Send + Sync + 'static,
{
    MappedProgram {
        program,
        transform: Arc::new(transform),
        _to: PhantomData,
    }
}

impl<P, F, To> MappedProgram<P, F, To>
where
    P: Logic,
    To: 'static,
    F: Fn(P::Emit) -> To + Send + Sync + 'static,
{
    /// The wrapped program.
    pub fn inner(&self) -> &P {
        &self.program
    }

    fn lift(&self, effect: Option<Effect<P::Emit>>) -> Option<Effect<To>> {
        effect.map(|effect| effect.map_shared(self.transform.clone()))
    }
}

impl<P, F, To> Logic for MappedProgram<P, F, To>
where
    P: Logic,
    To: 'static,
    F: Fn(P::Emit) -> To + Send + Sync + 'static,
{
    type Msg = P::Msg;
    type Emit = To;
    type State = P::State;

    fn init(&self) -> (Self::State, Option<Effect<To>>) {
        let (state, effect) = self.program.init();
        (state, self.lift(effect))
    }

    fn update(&self, msg: Self::Msg, state: &Self::State) -> (Self::State, Option<Effect<To>>) {
        let (state, effect) = self.program.update(msg, state);
        (state, self.lift(effect))
    }

    fn has_done(&self) -> bool {
        self.program.has_done()
    }

    fn done(&self, state: &Self::State) -> Option<Effect<To>> {
        self.lift(self.program.done(state))
    }
}

impl<P, F, To> Program for MappedProgram<P, F, To>
where
    P: Program,
    To: 'static,
    F: Fn(P::Emit) -> To + Send + Sync + 'static,
{
    type View = P::View;

    fn view(&self, state: &Self::State, dispatcher: &Dispatcher<To>) -> Self::View {
        let dispatcher = dispatcher.contramap_shared(self.transform.clone());
        self.program.view(state, &dispatcher)
    }
}
