//! Traits defining the program contract.

#[cfg(feature = "no_std")]
use alloc::boxed::Box;

use crate::{Dispatcher, Effect};

/// The state-handling half of a program: everything except the view.
///
/// Implementations provide pure functions:
/// - [`init`](Self::init): produce the initial state and effect
/// - [`update`](Self::update): fold (Msg, State) into (State, Effect)
/// - [`done`](Self::done): optional teardown, signalled by [`has_done`](Self::has_done)
///
/// `Msg` is what `update` receives and `Emit` is what effects dispatch. They
/// are the same type for an ordinary program. A program produced by
/// [`map_program`](crate::map_program) keeps receiving its own messages but
/// emits them in its parent's message space, so the two differ there.
///
/// See the [crate-level documentation](crate) for a complete example.
pub trait Logic {
    /// Messages consumed by [`update`](Self::update).
    type Msg;
    /// Messages dispatched by this program's effects and view.
    type Emit: 'static;
    type State;

    /// Produce the initial state and the effect to run at startup.
    ///
    /// Called once, before any message is processed.
    fn init(&self) -> (Self::State, Option<Effect<Self::Emit>>);

    /// Reduce a message to a new state and an optional effect.
    ///
    /// The previous state is borrowed, never mutated. All state changes must
    /// happen through the returned value.
    fn update(
        &self,
        msg: Self::Msg,
        state: &Self::State,
    ) -> (Self::State, Option<Effect<Self::Emit>>);

    /// Whether this program has a teardown step.
    fn has_done(&self) -> bool {
        false
    }

    /// Tear down from the final state, optionally returning a last effect.
    ///
    /// Only meaningful when [`has_done`](Self::has_done) returns `true`;
    /// called at most once.
    fn done(&self, state: &Self::State) -> Option<Effect<Self::Emit>> {
        let _ = state;
        None
    }
}

/// A complete program: [`Logic`] plus a view.
///
/// The view turns a state into a `View` value. The [`Dispatcher`] lets that
/// value carry callbacks which feed messages back into the program. This
/// crate never inspects a `View`; it only threads it through.
pub trait Program: Logic {
    type View;

    fn view(&self, state: &Self::State, dispatcher: &Dispatcher<Self::Emit>) -> Self::View;
}

impl<L: Logic + ?Sized> Logic for Box<L> {
    type Msg = L::Msg;
    type Emit = L::Emit;
    type State = L::State;

    fn init(&self) -> (Self::State, Option<Effect<Self::Emit>>) {
        (**self).init()
    }

    fn update(
        &self,
        msg: Self::Msg,
        state: &Self::State,
    ) -> (Self::State, Option<Effect<Self::Emit>>) {
        (**self).update(msg, state)
    }

    fn has_done(&self) -> bool {
        (**self).has_done()
    }

    fn done(&self, state: &Self::State) -> Option<Effect<Self::Emit>> {
        (**self).done(state)
    }
}

impl<P: Program + ?Sized> Program for Box<P> {
    type View = P::View;

    fn view(&self, state: &Self::State, dispatcher: &Dispatcher<Self::Emit>) -> Self::View {
        (**self).view(state, dispatcher)
    }
}
