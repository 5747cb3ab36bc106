//! Running sibling programs side by side as one program.

#[cfg(feature = "no_std")]
use alloc::boxed::Box;
#[cfg(feature = "no_std")]
use alloc::vec::Vec;

use core::fmt;
use core::marker::PhantomData;
use core::ops::Index;

use portable_atomic_util::Arc;
use tracing::{debug, warn};

use crate::{map_program, Dispatcher, Effect, Logic, MappedProgram, Program, Tagged};

type Tagger<Msg> = Box<dyn Fn(Msg) -> Tagged<Msg> + Send + Sync>;

type Child<P> = MappedProgram<P, Tagger<<P as Logic>::Emit>, Tagged<<P as Logic>::Emit>>;

/// State of a batched program: one slot per child, in child order.
///
/// Slots are shared between successive states. Replacing a slot produces a
/// new `BatchState` and leaves every other slot pointing at the same value as
/// before, so a caller holding an older state keeps seeing it unchanged.
pub struct BatchState<S> {
    slots: Vec<Arc<S>>,
}

impl<S> BatchState<S> {
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&S> {
        self.slots.get(index).map(|slot| &**slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = &S> + '_ {
        self.slots.iter().map(|slot| &**slot)
    }

    /// Return a copy of this state with slot `index` replaced.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn replace(&self, index: usize, state: S) -> Self {
        let mut slots = self.slots.clone();
        slots[index] = Arc::new(state);
        Self { slots }
    }

    /// Whether slot `index` of both states refers to the same value.
    pub fn shares_slot(&self, other: &Self, index: usize) -> bool {
        match (self.slots.get(index), other.slots.get(index)) {
            (Some(mine), Some(theirs)) => Arc::ptr_eq(mine, theirs),
            _ => false,
        }
    }
}

impl<S> Clone for BatchState<S> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<S> From<Vec<S>> for BatchState<S> {
    fn from(states: Vec<S>) -> Self {
        Self {
            slots: states.into_iter().map(Arc::new).collect(),
        }
    }
}

impl<S> Index<usize> for BatchState<S> {
    type Output = S;

    fn index(&self, index: usize) -> &S {
        &self.slots[index]
    }
}

impl<S: PartialEq> PartialEq for BatchState<S> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<S: fmt::Debug> fmt::Debug for BatchState<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// A deferred render of one child, handed to the container view.
///
/// Nothing is rendered until [`render`](Self::render) is called, so the
/// container may skip or reorder children.
pub struct ChildView<'a, V> {
    index: usize,
    render: Box<dyn FnOnce() -> V + 'a>,
}

impl<'a, V> ChildView<'a, V> {
    fn new(index: usize, render: impl FnOnce() -> V + 'a) -> Self {
        Self {
            index,
            render: Box::new(render),
        }
    }

    /// Position of the child within its batch.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Render the child's view.
    pub fn render(self) -> V {
        (self.render)()
    }
}

/// Programs running side by side with independent state.
///
/// Created by [`batch_programs`]. Every message a child emits is wrapped in a
/// [`Tagged`] carrying the child's index; `update` routes on that index.
pub struct BatchedProgram<P: Logic, C, V> {
    children: Vec<Child<P>>,
    container_view: C,
    _view: PhantomData<fn() -> V>,
}

/// Combine `programs` into one program whose view is built by `container_view`.
///
/// - `init` collects each child's initial state into a [`BatchState`] and runs
///   all initial effects in order as one effect.
/// - `update` routes a [`Tagged`] message to the child at its index and
///   replaces only that child's slot.
/// - `view` passes one [`ChildView`] per child, in order, to `container_view`
///   and returns its result.
/// - `done` tears down each child that has a teardown step, in order, with
///   that child's slot.
///
/// # Example
///
/// ```rust
/// use mvu_compose::{batch_programs, Dispatcher, FnProgram, Logic, Program, Tagged};
///
/// let counter = |start: i32| {
///     FnProgram::builder()
///         .init(move || (start, None))
///         .update(|delta: i32, count: &i32| (count + delta, None))
///         .view(|count: &i32, _: &Dispatcher<i32>| count.to_string())
///         .build()
///         .unwrap()
/// };
///
/// let pair = batch_programs(vec![counter(1), counter(10)], |views| {
///     views.into_iter().map(|view| view.render()).collect::<Vec<_>>().join(" | ")
/// });
///
/// let (state, _) = pair.init();
/// let (state, _) = pair.update(Tagged::new(1, 5), &state);
///
/// let (dispatcher, _receiver) = Dispatcher::channel();
/// assert_eq!(pair.view(&state, &dispatcher), "1 | 15");
/// ```
pub fn batch_programs<P, C, V, I>(programs: I, container_view: C) -> BatchedProgram<P, C, V>
where
    P: Program,
    I: IntoIterator<Item = P>,
    C: for<'a> Fn(Vec<ChildView<'a, P::View>>) -> V,
{
    let children: Vec<Child<P>> = programs
        .into_iter()
        .enumerate()
        .map(|(index, program)| {
            let tagger: Tagger<P::Emit> = Box::new(move |msg| Tagged::new(index, msg));
            map_program(program, tagger)
        })
        .collect();

    debug!(children = children.len(), "batched programs");

    BatchedProgram {
        children,
        container_view,
        _view: PhantomData,
    }
}

impl<P: Logic, C, V> BatchedProgram<P, C, V> {
    /// Number of child programs.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<P: Logic, C, V> Logic for BatchedProgram<P, C, V> {
    type Msg = Tagged<P::Msg>;
    type Emit = Tagged<P::Emit>;
    type State = BatchState<P::State>;

    fn init(&self) -> (Self::State, Option<Effect<Self::Emit>>) {
        let mut slots = Vec::with_capacity(self.children.len());
        let mut effects = Vec::with_capacity(self.children.len());

        for child in &self.children {
            let (state, effect) = child.init();
            slots.push(Arc::new(state));
            effects.push(effect);
        }

        let effect = Effect::batch(effects).map_output(|_| ());
        (BatchState { slots }, Some(effect))
    }

    fn update(
        &self,
        msg: Self::Msg,
        state: &Self::State,
    ) -> (Self::State, Option<Effect<Self::Emit>>) {
        let (index, payload) = msg.into_parts();

        let (Some(child), Some(slot)) = (self.children.get(index), state.get(index)) else {
            warn!(
                index,
                children = self.children.len(),
                "dropping message tagged for an unknown child"
            );
            return (state.clone(), None);
        };

        let (next, effect) = child.update(payload, slot);
        (state.replace(index, next), effect)
    }

    fn has_done(&self) -> bool {
        self.children.iter().any(|child| child.has_done())
    }

    fn done(&self, state: &Self::State) -> Option<Effect<Self::Emit>> {
        let effects: Vec<Option<Effect<Self::Emit>>> = self
            .children
            .iter()
            .zip(state.iter())
            .filter(|(child, _)| child.has_done())
            .map(|(child, slot)| child.done(slot))
            .collect();

        if effects.iter().all(Option::is_none) {
            return None;
        }

        Some(Effect::batch(effects).map_output(|_| ()))
    }
}

impl<P, C, V> Program for BatchedProgram<P, C, V>
where
    P: Program,
    C: for<'a> Fn(Vec<ChildView<'a, P::View>>) -> V,
{
    type View = V;

    fn view(&self, state: &Self::State, dispatcher: &Dispatcher<Self::Emit>) -> V {
        let views: Vec<ChildView<'_, P::View>> = self
            .children
            .iter()
            .zip(state.iter())
            .enumerate()
            .map(|(index, (child, slot))| {
                let dispatcher = dispatcher.clone();
                ChildView::new(index, move || child.view(slot, &dispatcher))
            })
            .collect();

        (self.container_view)(views)
    }
}
