//! Declarative effect system for describing deferred work that dispatches messages.

#[cfg(feature = "no_std")]
use alloc::boxed::Box;
#[cfg(feature = "no_std")]
use alloc::vec::Vec;

use core::fmt;

use portable_atomic_util::Arc;

use crate::Dispatcher;

/// A deferred action that may dispatch messages and produce a value.
///
/// Effects are returned from [`Logic::init`](crate::Logic::init),
/// [`Logic::update`](crate::Logic::update) and [`Logic::done`](crate::Logic::done)
/// alongside the new state. Whoever runs the program executes them with a
/// [`Dispatcher`]; an effect may call that dispatcher any number of times.
///
/// "Nothing to run" is `None` of `Option<Effect<_>>`, which is distinct from
/// an effect that runs and does nothing. Combinators in this crate preserve
/// that distinction.
///
/// # Example
///
/// ```rust
/// use mvu_compose::{Dispatcher, Effect};
///
/// #[derive(Clone, Debug, PartialEq)]
/// enum Msg { Loaded(u32) }
///
/// let effect = Effect::new(|dispatcher: &Dispatcher<Msg>| {
///     dispatcher.dispatch(Msg::Loaded(7));
///     "done"
/// });
///
/// let (dispatcher, receiver) = Dispatcher::channel();
/// assert_eq!(effect.execute(&dispatcher), "done");
/// assert_eq!(receiver.try_recv().ok(), Some(Msg::Loaded(7)));
/// ```
#[allow(clippy::type_complexity)]
pub struct Effect<Msg, Out = ()>(Box<dyn Fn(&Dispatcher<Msg>) -> Out + Send + 'static>);

impl<Msg, Out> fmt::Debug for Effect<Msg, Out> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Effect").finish_non_exhaustive()
    }
}

impl<Msg: 'static, Out: 'static> Effect<Msg, Out> {
    /// Create an effect from a function of the dispatcher.
    pub fn new<F>(run: F) -> Self
    where
        F: Fn(&Dispatcher<Msg>) -> Out + Send + 'static,
    {
        Self(Box::new(run))
    }

    /// Run the effect against a dispatcher and return its value.
    pub fn execute(&self, dispatcher: &Dispatcher<Msg>) -> Out {
        (self.0)(dispatcher)
    }

    /// Pass every message this effect dispatches through `transform`.
    ///
    /// The effect's return value is left untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mvu_compose::{Dispatcher, Effect};
    ///
    /// let effect = Effect::new(|dispatcher: &Dispatcher<u32>| {
    ///     dispatcher.dispatch(1);
    ///     dispatcher.dispatch(2);
    /// })
    /// .map(|n| n + 1);
    ///
    /// let (dispatcher, receiver) = Dispatcher::channel();
    /// effect.execute(&dispatcher);
    /// assert_eq!(receiver.try_iter().collect::<Vec<u32>>(), vec![2, 3]);
    /// ```
    pub fn map<To, F>(self, transform: F) -> Effect<To, Out>
    where
        To: 'static,
        F: Fn(Msg) -> To + Send + Sync + 'static,
    {
        self.map_shared(Arc::new(transform))
    }

    pub(crate) fn map_shared<To, F>(self, transform: Arc<F>) -> Effect<To, Out>
    where
        To: 'static,
        F: Fn(Msg) -> To + Send + Sync + 'static,
    {
        Effect::new(move |dispatcher: &Dispatcher<To>| {
            self.execute(&dispatcher.contramap_shared(transform.clone()))
        })
    }

    /// Transform the value this effect returns.
    pub fn map_output<Next, F>(self, transform: F) -> Effect<Msg, Next>
    where
        Next: 'static,
        F: Fn(Out) -> Next + Send + 'static,
    {
        Effect::new(move |dispatcher: &Dispatcher<Msg>| transform(self.execute(dispatcher)))
    }

    /// Combine a sequence of optional effects into one effect.
    ///
    /// The combined effect runs every present effect in order against the same
    /// dispatcher. Its value lines up with the input: slot `i` holds the value
    /// of effect `i`, or `None` where no effect was given.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mvu_compose::{Dispatcher, Effect};
    ///
    /// let batch = Effect::batch(vec![
    ///     Some(Effect::new(|_: &Dispatcher<()>| 1)),
    ///     None,
    ///     Some(Effect::new(|_: &Dispatcher<()>| 3)),
    /// ]);
    ///
    /// let (dispatcher, _receiver) = Dispatcher::channel();
    /// assert_eq!(batch.execute(&dispatcher), vec![Some(1), None, Some(3)]);
    /// ```
    pub fn batch<I>(effects: I) -> Effect<Msg, Vec<Option<Out>>>
    where
        I: IntoIterator<Item = Option<Effect<Msg, Out>>>,
    {
        let effects: Vec<Option<Effect<Msg, Out>>> = effects.into_iter().collect();
        Effect::new(move |dispatcher: &Dispatcher<Msg>| {
            effects
                .iter()
                .map(|effect| effect.as_ref().map(|effect| effect.execute(dispatcher)))
                .collect()
        })
    }
}

impl<Msg: Clone + Send + 'static> Effect<Msg> {
    /// Create an effect that dispatches a single message.
    ///
    /// Useful for triggering immediate follow-up messages.
    pub fn just(msg: Msg) -> Self {
        Self::new(move |dispatcher: &Dispatcher<Msg>| dispatcher.dispatch(msg.clone()))
    }
}

/// Pass every message an optional effect dispatches through `transform`.
///
/// An absent effect stays absent; it is never replaced by a wrapper.
pub fn map_effect<Msg, To, Out, F>(
    effect: Option<Effect<Msg, Out>>,
    transform: F,
) -> Option<Effect<To, Out>>
where
    Msg: 'static,
    To: 'static,
    Out: 'static,
    F: Fn(Msg) -> To + Send + Sync + 'static,
{
    effect.map(|effect| effect.map(transform))
}

/// Combine optional effects into one effect that runs them in order.
///
/// See [`Effect::batch`].
pub fn batch_effects<Msg, Out, I>(effects: I) -> Effect<Msg, Vec<Option<Out>>>
where
    Msg: 'static,
    Out: 'static,
    I: IntoIterator<Item = Option<Effect<Msg, Out>>>,
{
    Effect::batch(effects)
}
