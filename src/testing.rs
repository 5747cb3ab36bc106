//! Test harness for driving composed programs by hand.

#[cfg(feature = "no_std")]
use alloc::vec::Vec;

use portable_atomic_util::Arc;
use spin::Mutex;
use tracing::trace;

use crate::{Dispatcher, Program};

/// Dispatcher that records every message it receives.
///
/// Only available with the `testing` feature.
///
/// # Example
///
/// ```rust
/// use mvu_compose::{Effect, TestDispatcher};
///
/// let recorder = TestDispatcher::new();
/// Effect::just(3u8).map(|n| n * 2).execute(&recorder.dispatcher());
///
/// recorder.with_messages(|messages| assert_eq!(messages, &vec![6]));
/// ```
pub struct TestDispatcher<Msg> {
    messages: Arc<Mutex<Vec<Msg>>>,
}

impl<Msg> Clone for TestDispatcher<Msg> {
    fn clone(&self) -> Self {
        Self {
            messages: self.messages.clone(),
        }
    }
}

impl<Msg: Send + 'static> Default for TestDispatcher<Msg> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Msg: Send + 'static> TestDispatcher<Msg> {
    pub fn new() -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A dispatcher that appends to this recorder.
    pub fn dispatcher(&self) -> Dispatcher<Msg> {
        let messages = self.messages.clone();
        Dispatcher::new(move |msg| messages.lock().push(msg))
    }

    /// Number of messages recorded so far.
    pub fn count(&self) -> usize {
        self.messages.lock().len()
    }

    /// Access the recorded messages with a closure.
    pub fn with_messages<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Vec<Msg>) -> R,
    {
        let messages = self.messages.lock();
        f(&messages)
    }

    /// Remove and return every recorded message.
    pub fn take(&self) -> Vec<Msg> {
        core::mem::take(&mut *self.messages.lock())
    }
}

/// Manual-step driver for a [`Program`].
///
/// Only available with the `testing` feature or during tests.
///
/// Plays the part of the runtime that this crate leaves out: it runs `init`,
/// renders, executes effects and feeds dispatched messages back through
/// `update`. Nothing happens between calls; tests decide when queued
/// messages are processed.
///
/// ```rust
/// use mvu_compose::{Dispatcher, Effect, FnProgram, TestDriver};
///
/// let program = FnProgram::builder()
///     .init(|| (0, Some(Effect::just(1))))
///     .update(|n: i32, total: &i32| (total + n, None))
///     .view(|total: &i32, _: &Dispatcher<i32>| *total)
///     .build()
///     .unwrap();
///
/// let mut driver = TestDriver::start(program);
/// driver.process_messages();
///
/// assert_eq!(*driver.state(), 1);
/// driver.with_renders(|renders| assert_eq!(renders, &vec![0, 1]));
/// ```
pub struct TestDriver<P: Program> {
    program: P,
    state: P::State,
    dispatcher: Dispatcher<P::Emit>,
    receiver: flume::Receiver<P::Emit>,
    renders: Vec<P::View>,
    torn_down: bool,
}

impl<P, Msg> TestDriver<P>
where
    P: Program<Msg = Msg, Emit = Msg>,
    Msg: Send + 'static,
{
    /// Initialize the program, render its initial view and run its initial effect.
    ///
    /// Messages dispatched by the initial effect are queued, not processed.
    pub fn start(program: P) -> Self {
        let (dispatcher, receiver) = Dispatcher::channel();
        let (state, effect) = program.init();

        let initial_view = program.view(&state, &dispatcher);

        if let Some(effect) = effect {
            effect.execute(&dispatcher);
        }

        Self {
            program,
            state,
            dispatcher,
            receiver,
            renders: Vec::from([initial_view]),
            torn_down: false,
        }
    }

    /// Process queued messages until the queue is empty.
    ///
    /// Messages dispatched while processing are handled in the same call.
    pub fn process_messages(&mut self) {
        while let Ok(msg) = self.receiver.try_recv() {
            self.step(msg);
        }
    }

    fn step(&mut self, msg: Msg) {
        trace!(renders = self.renders.len(), "processing message");

        let (state, effect) = self.program.update(msg, &self.state);
        self.renders.push(self.program.view(&state, &self.dispatcher));
        self.state = state;

        if let Some(effect) = effect {
            effect.execute(&self.dispatcher);
        }
    }

    /// Run the program's teardown against the current state.
    ///
    /// Returns `false` without doing anything if the program has no teardown
    /// step or was already torn down. Messages dispatched by the teardown
    /// effect stay queued; see [`take_pending`](Self::take_pending).
    pub fn teardown(&mut self) -> bool {
        if self.torn_down || !self.program.has_done() {
            return false;
        }

        trace!("tearing down program");
        self.torn_down = true;

        if let Some(effect) = self.program.done(&self.state) {
            effect.execute(&self.dispatcher);
        }
        true
    }

    /// Remove and return queued messages without processing them.
    pub fn take_pending(&mut self) -> Vec<Msg> {
        self.receiver.try_iter().collect()
    }

    /// Dispatcher feeding this driver's queue.
    pub fn dispatcher(&self) -> Dispatcher<Msg> {
        self.dispatcher.clone()
    }

    pub fn state(&self) -> &P::State {
        &self.state
    }

    pub fn program(&self) -> &P {
        &self.program
    }

    /// Number of views rendered so far, including the initial one.
    pub fn render_count(&self) -> usize {
        self.renders.len()
    }

    /// Access every rendered view with a closure.
    pub fn with_renders<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Vec<P::View>) -> R,
    {
        f(&self.renders)
    }
}
