//! Message dispatcher handed to effects and views.

#[cfg(feature = "no_std")]
use alloc::boxed::Box;

use portable_atomic_util::Arc;

/// Handle that injects messages back into a program.
///
/// Effects receive a `Dispatcher` when executed and views receive one to
/// build callbacks. Cloning is cheap: every clone shares the same callback.
///
/// # Example
///
/// ```rust
/// use mvu_compose::Dispatcher;
///
/// let (dispatcher, receiver) = Dispatcher::channel();
/// let doubled = dispatcher.contramap(|n: i32| n * 2);
///
/// doubled.dispatch(21);
/// assert_eq!(receiver.try_recv().ok(), Some(42));
/// ```
#[allow(clippy::type_complexity)]
pub struct Dispatcher<Msg>(Arc<Box<dyn Fn(Msg) + Send + Sync>>);

impl<Msg> Clone for Dispatcher<Msg> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<Msg: 'static> Dispatcher<Msg> {
    /// Create a dispatcher from a callback.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(Msg) + Send + Sync + 'static,
    {
        Self(Arc::new(Box::new(callback)))
    }

    /// Create a dispatcher that queues every message on an unbounded channel.
    ///
    /// Messages sent after the receiver is dropped are discarded.
    pub fn channel() -> (Self, flume::Receiver<Msg>)
    where
        Msg: Send,
    {
        let (sender, receiver) = flume::unbounded();
        let dispatcher = Self::new(move |msg| {
            sender.send(msg).ok();
        });
        (dispatcher, receiver)
    }

    /// Dispatch a message.
    pub fn dispatch(&self, msg: Msg) {
        (self.0)(msg);
    }

    /// Create a dispatcher for another message type whose messages are passed
    /// through `transform` before reaching this dispatcher.
    pub fn contramap<Source, F>(&self, transform: F) -> Dispatcher<Source>
    where
        Source: 'static,
        F: Fn(Source) -> Msg + Send + Sync + 'static,
    {
        self.contramap_shared(Arc::new(transform))
    }

    pub(crate) fn contramap_shared<Source, F>(&self, transform: Arc<F>) -> Dispatcher<Source>
    where
        Source: 'static,
        F: Fn(Source) -> Msg + Send + Sync + 'static,
    {
        let target = self.clone();
        Dispatcher::new(move |msg: Source| target.dispatch((*transform)(msg)))
    }
}
