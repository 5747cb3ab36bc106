//! Programs assembled from closures.

#[cfg(feature = "no_std")]
use alloc::boxed::Box;

use crate::{ComposeError, Dispatcher, Effect, Logic, Program};

type InitFn<M, S> = Box<dyn Fn() -> (S, Option<Effect<M>>)>;
type UpdateFn<M, S> = Box<dyn Fn(M, &S) -> (S, Option<Effect<M>>)>;
type ViewFn<M, S, V> = Box<dyn Fn(&S, &Dispatcher<M>) -> V>;
type DoneFn<M, S> = Box<dyn Fn(&S) -> Option<Effect<M>>>;

/// A [`Program`] whose parts are closures.
///
/// Handy for small programs and tests where a dedicated type would be noise.
/// Build one with [`FnProgram::builder`].
pub struct FnProgram<M, S, V> {
    init: InitFn<M, S>,
    update: UpdateFn<M, S>,
    view: ViewFn<M, S, V>,
    done: Option<DoneFn<M, S>>,
}

impl<M: 'static, S, V> FnProgram<M, S, V> {
    pub fn builder() -> FnProgramBuilder<M, S, V> {
        FnProgramBuilder {
            init: None,
            update: None,
            view: None,
            done: None,
        }
    }
}

/// Builder for [`FnProgram`].
///
/// `init`, `update` and `view` are required; `done` is optional.
///
/// # Example
///
/// ```rust
/// use mvu_compose::{ComposeError, FnProgram};
///
/// let missing_view = FnProgram::<u8, u8, ()>::builder()
///     .init(|| (0, None))
///     .update(|_: u8, state: &u8| (*state, None))
///     .build();
///
/// assert!(matches!(missing_view, Err(ComposeError::MissingField { field: "view" })));
/// ```
pub struct FnProgramBuilder<M, S, V> {
    init: Option<InitFn<M, S>>,
    update: Option<UpdateFn<M, S>>,
    view: Option<ViewFn<M, S, V>>,
    done: Option<DoneFn<M, S>>,
}

impl<M: 'static, S, V> FnProgramBuilder<M, S, V> {
    pub fn init<F>(mut self, init: F) -> Self
    where
        F: Fn() -> (S, Option<Effect<M>>) + 'static,
    {
        self.init = Some(Box::new(init));
        self
    }

    pub fn update<F>(mut self, update: F) -> Self
    where
        F: Fn(M, &S) -> (S, Option<Effect<M>>) + 'static,
    {
        self.update = Some(Box::new(update));
        self
    }

    pub fn view<F>(mut self, view: F) -> Self
    where
        F: Fn(&S, &Dispatcher<M>) -> V + 'static,
    {
        self.view = Some(Box::new(view));
        self
    }

    pub fn done<F>(mut self, done: F) -> Self
    where
        F: Fn(&S) -> Option<Effect<M>> + 'static,
    {
        self.done = Some(Box::new(done));
        self
    }

    /// Finish the program, failing if a required part was never supplied.
    pub fn build(self) -> Result<FnProgram<M, S, V>, ComposeError> {
        let init = self.init.ok_or(ComposeError::MissingField { field: "init" })?;
        let update = self
            .update
            .ok_or(ComposeError::MissingField { field: "update" })?;
        let view = self.view.ok_or(ComposeError::MissingField { field: "view" })?;

        Ok(FnProgram {
            init,
            update,
            view,
            done: self.done,
        })
    }
}

impl<M: 'static, S, V> Logic for FnProgram<M, S, V> {
    type Msg = M;
    type Emit = M;
    type State = S;

    fn init(&self) -> (S, Option<Effect<M>>) {
        (self.init)()
    }

    fn update(&self, msg: M, state: &S) -> (S, Option<Effect<M>>) {
        (self.update)(msg, state)
    }

    fn has_done(&self) -> bool {
        self.done.is_some()
    }

    fn done(&self, state: &S) -> Option<Effect<M>> {
        self.done.as_ref().and_then(|done| done(state))
    }
}

impl<M: 'static, S, V> Program for FnProgram<M, S, V> {
    type View = V;

    fn view(&self, state: &S, dispatcher: &Dispatcher<M>) -> V {
        (self.view)(state, dispatcher)
    }
}
