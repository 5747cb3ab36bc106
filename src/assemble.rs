//! Wiring a data source, logic and view into one program.

use core::marker::PhantomData;

use crate::{Dispatcher, Effect, Logic, Program};

/// The parts handed to [`assemble_program`], each with its own options.
pub struct Assembly<D, DO, L, LO, V, VO> {
    /// Produces the data the logic is built from.
    pub data: D,
    pub data_options: DO,
    /// Builds the program logic from the provided data.
    pub logic: L,
    pub logic_options: LO,
    /// Renders a state; receives `view_options` on every call.
    pub view: V,
    pub view_options: VO,
}

/// A program made of assembled logic and a separately supplied view.
///
/// Created by [`assemble_program`].
pub struct Assembled<L, V, VO, R> {
    logic: L,
    view: V,
    view_options: VO,
    _view: PhantomData<fn() -> R>,
}

/// Build a program from an [`Assembly`].
///
/// Calls `data(data_options)`, passes the result with `logic_options` to
/// `logic`, and pairs the returned logic with `view`. Any view the logic
/// itself carries is ignored. The logic is used exactly as returned.
///
/// # Example
///
/// ```rust
/// use mvu_compose::{assemble_program, Assembly, Dispatcher, FnProgram, Logic, Program};
///
/// let program = assemble_program(Assembly {
///     data: |greeting: &'static str| greeting.len(),
///     data_options: "hello",
///     logic: |len: usize, step: usize| {
///         FnProgram::builder()
///             .init(move || (len, None))
///             .update(move |_: (), state: &usize| (state + step, None))
///             .view(|_: &usize, _: &Dispatcher<()>| ())
///             .build()
///             .unwrap()
///     },
///     logic_options: 2,
///     view: |state: &usize, _: &Dispatcher<()>, prefix: &String| format!("{prefix}{state}"),
///     view_options: String::from("len="),
/// });
///
/// let (state, _) = program.init();
/// let (dispatcher, _receiver) = Dispatcher::channel();
/// assert_eq!(program.view(&state, &dispatcher), "len=5");
/// ```
pub fn assemble_program<D, DO, Data, L, LO, Out, V, VO, R>(
    assembly: Assembly<D, DO, L, LO, V, VO>,
) -> Assembled<Out, V, VO, R>
where
    D: FnOnce(DO) -> Data,
    L: FnOnce(Data, LO) -> Out,
    Out: Logic,
    V: Fn(&Out::State, &Dispatcher<Out::Emit>, &VO) -> R,
{
    let Assembly {
        data,
        data_options,
        logic,
        logic_options,
        view,
        view_options,
    } = assembly;

    Assembled {
        logic: logic(data(data_options), logic_options),
        view,
        view_options,
        _view: PhantomData,
    }
}

impl<L, V, VO, R> Assembled<L, V, VO, R> {
    /// The logic returned by the assembly's `logic` function.
    pub fn logic(&self) -> &L {
        &self.logic
    }

    pub fn view_options(&self) -> &VO {
        &self.view_options
    }
}

impl<L: Logic, V, VO, R> Logic for Assembled<L, V, VO, R> {
    type Msg = L::Msg;
    type Emit = L::Emit;
    type State = L::State;

    fn init(&self) -> (Self::State, Option<Effect<Self::Emit>>) {
        self.logic.init()
    }

    fn update(
        &self,
        msg: Self::Msg,
        state: &Self::State,
    ) -> (Self::State, Option<Effect<Self::Emit>>) {
        self.logic.update(msg, state)
    }

    fn has_done(&self) -> bool {
        self.logic.has_done()
    }

    fn done(&self, state: &Self::State) -> Option<Effect<Self::Emit>> {
        self.logic.done(state)
    }
}

impl<L, V, VO, R> Program for Assembled<L, V, VO, R>
where
    L: Logic,
    V: Fn(&L::State, &Dispatcher<L::Emit>, &VO) -> R,
{
    type View = R;

    fn view(&self, state: &Self::State, dispatcher: &Dispatcher<Self::Emit>) -> R {
        (self.view)(state, dispatcher, &self.view_options)
    }
}
