#![cfg_attr(feature = "no_std", no_std)]

//! Combinators for composing Model-View-Update (MVU) programs.
//!
//! A program is an initial state and effect, an `update` function folding
//! messages into new state/effect pairs, a `view`, and an optional teardown.
//! This crate lets independently written programs be nested, namespaced and
//! batched into one larger program without any of them knowing about their
//! siblings or their parent. Running the result is left to the caller.
//!
//! - [`map_effect`] / [`Effect::map`]: transform the messages an effect dispatches
//! - [`batch_effects`] / [`Effect::batch`]: run several optional effects as one
//! - [`map_program`]: lift a program into a parent's message space
//! - [`batch_programs`]: run sibling programs side by side under one container view
//! - [`assemble_program`]: wire a data source, logic and view into a program
//!
//! ## Example
//!
//! ```rust
//! use mvu_compose::{batch_programs, Dispatcher, Effect, Logic, Program};
//!
//! #[derive(Clone)]
//! enum Event { Increment }
//!
//! struct Counter { start: u32 }
//!
//! impl Logic for Counter {
//!     type Msg = Event;
//!     type Emit = Event;
//!     type State = u32;
//!
//!     fn init(&self) -> (u32, Option<Effect<Event>>) {
//!         (self.start, None)
//!     }
//!
//!     fn update(&self, event: Event, count: &u32) -> (u32, Option<Effect<Event>>) {
//!         match event {
//!             Event::Increment => (count + 1, None),
//!         }
//!     }
//! }
//!
//! struct Props { count: u32, on_increment: Box<dyn Fn()> }
//!
//! impl Program for Counter {
//!     type View = Props;
//!
//!     fn view(&self, count: &u32, dispatcher: &Dispatcher<Event>) -> Props {
//!         let dispatcher = dispatcher.clone();
//!         Props {
//!             count: *count,
//!             on_increment: Box::new(move || dispatcher.dispatch(Event::Increment)),
//!         }
//!     }
//! }
//!
//! let counters = batch_programs(
//!     vec![Counter { start: 0 }, Counter { start: 100 }],
//!     |views| views.into_iter().map(|view| view.render()).collect::<Vec<Props>>(),
//! );
//!
//! let (state, _effect) = counters.init();
//! let (dispatcher, receiver) = Dispatcher::channel();
//!
//! // Clicking the second counter produces a message tagged for it.
//! let props = counters.view(&state, &dispatcher);
//! (props[1].on_increment)();
//! let msg = receiver.try_recv().unwrap();
//! assert_eq!(msg.index(), 1);
//!
//! let (state, _effect) = counters.update(msg, &state);
//! let props = counters.view(&state, &dispatcher);
//! assert_eq!(props[0].count, 0);
//! assert_eq!(props[1].count, 101);
//! ```

#[cfg(feature = "no_std")]
extern crate alloc;

// Module declarations
mod assemble;
mod batch;
mod dispatcher;
mod effect;
mod error;
mod fn_program;
mod logic;
mod map;
mod tagged;
#[cfg(any(test, feature = "testing"))]
mod testing;

// Public re-exports
pub use assemble::{assemble_program, Assembled, Assembly};
pub use batch::{batch_programs, BatchState, BatchedProgram, ChildView};
pub use dispatcher::Dispatcher;
pub use effect::{batch_effects, map_effect, Effect};
pub use error::ComposeError;
pub use fn_program::{FnProgram, FnProgramBuilder};
pub use logic::{Logic, Program};
pub use map::{map_program, MappedProgram};
pub use tagged::Tagged;

// Test utilities (only available with 'testing' feature or during tests)
#[cfg(any(test, feature = "testing"))]
pub use testing::{TestDispatcher, TestDriver};
