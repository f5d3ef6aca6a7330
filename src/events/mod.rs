//! Event handling for fxpulse.
//!
//! Terminal input is polled by the [`EventHandler`] and mapped through the
//! configured key bindings to [`Action`](crate::state::Action)s.

mod handler;
mod input;

pub use handler::EventHandler;
pub use input::{InputEvent, Key, Modifiers};
