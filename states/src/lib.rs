//! Typed state registry for the Gatehouse admin console.
//!
//! The UI follows a simple contract:
//! - UI reads state and renders
//! - UI dispatches commands
//! - Commands mutate state through a [`Dep`] view
//!
//! All state lives in a [`StateCtx`], keyed by type. Async work (network IO)
//! never runs in here; callbacks deposit their results elsewhere and a
//! per-frame poll writes them back into states on the UI thread.

mod command;
mod ctx;
mod error;
mod state;
mod time;

pub use command::Command;
pub use ctx::{Dep, StateCtx};
pub use error::StateCtxError;
pub use state::State;
pub use time::Time;
