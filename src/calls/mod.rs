//! Logged calls.
//!
//! - `logger` - [`CallLogger`] and the closure wrappers
//! - `frame` - a call in flight, restores depth on every exit path
//! - `outcome` - how a finished call is reported
//! - `macros` - `logged_fn!` / `logged_impl!` for functions and impl blocks

pub mod frame;
pub mod logger;
pub mod macros;
pub mod outcome;

pub use frame::*;
pub use logger::*;
pub use outcome::{ArgList, Outcome, Reportable, Verbatim};
