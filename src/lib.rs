//! layerlog - call logging with dynamic call depth tracking
//!
//! Wraps functions and the methods of a type so that every call is logged on
//! entry (with its arguments) and on exit (with its result), indented by the
//! number of logged calls already active on the thread. Failures are logged
//! before being handed back unchanged.
//!
//! ```text
//! ⎡app::outer()
//! ⎢⎡app::inner()
//! ⎢⎣app::inner -> 42
//! ⎣app::outer -> 43
//! ```
//!
//! ## Architecture
//!
//! - `depth` - thread-local call depth with scoped increments
//! - `calls` - the call logger, closure wrappers and `logged_fn!`/`logged_impl!`
//! - `logging` - marker glyphs, sinks, the env_logger formatter, configuration
//!   and the depth-aware `LOG` adapter
//! - `python` - PyO3 extension module (feature `python`)

use lazy_static::lazy_static;
use parking_lot::RwLock;

pub mod calls;
pub mod depth;
pub mod error;
pub mod logging;
#[cfg(feature = "python")]
pub mod python;

pub use calls::{ArgList, CallFrame, CallLogger, Outcome, Reportable, Verbatim};
pub use error::{LayerlogError, Result};
pub use log::Level;
pub use logging::adapter::{LayeredLog, LOG};
pub use logging::config::{LoggerConfig, Stream};
pub use logging::markers::{draw_layers, MarkerStyle};
pub use logging::sink::{record_depth, CapturedLine, FacadeSink, LineSink, MemorySink};

lazy_static! {
    static ref GLOBAL_LOGGER: RwLock<CallLogger> = RwLock::new(CallLogger::new());
}

/// The process-wide call logger used by the macros and free functions.
pub fn global() -> CallLogger {
    GLOBAL_LOGGER.read().clone()
}

/// Change the entry/exit glyphs of the global call logger.
pub fn set_marker_style(style: MarkerStyle) {
    GLOBAL_LOGGER.write().set_style(style);
}

/// Install the layered env_logger backend with the default configuration.
///
/// Safe to call more than once; only the first call installs anything.
pub fn init_logger() {
    let _ = try_init(&LoggerConfig::default());
}

/// Validate `config`, apply its markers and install the env_logger backend.
pub fn try_init(config: &LoggerConfig) -> Result<()> {
    config.validate()?;
    logging::format::builder(config).try_init()?;
    set_marker_style(config.markers);
    Ok(())
}

/// Current call depth on this thread.
pub fn depth() -> usize {
    depth::current()
}

/// Wrap `func` with the global call logger. An `Err` return is logged as a
/// failure; see [`Reportable`].
pub fn log_callable<A, R, F>(func: F) -> impl Fn(A) -> R
where
    A: std::fmt::Debug,
    R: Reportable,
    F: Fn(A) -> R,
{
    global().log_callable(func)
}

/// Wrap a fallible `func` with the global call logger.
pub fn log_fallible<A, T, E, F>(func: F) -> impl Fn(A) -> std::result::Result<T, E>
where
    A: std::fmt::Debug,
    T: std::fmt::Debug,
    E: std::fmt::Display,
    F: Fn(A) -> std::result::Result<T, E>,
{
    global().log_fallible(func)
}
