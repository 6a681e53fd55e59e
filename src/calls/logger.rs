//! Call logger: wraps operations with entry/exit/error logging.

use std::any::type_name;
use std::fmt;

use super::frame::CallFrame;
use super::outcome::{ArgList, Outcome, Reportable};
use crate::logging::markers::MarkerStyle;
use crate::logging::sink::{FacadeSink, LineSink};

/// Logs the inputs, outputs and call depth of the operations it wraps.
///
/// Every wrapped call logs `⎡name(args)` at the depth it was called from,
/// runs one level deeper, then logs `⎣name -> value` (or
/// `Error in name: message` for a failure) back at the calling depth. The
/// wrapped operation's result is handed back untouched.
#[derive(Debug, Clone, Default)]
pub struct CallLogger<S = FacadeSink> {
    sink: S,
    style: MarkerStyle,
}

impl CallLogger<FacadeSink> {
    pub const fn new() -> Self {
        Self {
            sink: FacadeSink::new(),
            style: MarkerStyle::new(),
        }
    }
}

impl<S> CallLogger<S> {
    pub fn with_sink(sink: S) -> Self {
        Self {
            sink,
            style: MarkerStyle::default(),
        }
    }

    pub fn with_style(mut self, style: MarkerStyle) -> Self {
        self.style = style;
        self
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn style(&self) -> &MarkerStyle {
        &self.style
    }

    pub(crate) fn set_style(&mut self, style: MarkerStyle) {
        self.style = style;
    }
}

impl<S: LineSink> CallLogger<S> {
    /// Log entry for `name` and go one level deeper.
    pub fn enter<'a>(&'a self, name: &'a str, args: &dyn fmt::Display) -> CallFrame<'a, S> {
        CallFrame::enter(self, name, args)
    }

    /// Run `body` as a logged call. The value is always reported as a return.
    pub fn call<R, F>(&self, name: &str, args: &dyn fmt::Display, body: F) -> R
    where
        R: fmt::Debug,
        F: FnOnce() -> R,
    {
        let frame = self.enter(name, args);
        let result = body();
        frame.finish(Outcome::Returned(&result));
        result
    }

    /// Run a fallible `body` as a logged call. `Err` is logged at error level
    /// and returned as is.
    pub fn try_call<T, E, F>(&self, name: &str, args: &dyn fmt::Display, body: F) -> Result<T, E>
    where
        T: fmt::Debug,
        E: fmt::Display,
        F: FnOnce() -> Result<T, E>,
    {
        let frame = self.enter(name, args);
        let result = body();
        frame.finish(Outcome::of_result(&result));
        result
    }
}

impl<S: LineSink + Clone> CallLogger<S> {
    /// Wrap `func`, naming it after its type path (`crate::module::function`
    /// for function items).
    ///
    /// The return type decides how a call is reported: `Err` from a
    /// `Result<T, E: Display>` is a failure, anything else a return.
    pub fn log_callable<A, R, F>(&self, func: F) -> impl Fn(A) -> R
    where
        A: fmt::Debug,
        R: Reportable,
        F: Fn(A) -> R,
    {
        self.log_callable_named(type_name::<F>(), func)
    }

    pub fn log_callable_named<A, R, F>(&self, name: &'static str, func: F) -> impl Fn(A) -> R
    where
        A: fmt::Debug,
        R: Reportable,
        F: Fn(A) -> R,
    {
        let logger = self.clone();
        move |args: A| {
            let frame = logger.enter(name, &ArgList(&[("args", &args as &dyn fmt::Debug)]));
            let result = func(args);
            frame.finish(result.outcome());
            result
        }
    }

    /// Wrap a fallible `func`; see [`CallLogger::try_call`].
    pub fn log_fallible<A, T, E, F>(&self, func: F) -> impl Fn(A) -> Result<T, E>
    where
        A: fmt::Debug,
        T: fmt::Debug,
        E: fmt::Display,
        F: Fn(A) -> Result<T, E>,
    {
        self.log_fallible_named(type_name::<F>(), func)
    }

    pub fn log_fallible_named<A, T, E, F>(
        &self,
        name: &'static str,
        func: F,
    ) -> impl Fn(A) -> Result<T, E>
    where
        A: fmt::Debug,
        T: fmt::Debug,
        E: fmt::Display,
        F: Fn(A) -> Result<T, E>,
    {
        let logger = self.clone();
        move |args: A| {
            let frame = logger.enter(name, &ArgList(&[("args", &args as &dyn fmt::Debug)]));
            let result = func(args);
            frame.finish(Outcome::of_result(&result));
            result
        }
    }
}
