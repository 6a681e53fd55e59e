//! Depth-aware log adapter.
//!
//! Lets ordinary log calls anywhere in a program pick up the current call
//! depth, so their lines line up with the traced calls around them.

use std::fmt;

use log::Level;

use super::sink::{FacadeSink, LineSink};
use crate::depth;

/// Process-wide adapter writing through the `log` facade.
pub static LOG: LayeredLog = LayeredLog::new(FacadeSink::new());

/// Log adapter that tags every line with the depth active at emission.
#[derive(Debug, Clone)]
pub struct LayeredLog<S = FacadeSink> {
    sink: S,
}

impl<S> LayeredLog<S> {
    pub const fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: LineSink> LayeredLog<S> {
    pub fn log(&self, level: Level, message: fmt::Arguments<'_>) {
        if self.sink.enabled(level) {
            self.sink.emit(level, depth::current(), message);
        }
    }

    pub fn trace(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Trace, message)
    }

    pub fn debug(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Debug, message)
    }

    pub fn info(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Info, message)
    }

    pub fn warn(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Warn, message)
    }

    pub fn error(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Error, message)
    }
}

/// Log a trace message at the current call depth.
#[macro_export]
macro_rules! layered_trace {
    ($($arg:tt)+) => {
        $crate::LOG.log($crate::Level::Trace, format_args!($($arg)+))
    };
}

/// Log a debug message at the current call depth.
#[macro_export]
macro_rules! layered_debug {
    ($($arg:tt)+) => {
        $crate::LOG.log($crate::Level::Debug, format_args!($($arg)+))
    };
}

/// Log an info message at the current call depth.
#[macro_export]
macro_rules! layered_info {
    ($($arg:tt)+) => {
        $crate::LOG.log($crate::Level::Info, format_args!($($arg)+))
    };
}

/// Log a warning at the current call depth.
#[macro_export]
macro_rules! layered_warn {
    ($($arg:tt)+) => {
        $crate::LOG.log($crate::Level::Warn, format_args!($($arg)+))
    };
}

/// Log an error at the current call depth.
#[macro_export]
macro_rules! layered_error {
    ($($arg:tt)+) => {
        $crate::LOG.log($crate::Level::Error, format_args!($($arg)+))
    };
}
