//! A single logged call in flight.

use std::fmt;

use log::Level;

use super::logger::CallLogger;
use super::outcome::Outcome;
use crate::depth::{self, DepthGuard};
use crate::logging::sink::LineSink;

/// Entry has been logged and the depth raised; [`CallFrame::finish`] lowers
/// the depth and logs the exit or the failure.
///
/// A frame dropped without being finished means the call unwound. The depth
/// is still restored and the call is reported as panicked.
#[must_use = "a frame must be finished with the call's outcome"]
pub struct CallFrame<'a, S: LineSink> {
    logger: &'a CallLogger<S>,
    name: &'a str,
    guard: Option<DepthGuard>,
}

impl<'a, S: LineSink> CallFrame<'a, S> {
    pub(crate) fn enter(logger: &'a CallLogger<S>, name: &'a str, args: &dyn fmt::Display) -> Self {
        logger.sink().emit(
            Level::Debug,
            depth::current(),
            format_args!("{}{}({})", logger.style().enter, name, args),
        );

        Self {
            logger,
            name,
            guard: Some(depth::enter()),
        }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    /// Depth inside the call body.
    pub fn depth(&self) -> usize {
        self.guard.as_ref().map_or_else(depth::current, DepthGuard::depth)
    }

    pub fn finish(mut self, outcome: Outcome<'_>) {
        drop(self.guard.take());

        let sink = self.logger.sink();
        let depth = depth::current();
        match outcome {
            Outcome::Returned(value) => sink.emit(
                Level::Debug,
                depth,
                format_args!("{}{} -> {:?}", self.logger.style().exit, self.name, value),
            ),
            Outcome::Failed(err) => sink.emit(
                Level::Error,
                depth,
                format_args!("Error in {}: {}", self.name, err),
            ),
            Outcome::FailedDebug(err) => sink.emit(
                Level::Error,
                depth,
                format_args!("Error in {}: {:?}", self.name, err),
            ),
        }
    }
}

impl<S: LineSink> Drop for CallFrame<'_, S> {
    fn drop(&mut self) {
        if let Some(guard) = self.guard.take() {
            drop(guard);
            self.logger.sink().emit(
                Level::Error,
                depth::current(),
                format_args!("Error in {}: panicked", self.name),
            );
        }
    }
}

impl<S: LineSink> fmt::Debug for CallFrame<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallFrame")
            .field("name", &self.name)
            .field("depth", &self.depth())
            .finish()
    }
}
