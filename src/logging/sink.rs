//! Output sinks for depth-tagged log lines.
//!
//! A sink receives each line together with the depth captured at emission
//! time. [`FacadeSink`] hands lines to the `log` facade (where the layered
//! formatter draws the markers), [`MemorySink`] keeps them for inspection.

use std::fmt;
use std::sync::Arc;

use log::kv::Key;
use log::{Level, Metadata, Record};
use parking_lot::Mutex;

use super::markers::draw_layers;

/// Key under which the call depth travels on a `log::Record`.
pub const DEPTH_KEY: &str = "layers";

/// Target used by [`FacadeSink`] unless configured otherwise.
pub const DEFAULT_TARGET: &str = "layerlog";

/// Destination for depth-tagged lines.
pub trait LineSink {
    /// Whether lines at `level` would be written at all.
    fn enabled(&self, level: Level) -> bool {
        let _ = level;
        true
    }

    fn emit(&self, level: Level, depth: usize, message: fmt::Arguments<'_>);
}

impl<S: LineSink + ?Sized> LineSink for &S {
    fn enabled(&self, level: Level) -> bool {
        (**self).enabled(level)
    }

    fn emit(&self, level: Level, depth: usize, message: fmt::Arguments<'_>) {
        (**self).emit(level, depth, message)
    }
}

impl<S: LineSink + ?Sized> LineSink for Arc<S> {
    fn enabled(&self, level: Level) -> bool {
        (**self).enabled(level)
    }

    fn emit(&self, level: Level, depth: usize, message: fmt::Arguments<'_>) {
        (**self).emit(level, depth, message)
    }
}

/// Forwards lines to whatever logger is installed behind the `log` facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacadeSink {
    target: &'static str,
}

impl FacadeSink {
    pub const fn new() -> Self {
        Self {
            target: DEFAULT_TARGET,
        }
    }

    pub const fn with_target(target: &'static str) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &'static str {
        self.target
    }
}

impl Default for FacadeSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSink for FacadeSink {
    fn enabled(&self, level: Level) -> bool {
        level <= log::max_level()
            && log::logger().enabled(
                &Metadata::builder()
                    .level(level)
                    .target(self.target)
                    .build(),
            )
    }

    fn emit(&self, level: Level, depth: usize, message: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }

        let kvs: &[(&str, usize)] = &[(DEPTH_KEY, depth)];
        log::logger().log(
            &Record::builder()
                .level(level)
                .target(self.target)
                .args(message)
                .key_values(&kvs)
                .build(),
        );
    }
}

/// Depth attached to a record by a layered sink, if any.
pub fn record_depth(record: &Record<'_>) -> Option<usize> {
    record
        .key_values()
        .get(Key::from(DEPTH_KEY))
        .and_then(|value| value.to_u64())
        .and_then(|depth| usize::try_from(depth).ok())
}

/// A line kept by [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedLine {
    pub level: Level,
    pub depth: usize,
    pub message: String,
}

impl CapturedLine {
    /// The line as the layered formatter would print it.
    pub fn render(&self, glyph: char) -> String {
        format!("{}{}", draw_layers(self.depth, glyph), self.message)
    }
}

/// In-memory sink. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<CapturedLine>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<CapturedLine> {
        self.lines.lock().clone()
    }

    /// Drain every captured line.
    pub fn take(&self) -> Vec<CapturedLine> {
        std::mem::take(&mut *self.lines.lock())
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn rendered(&self, glyph: char) -> Vec<String> {
        self.lines
            .lock()
            .iter()
            .map(|line| line.render(glyph))
            .collect()
    }
}

impl LineSink for MemorySink {
    fn emit(&self, level: Level, depth: usize, message: fmt::Arguments<'_>) {
        self.lines.lock().push(CapturedLine {
            level,
            depth,
            message: message.to_string(),
        });
    }
}
