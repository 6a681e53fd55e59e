//! Layered text formatter for the env_logger backend.
//!
//! Lines are written as `<markers><message>`. Records that carry no depth
//! (logged by code that does not go through a layered sink) are printed
//! without markers. Timestamp and level prefixes are opt-in.

use std::io::{self, Write};

use chrono::Local;
use env_logger::{Builder, Env, Target};
use log::Record;

use super::config::{LoggerConfig, Stream};
use super::markers::Layers;
use super::sink::record_depth;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Rendering switches for [`write_record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub layer_glyph: char,
    pub show_level: bool,
    pub show_timestamp: bool,
}

impl From<&LoggerConfig> for FormatOptions {
    fn from(config: &LoggerConfig) -> Self {
        Self {
            layer_glyph: config.markers.layer,
            show_level: config.show_level,
            show_timestamp: config.show_timestamp,
        }
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self::from(&LoggerConfig::default())
    }
}

/// Write a single record as one line.
pub fn write_record<W: Write + ?Sized>(
    out: &mut W,
    record: &Record<'_>,
    options: &FormatOptions,
) -> io::Result<()> {
    if options.show_timestamp {
        write!(out, "{} ", Local::now().format(TIMESTAMP_FORMAT))?;
    }
    if options.show_level {
        write!(out, "{:<5} ", record.level())?;
    }
    if let Some(depth) = record_depth(record) {
        write!(
            out,
            "{}",
            Layers {
                glyph: options.layer_glyph,
                depth,
            }
        )?;
    }
    writeln!(out, "{}", record.args())
}

/// env_logger builder wired with the layered formatter.
///
/// `RUST_LOG` takes precedence over the configured filter.
pub fn builder(config: &LoggerConfig) -> Builder {
    let options = FormatOptions::from(config);

    let mut builder = Builder::from_env(Env::default().default_filter_or(config.filter.as_str()));
    builder
        .format(move |buf, record| write_record(buf, record, &options))
        .target(match config.stream {
            Stream::Stderr => Target::Stderr,
            Stream::Stdout => Target::Stdout,
        });
    builder
}

#[cfg(test)]
mod tests {
    use log::Level;

    use super::*;
    use crate::logging::sink::DEPTH_KEY;

    fn render(record: &Record<'_>, options: &FormatOptions) -> String {
        let mut out = Vec::new();
        write_record(&mut out, record, options).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_markers_prefix_message() {
        let kvs: &[(&str, usize)] = &[(DEPTH_KEY, 2)];
        let line = render(
            &Record::builder()
                .level(Level::Debug)
                .args(format_args!("⎡app::load(path=\"a\")"))
                .key_values(&kvs)
                .build(),
            &FormatOptions::default(),
        );

        assert_eq!(line, "⎢⎢⎡app::load(path=\"a\")\n");
    }

    #[test]
    fn test_record_without_depth_is_unchanged() {
        let line = render(
            &Record::builder().args(format_args!("plain")).build(),
            &FormatOptions::default(),
        );
        assert_eq!(line, "plain\n");
    }

    #[test]
    fn test_zero_depth_has_no_markers() {
        let kvs: &[(&str, usize)] = &[(DEPTH_KEY, 0)];
        let line = render(
            &Record::builder()
                .args(format_args!("top"))
                .key_values(&kvs)
                .build(),
            &FormatOptions::default(),
        );
        assert_eq!(line, "top\n");
    }

    #[test]
    fn test_level_prefix() {
        let options = FormatOptions {
            layer_glyph: '|',
            show_level: true,
            show_timestamp: false,
        };
        let kvs: &[(&str, usize)] = &[(DEPTH_KEY, 1)];
        let line = render(
            &Record::builder()
                .level(Level::Error)
                .args(format_args!("Error in app::load: missing"))
                .key_values(&kvs)
                .build(),
            &options,
        );
        assert_eq!(line, "ERROR |Error in app::load: missing\n");
    }

    #[test]
    fn test_timestamp_prefix() {
        let options = FormatOptions {
            show_timestamp: true,
            ..FormatOptions::default()
        };
        let line = render(&Record::builder().args(format_args!("x")).build(), &options);

        // 2026-01-29T00:00:00.000 x
        let (stamp, rest) = line.split_once(' ').unwrap();
        assert_eq!(stamp.len(), 23);
        assert_eq!(rest, "x\n");
    }
}
