//! Logger configuration.

use serde::{Deserialize, Serialize};

use super::markers::MarkerStyle;
use crate::error::{LayerlogError, Result};

/// Default filter when `RUST_LOG` is unset: every call is traced.
pub const DEFAULT_FILTER: &str = "debug";

/// Output stream for the env_logger backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stream {
    #[default]
    Stderr,
    Stdout,
}

/// Configuration applied by [`crate::try_init`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// env_logger filter directives, used when `RUST_LOG` is not set.
    pub filter: String,
    pub markers: MarkerStyle,
    pub show_level: bool,
    pub show_timestamp: bool,
    pub stream: Stream,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            markers: MarkerStyle::default(),
            show_level: false,
            show_timestamp: false,
            stream: Stream::default(),
        }
    }
}

impl LoggerConfig {
    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let MarkerStyle { layer, enter, exit } = self.markers;
        for glyph in [layer, enter, exit] {
            if glyph.is_control() {
                return Err(LayerlogError::InvalidGlyph(glyph));
            }
        }
        Ok(())
    }
}
