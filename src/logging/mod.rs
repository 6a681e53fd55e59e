//! Layered logging: depth markers, sinks, the env_logger formatter and the
//! depth-aware adapter.

pub mod adapter;
pub mod config;
pub mod format;
pub mod markers;
pub mod sink;

pub use adapter::*;
pub use config::*;
pub use format::*;
pub use markers::*;
pub use sink::*;
