//! Call depth tracking.
//!
//! Depth is the number of logged calls currently active on the calling
//! thread. It is only ever changed through [`DepthGuard`], so every increment
//! is paired with a restore along the same call path.

pub mod counter;

pub use counter::*;
