//! Scheduler configuration.

use serde::{Deserialize, Serialize};

/// Configuration for notice scheduling.
/// Keep this minimal; expand as needed without breaking API.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Exit-transition grace window in milliseconds: the time a notice
    /// spends in `Dismissing` before it is removed from the live set.
    pub exit_grace_ms: f64,

    /// Initial capacity hint for the live set and event buffers.
    pub capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exit_grace_ms: 250.0,
            capacity: 16,
        }
    }
}
