//! Display configuration

use serde::{Deserialize, Serialize};

/// Display configuration
///
/// Independent toggles that map one to one onto fmt layer options.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show timestamps
    pub time: bool,
    /// Show source location (`file:line`)
    pub source: bool,
    /// Show target module
    pub target: bool,
    /// Show thread IDs
    pub thread_ids: bool,
    /// Show thread names
    pub thread_names: bool,
    /// Use ANSI colors
    pub colors: bool,
    /// Show span list in JSON
    pub span_list: bool,
    /// Flatten JSON events
    pub flatten: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            time: true,
            source: cfg!(debug_assertions),
            target: true,
            thread_ids: false,
            thread_names: false,
            colors: std::io::IsTerminal::is_terminal(&std::io::stderr()),
            span_list: true,
            flatten: true,
        }
    }
}

impl DisplayConfig {
    pub(super) fn apply_env(&mut self, lookup: &impl Fn(&str) -> Option<String>) {
        if let Some(v) = lookup("CADENCE_LOG_TIME") {
            self.time = flag(&v);
        }
        if let Some(v) = lookup("CADENCE_LOG_SOURCE") {
            self.source = flag(&v);
        }
        if let Some(v) = lookup("CADENCE_LOG_COLORS") {
            self.colors = flag(&v);
        }
    }
}

/// Anything but "0" or "false" turns a toggle on
fn flag(value: &str) -> bool {
    value != "0" && !value.eq_ignore_ascii_case("false")
}
