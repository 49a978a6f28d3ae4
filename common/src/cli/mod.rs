//! Command line helpers
pub mod log;

/// Per-command defaults, evaluated before logging is set up.
pub trait CommandDefaults {
    /// Whether the command shows a progress bar, unless overridden on the command line.
    fn progress(&self) -> bool {
        true
    }
}
