//! Measuring the time of operations

use std::time::{Duration, SystemTime};

/// Logs the time passed between creation and drop.
pub struct MeasureTime {
    operation: &'static str,
    start: SystemTime,
}

impl MeasureTime {
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            start: SystemTime::now(),
        }
    }
}

impl Default for MeasureTime {
    fn default() -> Self {
        Self::new("Processing")
    }
}

impl Drop for MeasureTime {
    fn drop(&mut self) {
        match self.start.elapsed() {
            Ok(duration) => {
                // whole seconds are enough for a batch run
                let duration = Duration::from_secs(duration.as_secs());
                log::info!(
                    "{} took {}",
                    self.operation,
                    humantime::format_duration(duration)
                )
            }
            Err(err) => log::warn!("Unable to measure time of '{}': {err}", self.operation),
        }
    }
}
