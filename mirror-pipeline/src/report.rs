//! Run report data structures.

use std::time::Duration;

/// Per-target outcomes of one orchestrator invocation.
#[derive(Debug, Default)]
pub struct RunReport {
    pub successes: Vec<TargetSuccess>,
    pub failures: Vec<TargetFailure>,
    /// Non-fatal observations, e.g. duplicate same-named declarations where
    /// the first match silently won.
    pub warnings: Vec<String>,
    pub elapsed: Duration,
}

impl RunReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A group that generated its output file.
#[derive(Debug)]
pub struct TargetSuccess {
    pub target_file: String,
    /// Emitted declaration names, in emission order.
    pub declarations: Vec<String>,
}

/// A group that failed; its output file was not written.
#[derive(Debug)]
pub struct TargetFailure {
    pub target_file: String,
    pub message: String,
}
