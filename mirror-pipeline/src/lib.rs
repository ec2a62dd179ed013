//! Generation orchestrator.
//!
//! Reads the manifest, groups entries by output file, and runs the
//! locate → segment → transform → sort → emit chain once per group, with all
//! groups processed concurrently. Groups are isolated: a failure inside one
//! is caught at the group boundary and recorded in the run report while its
//! siblings generate normally. Only orchestration-level problems (missing
//! roots, index write failure) abort the run.

mod error;
mod group;
mod report;
mod runner;

pub use error::{Error, GroupError, Result};
pub use group::{TargetGroup, build_groups};
pub use report::{RunReport, TargetFailure, TargetSuccess};
pub use runner::run;
