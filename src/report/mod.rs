// src/report/mod.rs
mod builder;

pub use builder::{build, Report, ReportEntry, ReportStatus};
