// src/check/mod.rs
mod descriptor;
mod outcome;

pub use descriptor::{Check, CheckDescriptor, DEFAULT_TIMEOUT};
pub use outcome::{CheckOutput, Classification, Outcome, NO_RESPONSE};
