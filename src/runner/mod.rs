// src/runner/mod.rs
mod run;

pub use run::run;
