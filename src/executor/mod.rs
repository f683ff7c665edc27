// src/executor/mod.rs
mod execute;

pub use execute::execute;
