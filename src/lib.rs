// src/lib.rs
pub mod check;
pub mod config;
pub mod executor;
pub mod report;
pub mod runner;
