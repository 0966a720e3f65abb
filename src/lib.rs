pub mod advisor;
pub mod aggregate;
pub mod catalog;
pub mod classifier;
pub mod cli;
pub mod commands;
pub mod config;
pub mod discovery;
pub mod error;
pub mod output;
pub mod path_utils;
pub mod scanner;
pub mod scoring;

pub use error::{Result, Vue3ScanError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
