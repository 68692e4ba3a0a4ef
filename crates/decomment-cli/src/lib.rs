//! Command-line front end for the decomment scanner.
//!
//! - `args` - clap definition of the command line
//! - `config` - `decomment.json` loading and per-file language resolution
//! - `sources` - glob expansion into an ordered, de-duplicated file list
//! - `driver` - parallel per-file processing and output routing
//! - `reporter` - status and comment listing formatting

pub mod args;
pub mod config;
pub mod driver;
pub mod reporter;
pub mod sources;
pub mod tracing_config;

#[cfg(test)]
#[path = "tests/args_tests.rs"]
mod args_tests;
#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod config_tests;
#[cfg(test)]
#[path = "tests/driver_tests.rs"]
mod driver_tests;
#[cfg(test)]
#[path = "tests/reporter_tests.rs"]
mod reporter_tests;
#[cfg(test)]
#[path = "tests/sources_tests.rs"]
mod sources_tests;
#[cfg(test)]
#[path = "tests/tracing_config_tests.rs"]
mod tracing_config_tests;
