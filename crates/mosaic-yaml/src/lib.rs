#![cfg_attr(test, allow(clippy::unwrap_used))]
//! YAML configuration for Mosaic breakpoint tables.

mod config;
mod error;

pub use config::{from_yaml, load, to_yaml};
pub use error::ConfigError;
