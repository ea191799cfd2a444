//! Library side of the `skugen` binary: logging setup and configuration.

pub mod config;
pub mod logging;
