//! Data models and configuration.

pub mod case;
pub mod config;
