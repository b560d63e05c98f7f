//! Core utilities and shared types
//!
//! - `config`: environment driven repository configuration
//! - `pager`: `std::io::Write` adapter over the minus pager

pub mod config;
pub mod pager;
