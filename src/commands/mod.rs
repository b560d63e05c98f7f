//! Command implementations
//!
//! Every user-facing operation lives in `porcelain` as an `impl Repository`
//! block, one file per command.

pub mod porcelain;
