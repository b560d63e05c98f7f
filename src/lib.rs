//! ugit: a minimal local version-control core
//!
//! Tracks files of a working directory through a staging area into
//! immutable, identifier-named snapshot directories, keeps an append-only
//! history ledger and restores any snapshot on demand.
//!
//! ## Layout
//!
//! ```text
//! .ugit/
//!     HEAD        branch label, then the latest commit id
//!     index       staged paths, one per line
//!     log         history ledger
//!     stage/      staged copies
//!     commits/    one directory per commit
//! ```

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
