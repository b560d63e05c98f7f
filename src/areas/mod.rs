//! Repository state on disk
//!
//! - `file_store`: file system primitives the other areas are built from
//! - `workspace`: the working directory being tracked
//! - `index`: ordered list of staged paths
//! - `stage`: verbatim copies of staged files
//! - `commit_store`: one immutable directory per commit
//! - `refs`: the HEAD pointer
//! - `history`: the append-only commit ledger
//! - `repository`: the handle owning all of the above

pub mod commit_store;
pub mod file_store;
pub mod history;
pub mod index;
pub mod refs;
pub mod repository;
pub mod stage;
pub mod workspace;
