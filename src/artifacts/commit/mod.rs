//! Commit identity
//!
//! - `commit_id`: the identifier naming a snapshot directory
//! - `id_generator`: pluggable strategies for producing fresh identifiers
//! - `clock`: the time source shared by id generation and the history log

pub mod clock;
pub mod commit_id;
pub mod id_generator;
