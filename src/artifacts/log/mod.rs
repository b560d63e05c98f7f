//! History log records
//!
//! - `log_entry`: one ledger block per commit, plus the parser that reads
//!   the ledger back into entries

pub mod log_entry;
