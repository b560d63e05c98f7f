//! Porcelain commands
//!
//! ## Commands
//!
//! - `init`: create the `.ugit` layout
//! - `add`: copy one file into the staging area and list it in the index
//! - `commit`: snapshot every indexed file into a new commit directory
//! - `log`: print the history ledger
//! - `checkout`: copy a commit's files back into the working directory
//!
//! None of the multi-step commands roll back on failure; the state each
//! one leaves behind is documented on the command.

pub mod add;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod log;
