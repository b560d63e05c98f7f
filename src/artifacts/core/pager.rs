//! Output sink for `log`
//!
//! Long ledgers go through the minus pager when stdout is a terminal;
//! everything else writes straight to stdout.

use crate::errors::{Result, UgitError};
use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// `std::io::Write` adapter for the minus pager
///
/// minus only accepts text, so invalid UTF-8 is replaced rather than
/// rejected; the ledger is text written by ugit itself.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pager
            .push_str(String::from_utf8_lossy(buf))
            .map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub enum LogOutput {
    Stdout,
    Paged(Pager),
}

impl LogOutput {
    /// Page only when asked to and stdout is an interactive terminal
    pub fn select(use_pager: bool) -> Self {
        if use_pager && io::stdout().is_terminal() {
            LogOutput::Paged(Pager::new())
        } else {
            LogOutput::Stdout
        }
    }

    pub fn is_terminal(&self) -> bool {
        match self {
            LogOutput::Stdout => io::stdout().is_terminal(),
            LogOutput::Paged(_) => true,
        }
    }

    pub fn writer(&self) -> Box<dyn Write> {
        match self {
            LogOutput::Stdout => Box::new(io::stdout()),
            LogOutput::Paged(pager) => Box::new(PagerWriter::new(pager.clone())),
        }
    }

    /// Hand the collected output to the pager, if any
    pub fn finish(self) -> Result<()> {
        match self {
            LogOutput::Stdout => io::stdout()
                .flush()
                .map_err(|e| UgitError::io("failed to flush stdout", e)),
            LogOutput::Paged(pager) => minus::page_all(pager)
                .map_err(|e| UgitError::io("failed to run pager", io::Error::other(e))),
        }
    }
}
