use crate::areas::repository::Repository;
use crate::errors::{IoContext, Result};
use colored::Colorize;
use std::io::Write;

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    /// One `<id> <message>` line per commit instead of the raw ledger
    pub oneline: bool,
    /// Highlight commit ids
    pub color: bool,
}

impl Repository {
    /// Print the history ledger, oldest commit first
    pub fn log(&self, opts: &LogOptions) -> Result<()> {
        self.ensure_initialized()?;

        if opts.oneline {
            for entry in self.history().entries()? {
                let id = self.paint_commit_id(entry.id().as_ref(), opts.color);
                self.write_output(format_args!("{} {}", id, entry.short_message()))?;
            }
            return Ok(());
        }

        let ledger = self.history().read_raw()?;
        if !opts.color {
            return self.write_raw(&ledger);
        }

        for line in ledger.split_inclusive('\n') {
            match line.strip_prefix("Commit: ") {
                Some(id) => {
                    let painted = self.paint_commit_id(id.trim_end_matches('\n'), true);
                    self.write_output(format_args!("Commit: {}", painted))?;
                }
                None => self.write_raw(line)?,
            }
        }

        Ok(())
    }

    fn paint_commit_id(&self, id: &str, color: bool) -> String {
        if color {
            id.yellow().to_string()
        } else {
            id.to_string()
        }
    }

    fn write_raw(&self, text: &str) -> Result<()> {
        self.writer()
            .write_all(text.as_bytes())
            .io_context(|| "failed to write command output")
    }
}
