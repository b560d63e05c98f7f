use crate::areas::commit_store::CommitStore;
use crate::areas::history::History;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::stage::Stage;
use crate::areas::workspace::Workspace;
use crate::artifacts::commit::clock::Clock;
use crate::artifacts::commit::id_generator::IdentifierGenerator;
use crate::artifacts::core::config::RepositoryConfig;
use crate::errors::{IoContext, Result, UgitError};
use std::cell::{RefCell, RefMut};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Name of the repository marker directory
pub const UGIT_DIR: &str = ".ugit";

/// Handle over one repository
///
/// Owns every on-disk store under `.ugit` plus the collaborators a commit
/// needs (identifier strategy and clock). Commands are methods on this handle
/// (see `commands::porcelain`).
pub struct Repository {
    path: Box<Path>,
    ugit_path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: Arc<Mutex<Index>>,
    stage: Stage,
    commit_store: CommitStore,
    refs: Refs,
    history: History,
    workspace: Workspace,
    id_generator: Box<dyn IdentifierGenerator>,
    clock: Box<dyn Clock>,
}

impl Repository {
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> Result<Self> {
        Self::with_config(path, writer, RepositoryConfig::default())
    }

    pub fn with_config(
        path: &Path,
        writer: Box<dyn std::io::Write>,
        config: RepositoryConfig,
    ) -> Result<Self> {
        let path = path
            .canonicalize()
            .io_context(|| format!("failed to resolve repository path {:?}", path))?;
        let ugit_path = path.join(UGIT_DIR);

        Ok(Repository {
            index: Arc::new(Mutex::new(Index::new(
                ugit_path.join("index").into_boxed_path(),
            ))),
            stage: Stage::new(ugit_path.join("stage").into_boxed_path()),
            commit_store: CommitStore::new(ugit_path.join("commits").into_boxed_path()),
            refs: Refs::new(ugit_path.join("HEAD").into_boxed_path()),
            history: History::new(ugit_path.join("log").into_boxed_path()),
            workspace: Workspace::new(path.clone().into_boxed_path()),
            writer: RefCell::new(writer),
            id_generator: config.id_generator(),
            clock: config.clock(),
            ugit_path: ugit_path.into_boxed_path(),
            path: path.into_boxed_path(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn ugit_path(&self) -> &Path {
        &self.ugit_path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&self) -> Arc<Mutex<Index>> {
        self.index.clone()
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn commit_store(&self) -> &CommitStore {
        &self.commit_store
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn id_generator(&self) -> &dyn IdentifierGenerator {
        self.id_generator.as_ref()
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Fail with `NotInitialized` unless the marker directory exists
    pub fn ensure_initialized(&self) -> Result<()> {
        if self.ugit_path.is_dir() {
            Ok(())
        } else {
            Err(UgitError::NotInitialized(self.ugit_path.to_path_buf()))
        }
    }

    pub(crate) fn write_output(&self, args: std::fmt::Arguments<'_>) -> Result<()> {
        let mut writer = self.writer();
        writer
            .write_fmt(args)
            .and_then(|_| writer.write_all(b"\n"))
            .io_context(|| "failed to write command output")
    }
}
