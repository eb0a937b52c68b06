//! Workspace controller: the file store plus the active-file pointer.
//!
//! Every mutation is applied and announced to observers before the call
//! returns. The active pointer either is unset or names a live record.

use crate::kernel::language::LanguageId;
use crate::models::{copy_name, Entry, FileId, FileRecord, FileStore};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceError {
    NotFound(FileId),
    NotAFile(FileId),
}

impl fmt::Display for WorkspaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkspaceError::NotFound(id) => write!(f, "file not found: {id:?}"),
            WorkspaceError::NotAFile(id) => write!(f, "not a file: {id:?}"),
        }
    }
}

impl std::error::Error for WorkspaceError {}

pub type Result<T> = std::result::Result<T, WorkspaceError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceEvent {
    Created { id: FileId },
    Duplicated { source: FileId, id: FileId },
    Deleted { id: FileId },
    ContentChanged { id: FileId },
    Renamed { id: FileId, name: String },
    ActiveChanged {
        previous: Option<FileId>,
        current: Option<FileId>,
    },
}

type Observer = Box<dyn FnMut(&WorkspaceEvent)>;

#[derive(Default)]
pub struct WorkspaceController {
    files: FileStore,
    active: Option<FileId>,
    observers: Vec<Observer>,
}

impl fmt::Debug for WorkspaceController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkspaceController")
            .field("files", &self.files)
            .field("active", &self.active)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl WorkspaceController {
    pub fn new() -> Self {
        Self::default()
    }

    /// One sample file per language; the first one is active.
    pub fn with_samples() -> Self {
        let mut files = FileStore::new();
        for language in LanguageId::ALL {
            let (name, content) = language.sample();
            files.insert_file(name.to_string(), language, content.to_string(), None);
        }
        let active = files.first();
        Self {
            files,
            active,
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&WorkspaceEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn files(&self) -> impl Iterator<Item = &FileRecord> + '_ {
        self.files.iter()
    }

    pub fn ids(&self) -> &[FileId] {
        self.files.ids()
    }

    pub fn get(&self, id: FileId) -> Option<&FileRecord> {
        self.files.get(id)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn active_id(&self) -> Option<FileId> {
        self.active
    }

    pub fn active(&self) -> Option<&FileRecord> {
        self.active.and_then(|id| self.files.get(id))
    }

    /// Name collisions are allowed; identity is the id.
    pub fn create_file(&mut self, name: impl Into<String>, language: LanguageId) -> FileRecord {
        let name = name.into();
        let id = self.files.insert_file(
            name,
            language,
            language.default_template().to_string(),
            None,
        );
        tracing::debug!(?id, %language, "file created");

        self.emit(WorkspaceEvent::Created { id });
        self.set_active(Some(id));
        self.record(id)
    }

    pub fn create_from_template(&mut self, language: LanguageId) -> FileRecord {
        self.create_file(language.untitled_name(), language)
    }

    /// The copy is left inactive; callers decide whether to switch to it.
    pub fn duplicate_file(&mut self, source: FileId) -> Result<FileRecord> {
        let src = self.files.get(source).ok_or(WorkspaceError::NotFound(source))?;
        let content = src
            .content()
            .ok_or(WorkspaceError::NotAFile(source))?
            .to_string();
        let name = copy_name(src.name());
        let language = src.language();
        let parent = src.parent_id();

        let id = self.files.insert_file(name, language, content, parent);
        tracing::debug!(?source, ?id, "file duplicated");

        self.emit(WorkspaceEvent::Duplicated { source, id });
        Ok(self.record(id))
    }

    pub fn delete_file(&mut self, id: FileId) -> Result<FileRecord> {
        let removed = self.files.remove(id).ok_or(WorkspaceError::NotFound(id))?;

        let previous = self.active;
        if previous == Some(id) {
            self.active = self.files.first();
        }
        tracing::debug!(?id, active = ?self.active, "file deleted");

        self.emit(WorkspaceEvent::Deleted { id });
        if previous != self.active {
            self.emit(WorkspaceEvent::ActiveChanged {
                previous,
                current: self.active,
            });
        }
        Ok(removed)
    }

    /// Returns whether the stored content actually changed.
    pub fn update_content(&mut self, id: FileId, content: impl Into<String>) -> Result<bool> {
        let record = self.files.get_mut(id).ok_or(WorkspaceError::NotFound(id))?;
        let Entry::File { content: current } = record.entry_mut() else {
            return Err(WorkspaceError::NotAFile(id));
        };

        let content = content.into();
        if *current == content {
            return Ok(false);
        }
        *current = content;

        self.emit(WorkspaceEvent::ContentChanged { id });
        Ok(true)
    }

    pub fn rename_file(&mut self, id: FileId, name: impl Into<String>) -> Result<()> {
        let record = self.files.get_mut(id).ok_or(WorkspaceError::NotFound(id))?;
        let name = name.into();
        if record.name() == name {
            return Ok(());
        }
        record.set_name(name.clone());

        self.emit(WorkspaceEvent::Renamed { id, name });
        Ok(())
    }

    pub fn select_file(&mut self, id: FileId) -> Result<()> {
        if !self.files.contains(id) {
            return Err(WorkspaceError::NotFound(id));
        }
        self.set_active(Some(id));
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn insert_folder(&mut self, name: &str) -> FileId {
        self.files.insert_entry(
            name.to_string(),
            LanguageId::Python,
            None,
            Entry::Folder {
                children: Vec::new(),
            },
        )
    }

    fn set_active(&mut self, current: Option<FileId>) {
        let previous = self.active;
        if previous == current {
            return;
        }
        self.active = current;
        self.emit(WorkspaceEvent::ActiveChanged { previous, current });
    }

    fn record(&self, id: FileId) -> FileRecord {
        self.files[id].clone()
    }

    fn emit(&mut self, event: WorkspaceEvent) {
        for observer in &mut self.observers {
            observer(&event);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/workspace.rs"]
mod tests;
