//! 文件记录数据模型

use crate::kernel::language::LanguageId;
use slotmap::new_key_type;
use std::time::SystemTime;

new_key_type! { pub struct FileId; }

/// Inserted before the last extension segment when a file is duplicated.
pub const COPY_MARKER: &str = "_copy";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Folder,
}

/// Payload of a record. Folders exist in the model but no workspace
/// operation creates them yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    File { content: String },
    Folder { children: Vec<FileId> },
}

#[derive(Debug, Clone)]
pub struct FileRecord {
    id: FileId,
    name: String,
    language: LanguageId,
    created_at: SystemTime,
    parent_id: Option<FileId>,
    entry: Entry,
}

impl FileRecord {
    pub(crate) fn new(
        id: FileId,
        name: String,
        language: LanguageId,
        parent_id: Option<FileId>,
        entry: Entry,
    ) -> Self {
        Self {
            id,
            name,
            language,
            created_at: SystemTime::now(),
            parent_id,
            entry,
        }
    }

    pub fn id(&self) -> FileId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn language(&self) -> LanguageId {
        self.language
    }

    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }

    pub fn parent_id(&self) -> Option<FileId> {
        self.parent_id
    }

    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    pub fn kind(&self) -> EntryKind {
        match self.entry {
            Entry::File { .. } => EntryKind::File,
            Entry::Folder { .. } => EntryKind::Folder,
        }
    }

    /// `None` for folders.
    pub fn content(&self) -> Option<&str> {
        match &self.entry {
            Entry::File { content } => Some(content),
            Entry::Folder { .. } => None,
        }
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn entry_mut(&mut self) -> &mut Entry {
        &mut self.entry
    }
}

/// `main.py` -> `main_copy.py`, `archive.tar.gz` -> `archive.tar_copy.gz`.
///
/// Names without an extension (including dot-files such as `.env`) get the
/// marker appended at the end.
pub fn copy_name(name: &str) -> String {
    match name.rfind('.') {
        Some(dot) if dot > 0 => {
            let (stem, ext) = name.split_at(dot);
            format!("{stem}{COPY_MARKER}{ext}")
        }
        _ => format!("{name}{COPY_MARKER}"),
    }
}
