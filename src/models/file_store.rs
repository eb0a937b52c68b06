//! 文件实体存储：FileId -> FileRecord，保持插入顺序

use super::file_record::{Entry, FileId, FileRecord};
use crate::kernel::language::LanguageId;
use slotmap::SlotMap;
use std::ops::Index;

/// Slot keys are versioned, so an id is never handed out twice even after
/// its record is removed. `order` carries the iteration order used for
/// listing and for picking a fallback active file.
#[derive(Debug, Clone, Default)]
pub struct FileStore {
    arena: SlotMap<FileId, FileRecord>,
    order: Vec<FileId>,
}

impl FileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_file(
        &mut self,
        name: String,
        language: LanguageId,
        content: String,
        parent: Option<FileId>,
    ) -> FileId {
        self.insert_entry(name, language, parent, Entry::File { content })
    }

    pub fn insert_entry(
        &mut self,
        name: String,
        language: LanguageId,
        parent: Option<FileId>,
        entry: Entry,
    ) -> FileId {
        let id = self
            .arena
            .insert_with_key(|id| FileRecord::new(id, name, language, parent, entry));
        self.order.push(id);

        if let Some(Entry::Folder { children }) =
            parent.and_then(|p| self.arena.get_mut(p)).map(|r| r.entry_mut())
        {
            children.push(id);
        }

        id
    }

    pub fn get(&self, id: FileId) -> Option<&FileRecord> {
        self.arena.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: FileId) -> Option<&mut FileRecord> {
        self.arena.get_mut(id)
    }

    pub fn contains(&self, id: FileId) -> bool {
        self.arena.contains_key(id)
    }

    pub fn remove(&mut self, id: FileId) -> Option<FileRecord> {
        let record = self.arena.remove(id)?;
        self.order.retain(|other| *other != id);

        if let Some(Entry::Folder { children }) = record
            .parent_id()
            .and_then(|p| self.arena.get_mut(p))
            .map(|r| r.entry_mut())
        {
            children.retain(|child| *child != id);
        }

        Some(record)
    }

    pub fn first(&self) -> Option<FileId> {
        self.order.first().copied()
    }

    pub fn ids(&self) -> &[FileId] {
        &self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileRecord> + '_ {
        self.order.iter().filter_map(|id| self.arena.get(*id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Index<FileId> for FileStore {
    type Output = FileRecord;

    fn index(&self, id: FileId) -> &FileRecord {
        &self.arena[id]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/file_store.rs"]
mod tests;
