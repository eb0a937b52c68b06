//! 数据模型层

pub mod file_record;
pub mod file_store;

pub use file_record::{copy_name, Entry, EntryKind, FileId, FileRecord, COPY_MARKER};
pub use file_store::FileStore;
