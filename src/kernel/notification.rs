use crate::models::FileId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Saved,
    AutoSaved,
    Created,
    Deleted,
    Duplicated,
    Renamed,
    RunStarted,
}

/// A transient toast for the presentation layer. Nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub file: Option<FileId>,
    pub title: &'static str,
    pub description: String,
}

impl Notification {
    fn new(
        kind: NotificationKind,
        file: Option<FileId>,
        title: &'static str,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            file,
            title,
            description: description.into(),
        }
    }

    pub fn saved(file: FileId) -> Self {
        Self::new(
            NotificationKind::Saved,
            Some(file),
            "File Saved",
            "Your changes have been saved successfully.",
        )
    }

    pub fn auto_saved(file: FileId) -> Self {
        Self::new(
            NotificationKind::AutoSaved,
            Some(file),
            "Auto-saved",
            "Your changes have been saved automatically.",
        )
    }

    pub fn created(file: FileId, name: &str) -> Self {
        Self::new(
            NotificationKind::Created,
            Some(file),
            "New File Created",
            format!("Created {name}"),
        )
    }

    pub fn deleted(file: FileId) -> Self {
        Self::new(
            NotificationKind::Deleted,
            Some(file),
            "File Deleted",
            "File has been removed from your workspace.",
        )
    }

    pub fn duplicated(file: FileId, name: &str) -> Self {
        Self::new(
            NotificationKind::Duplicated,
            Some(file),
            "File Duplicated",
            format!("Created copy: {name}"),
        )
    }

    pub fn renamed(file: FileId, name: &str) -> Self {
        Self::new(
            NotificationKind::Renamed,
            Some(file),
            "File Renamed",
            format!("File renamed to {name}"),
        )
    }

    pub fn run_started(file: FileId) -> Self {
        Self::new(
            NotificationKind::RunStarted,
            Some(file),
            "Running Code",
            "Executing your code...",
        )
    }
}
