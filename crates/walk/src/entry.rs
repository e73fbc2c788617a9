use std::path::Path;
use std::time::SystemTime;

use transport::{EntryKind, RawEntry};

/// One remote file or directory, with its full path resolved.
///
/// Produced transiently per listing call; immutable once yielded.
#[derive(Clone, Debug)]
pub struct DirectoryEntry {
    name: String,
    path: String,
    kind: EntryKind,
    size: u64,
    modified: SystemTime,
    permissions: u32,
}

impl DirectoryEntry {
    /// Builds an entry from a raw listing record and the normalized base
    /// path of the directory it was listed in (`base` ends with `/`).
    pub(crate) fn from_raw(base: &str, raw: &RawEntry) -> Self {
        Self {
            name: raw.name().to_owned(),
            path: format!("{base}{}", raw.name()),
            kind: raw.kind(),
            size: raw.size(),
            modified: raw.modified(),
            permissions: raw.permissions(),
        }
    }

    /// Leaf name of the entry.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full remote path (root + name, separator handled once).
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Leaf name with the extension stripped.
    ///
    /// Derived here rather than by the provider. Follows
    /// [`Path::file_stem`] semantics, so a dotfile like `.profile` keeps its
    /// full name.
    #[must_use]
    pub fn base_name(&self) -> &str {
        Path::new(&self.name)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(&self.name)
    }

    /// File or directory.
    #[must_use]
    pub const fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Returns `true` for directory entries.
    #[must_use]
    pub const fn is_directory(&self) -> bool {
        self.kind.is_directory()
    }

    /// Size in bytes as reported by the server.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Modification timestamp as reported by the server.
    #[must_use]
    pub const fn modified(&self) -> SystemTime {
        self.modified
    }

    /// Unix-style permission bits.
    #[must_use]
    pub const fn permissions(&self) -> u32 {
        self.permissions
    }
}
