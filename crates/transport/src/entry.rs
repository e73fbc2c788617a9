use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// Kind of a remote directory entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum EntryKind {
    /// Regular file.
    File,
    /// Directory.
    Directory,
}

impl EntryKind {
    /// Returns `true` for [`EntryKind::Directory`].
    #[must_use]
    pub const fn is_directory(self) -> bool {
        matches!(self, Self::Directory)
    }

    /// Returns `true` for [`EntryKind::File`].
    #[must_use]
    pub const fn is_file(self) -> bool {
        matches!(self, Self::File)
    }
}

/// One entry of a remote listing, exactly as the provider reported it.
///
/// Raw entries carry only server-supplied attributes. Derived values such as
/// the full path or the base name without extension are computed by the
/// walker, not here.
#[derive(Clone, Debug)]
pub struct RawEntry {
    name: String,
    kind: EntryKind,
    size: u64,
    modified: SystemTime,
    permissions: u32,
}

impl RawEntry {
    /// Creates an entry from server-reported attributes.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        kind: EntryKind,
        size: u64,
        modified: SystemTime,
        permissions: u32,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            size,
            modified,
            permissions,
        }
    }

    /// Leaf name of the entry.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// File or directory.
    #[must_use]
    pub const fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Size in bytes. Servers commonly report `0` for directories.
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
