use filters::MaskSet;
use session::Session;
use tracing::debug;
use transport::RawEntry;

use crate::entry::DirectoryEntry;
use crate::error::ListingError;

/// Lazy depth-first iterator over remote directory entries.
///
/// Obtained from [`ListBuilder::list`](crate::ListBuilder::list). Each
/// directory is listed with a single transport call, issued only when the
/// consumer advances into it. After an error the iterator is fused.
pub struct Listing<'a> {
    session: &'a mut Session,
    masks: MaskSet,
    recursive: bool,
    files_only: bool,
    directories_only: bool,
    stack: Vec<Frame>,
    finished: bool,
}

/// One level of the traversal.
///
/// Directories start out `Pending` and are replaced by an `Active` frame
/// when the walker first needs their contents; that is what keeps the
/// sequence lazy.
enum Frame {
    Pending(String),
    Active {
        base: String,
        entries: std::vec::IntoIter<RawEntry>,
    },
}

enum Step {
    Done,
    Pop,
    List(String),
    Entry(String, RawEntry),
}

impl<'a> Listing<'a> {
    pub(crate) fn new(
        session: &'a mut Session,
        path: String,
        masks: MaskSet,
        recursive: bool,
        files_only: bool,
        directories_only: bool,
    ) -> Self {
        Self {
            session,
            masks,
            recursive,
            files_only,
            directories_only,
            stack: vec![Frame::Pending(path)],
            finished: false,
        }
    }

    fn should_yield(&self, raw: &RawEntry) -> bool {
        // Recursive listings hide dot-directories entirely; non-recursive
        // listings surface them (they just cannot be descended into).
        if self.recursive && raw.kind().is_directory() && raw.name().starts_with('.') {
            return false;
        }
        if !self.masks.allows(raw.name()) {
            return false;
        }
        // Exactly one kind flag set drops the other kind; both or neither
        // yields all kinds.
        match (self.files_only, self.directories_only) {
            (true, false) => raw.kind().is_file(),
            (false, true) => raw.kind().is_directory(),
            _ => true,
        }
    }

    fn should_descend(&self, raw: &RawEntry) -> bool {
        self.recursive && raw.kind().is_directory() && !raw.name().starts_with('.')
    }

    fn activate(&mut self, path: String) -> Result<(), ListingError> {
        let base = normalize_base(&path);
        debug!(path = %base, "listing remote directory");
        let transport = self
            .session
            .transport_mut()
            .map_err(|_| ListingError::not_open())?;
        let entries = transport
            .list_directory(&base)
            .map_err(|source| ListingError::listing(base.clone(), source))?;
        if let Some(frame) = self.stack.last_mut() {
            *frame = Frame::Active {
                base,
                entries: entries.into_iter(),
            };
        }
        Ok(())
    }
}

impl Iterator for Listing<'_> {
    type Item = Result<DirectoryEntry, ListingError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.finished {
                return None;
            }
            let step = match self.stack.last_mut() {
                None => Step::Done,
                Some(Frame::Pending(path)) => Step::List(path.clone()),
                Some(Frame::Active { base, entries }) => match entries.next() {
                    None => Step::Pop,
                    Some(raw) => Step::Entry(base.clone(), raw),
                },
            };
            match step {
                Step::Done => {
                    self.finished = true;
                    return None;
                }
                Step::Pop => {
                    self.stack.pop();
                }
                Step::List(path) => {
                    if let Err(error) = self.activate(path) {
                        self.finished = true;
                        return Some(Err(error));
                    }
                }
                Step::Entry(base, raw) => {
                    if matches!(raw.name(), "." | "..") {
                        continue;
                    }
                    let entry = DirectoryEntry::from_raw(&base, &raw);
                    if self.should_descend(&raw) {
                        self.stack.push(Frame::Pending(entry.path().to_owned()));
                    }
                    if self.should_yield(&raw) {
                        return Some(Ok(entry));
                    }
                }
            }
        }
    }
}

/// Normalizes a directory path to end with exactly one `/` so child paths
/// are unambiguous.
fn normalize_base(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_owned()
    } else {
        format!("{trimmed}/")
    }
}

#[cfg(test)]
mod normalize_tests {
    use super::normalize_base;

    #[test]
    fn base_always_ends_with_one_separator() {
        assert_eq!(normalize_base("/data"), "/data/");
        assert_eq!(normalize_base("/data/"), "/data/");
        assert_eq!(normalize_base("/data//"), "/data/");
        assert_eq!(normalize_base("/"), "/");
        assert_eq!(normalize_base(""), "/");
    }
}
