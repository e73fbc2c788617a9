#![deny(unsafe_code)]

//! Scripted in-memory transport for exercising the ferry core without a
//! network. Tests describe a remote directory tree plus any failures to
//! inject, open a session through [`ScriptedConnector`], and afterwards
//! inspect the calls the core actually made.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, SystemTime};

use transport::{
    BatchResult, Connector, DataMode, Direction, EntryKind, FileAttempt, ProgressEvent,
    ProgressObserver, RawEntry, Transport, TransportError,
};

/// Builds a [`RawEntry`] for a regular file with fixed metadata.
#[must_use]
pub fn file_entry(name: &str, size: u64) -> RawEntry {
    RawEntry::new(name, EntryKind::File, size, fixed_mtime(), 0o644)
}

/// Builds a [`RawEntry`] for a directory.
#[must_use]
pub fn dir_entry(name: &str) -> RawEntry {
    RawEntry::new(name, EntryKind::Directory, 0, fixed_mtime(), 0o755)
}

fn fixed_mtime() -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000)
}

/// One call the scripted transport received, in order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RecordedCall {
    /// `list_directory(path)`.
    List(String),
    /// `get_files(source, destination, remove_source)`.
    Get(String, String, bool),
    /// `put_files(source, destination, remove_source)`.
    Put(String, String, bool),
    /// `disconnect()`.
    Disconnect,
}

#[derive(Default)]
struct Script {
    listings: HashMap<String, Vec<RawEntry>>,
    listing_failures: HashMap<String, String>,
    get_results: HashMap<String, Vec<FileAttempt>>,
    put_results: HashMap<String, Vec<FileAttempt>>,
    calls: Vec<RecordedCall>,
    observer: Option<Arc<dyn ProgressObserver>>,
    emit_progress: bool,
}

type SharedScript = Arc<Mutex<Script>>;

fn lock(script: &SharedScript) -> std::sync::MutexGuard<'_, Script> {
    script.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Connector that hands out transports backed by a scripted remote tree.
///
/// Cloning the connector shares the script and the call log, so a test can
/// keep a handle for assertions after the session has consumed the transport.
#[derive(Clone, Default)]
pub struct ScriptedConnector {
    script: SharedScript,
    connect_failure: Option<String>,
}

impl ScriptedConnector {
    /// A connector with an empty remote tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the listing returned for the directory at `path`.
    ///
    /// Paths are matched after trailing-slash normalization, so `/data` and
    /// `/data/` describe the same directory.
    #[must_use]
    pub fn with_dir(self, path: &str, entries: Vec<RawEntry>) -> Self {
        lock(&self.script)
            .listings
            .insert(normalize(path), entries);
        self
    }

    /// Makes listing the directory at `path` fail with `detail`.
    #[must_use]
    pub fn with_listing_failure(self, path: &str, detail: &str) -> Self {
        lock(&self.script)
            .listing_failures
            .insert(normalize(path), detail.into());
        self
    }

    /// Scripts the per-file attempts reported for a `get_files` call whose
    /// source is `source`.
    #[must_use]
    pub fn with_get_result(self, source: &str, attempts: Vec<FileAttempt>) -> Self {
        lock(&self.script)
            .get_results
            .insert(source.into(), attempts);
        self
    }

    /// Scripts the per-file attempts reported for a `put_files` call whose
    /// local source ends with `leaf`.
    #[must_use]
    pub fn with_put_result(self, leaf: &str, attempts: Vec<FileAttempt>) -> Self {
        lock(&self.script).put_results.insert(leaf.into(), attempts);
        self
    }

    /// Makes `connect` itself fail with `detail`.
    #[must_use]
    pub fn with_connect_failure(self, detail: &str) -> Self {
        Self {
            script: self.script,
            connect_failure: Some(detail.into()),
        }
    }

    /// Emits one synthetic progress event per successful file attempt.
    #[must_use]
    pub fn with_progress_events(self) -> Self {
        lock(&self.script).emit_progress = true;
        self
    }

    /// Every call received so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<RecordedCall> {
        lock(&self.script).calls.clone()
    }

    /// Listing calls received so far, in order.
    #[must_use]
    pub fn listed_paths(&self) -> Vec<String> {
        lock(&self.script)
            .calls
            .iter()
            .filter_map(|call| match call {
                RecordedCall::List(path) => Some(path.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Connector for ScriptedConnector {
    fn connect(
        &self,
        params: &transport::ConnectParams,
        observer: Arc<dyn ProgressObserver>,
    ) -> Result<Box<dyn Transport>, TransportError> {
        if let Some(detail) = &self.connect_failure {
            return Err(TransportError::Connect {
                host: params.host().to_owned(),
                port: params.port(),
                detail: detail.clone(),
            });
        }
        lock(&self.script).observer = Some(observer);
        Ok(Box::new(ScriptedTransport {
            script: Arc::clone(&self.script),
        }))
    }
}

/// Transport half of [`ScriptedConnector`].
pub struct ScriptedTransport {
    script: SharedScript,
}

impl Transport for ScriptedTransport {
    fn list_directory(&mut self, path: &str) -> Result<Vec<RawEntry>, TransportError> {
        let mut script = lock(&self.script);
        let normalized = normalize(path);
        script.calls.push(RecordedCall::List(normalized.clone()));
        if let Some(detail) = script.listing_failures.get(&normalized) {
            return Err(TransportError::Listing {
                path: normalized,
                detail: detail.clone(),
            });
        }
        script
            .listings
            .get(&normalized)
            .cloned()
            .ok_or(TransportError::Listing {
                path: normalized,
                detail: "no such directory".into(),
            })
    }

    fn get_files(
        &mut self,
        remote_source: &str,
        local_destination: &Path,
        remove_source: bool,
        _mode: DataMode,
    ) -> Result<BatchResult, TransportError> {
        let mut script = lock(&self.script);
        script.calls.push(RecordedCall::Get(
            remote_source.to_owned(),
            local_destination.display().to_string(),
            remove_source,
        ));
        let attempts = script.get_results.get(remote_source).cloned();
        let attempts = attempts.unwrap_or_else(|| vec![FileAttempt::succeeded(leaf(remote_source))]);
        emit(&script, &attempts, Direction::Download);
        Ok(BatchResult::new(attempts))
    }

    fn put_files(
        &mut self,
        local_source: &Path,
        remote_destination: &str,
        remove_source: bool,
        _mode: DataMode,
    ) -> Result<BatchResult, TransportError> {
        let mut script = lock(&self.script);
        let source = local_source.display().to_string();
        script.calls.push(RecordedCall::Put(
            source.clone(),
            remote_destination.to_owned(),
            remove_source,
        ));
        let source_leaf = leaf(&source).to_owned();
        let attempts = script.put_results.get(&source_leaf).cloned();
        let attempts = attempts.unwrap_or_else(|| vec![FileAttempt::succeeded(source_leaf)]);
        emit(&script, &attempts, Direction::Upload);
        Ok(BatchResult::new(attempts))
    }

    fn disconnect(&mut self) -> Result<(), TransportError> {
        lock(&self.script).calls.push(RecordedCall::Disconnect);
        Ok(())
    }
}

fn emit(script: &Script, attempts: &[FileAttempt], direction: Direction) {
    if !script.emit_progress {
        return;
    }
    if let Some(observer) = &script.observer {
        for attempt in attempts.iter().filter(|attempt| attempt.is_success()) {
            observer.on_progress(&ProgressEvent::new(attempt.name(), direction, 0, None));
        }
    }
}

fn normalize(path: &str) -> String {
    if path == "/" {
        return path.to_owned();
    }
    path.trim_end_matches('/').to_owned()
}

fn leaf(path: &str) -> &str {
    path.trim_end_matches(['/', '\\'])
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(path)
}

/// Observer that records every event it sees.
#[derive(Clone, Default)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<(String, Direction)>>>,
}

impl RecordingObserver {
    /// A fresh recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// File names and directions observed so far.
    #[must_use]
    pub fn seen(&self) -> Vec<(String, Direction)> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ProgressObserver for RecordingObserver {
    fn on_progress(&self, event: &ProgressEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((event.file_name().to_owned(), event.direction()));
    }
}
