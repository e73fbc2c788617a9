use std::fs;
use std::path::{Path, PathBuf};

use filters::MaskSet;
use session::Session;
use tracing::{debug, warn};
use transport::{DataMode, Direction};

use crate::{TransferAction, TransferError, TransferGate, TransferOutcome, TransferRequest};

/// Executes a download request, returning one outcome per file attempted.
///
/// The destination is resolved to an absolute local path first; an existing
/// directory becomes a container and files land inside it. Include/exclude
/// masks are applied to the literal leaf of the remote source string before
/// the provider expands anything (see the crate docs for why). The gate is
/// offered the whole action once; a veto skips it entirely with no outcome.
///
/// # Errors
///
/// [`TransferError::SessionNotOpen`] on a closed session,
/// [`TransferError::InvalidLocalPath`] when the destination is unusable, and
/// [`TransferError::Transport`] when the provider cannot run the batch at
/// all. Per-file failures are reported in the outcomes, not here.
pub fn download(
    session: &mut Session,
    request: &TransferRequest,
    gate: &dyn TransferGate,
) -> Result<Vec<TransferOutcome>, TransferError> {
    let masks = request.masks()?;
    let destination = resolve_local_destination(request.destination())?;
    let container = destination.is_dir();

    // Deliberate pre-expansion filtering: only the literal source leaf is
    // tested, never the files a wildcard ends up selecting.
    let leaf = remote_leaf(request.source());
    if !masks.allows(leaf) {
        debug!(source = request.source(), "source filtered out before expansion");
        return Ok(Vec::new());
    }

    let action = TransferAction::new(
        Direction::Download,
        request.source(),
        destination.display().to_string(),
    );
    if !gate.confirm(&action) {
        debug!(source = request.source(), "download vetoed");
        return Ok(Vec::new());
    }

    debug!(
        source = request.source(),
        destination = %destination.display(),
        "dispatching batch download"
    );
    let transport = session
        .transport_mut()
        .map_err(|_| TransferError::SessionNotOpen)?;
    let result = transport.get_files(
        request.source(),
        &destination,
        request.removes_source(),
        DataMode::Binary,
    )?;

    let outcomes = result
        .into_attempts()
        .into_iter()
        .map(|attempt| {
            let resolved = if container {
                destination.join(attempt.name()).display().to_string()
            } else {
                destination.display().to_string()
            };
            if let Some(detail) = attempt.error() {
                warn!(file = attempt.name(), detail, "download failed for file");
            }
            TransferOutcome::new(
                attempt.name().to_owned(),
                resolved,
                attempt.error().map(str::to_owned),
            )
        })
        .collect();
    Ok(outcomes)
}

/// Executes an upload request, returning one outcome per file attempted.
///
/// The local source is expanded first: a literal file, a directory
/// (immediate regular files within, in name order), or a wildcard leaf
/// matched against its parent directory. Include/exclude masks are then
/// applied to each resolved file, post-expansion. A destination ending in
/// `/` is a container: each file's leaf name is appended to form its remote
/// path. The gate is offered one action per resolved file.
///
/// # Errors
///
/// Same taxonomy as [`download`]; [`TransferError::InvalidLocalPath`] here
/// means the source did not resolve to addressable local files.
pub fn upload(
    session: &mut Session,
    request: &TransferRequest,
    gate: &dyn TransferGate,
) -> Result<Vec<TransferOutcome>, TransferError> {
    let masks = request.masks()?;
    let files = expand_local_source(request.source())?;

    let mut outcomes = Vec::new();
    let transport = session
        .transport_mut()
        .map_err(|_| TransferError::SessionNotOpen)?;

    for file in files {
        let Some(name) = file.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        // Post-expansion filtering: each resolved file is tested.
        if !masks.allows(name) {
            continue;
        }
        let remote_destination = if request.destination().ends_with('/') {
            format!("{}{name}", request.destination())
        } else {
            request.destination().to_owned()
        };
        let action = TransferAction::new(
            Direction::Upload,
            file.display().to_string(),
            remote_destination.clone(),
        );
        if !gate.confirm(&action) {
            debug!(file = %file.display(), "upload vetoed");
            continue;
        }

        debug!(file = %file.display(), destination = %remote_destination, "dispatching upload");
        let result = transport.put_files(
            &file,
            &remote_destination,
            request.removes_source(),
            DataMode::Binary,
        )?;
        for attempt in result.into_attempts() {
            if let Some(detail) = attempt.error() {
                warn!(file = attempt.name(), detail, "upload failed for file");
            }
            outcomes.push(TransferOutcome::new(
                attempt.name().to_owned(),
                remote_destination.clone(),
                attempt.error().map(str::to_owned),
            ));
        }
    }
    Ok(outcomes)
}

/// Resolves a local destination to an absolute path.
fn resolve_local_destination(raw: &str) -> Result<PathBuf, TransferError> {
    if raw.trim().is_empty() {
        return Err(TransferError::InvalidLocalPath {
            path: raw.to_owned(),
            detail: "destination is empty".into(),
        });
    }
    std::path::absolute(Path::new(raw)).map_err(|error| TransferError::InvalidLocalPath {
        path: raw.to_owned(),
        detail: error.to_string(),
    })
}

/// Expands a local upload source into concrete files.
fn expand_local_source(raw: &str) -> Result<Vec<PathBuf>, TransferError> {
    let path = Path::new(raw);
    let leaf = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();

    if leaf.contains(['*', '?', '[']) {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mask = MaskSet::new([leaf], Vec::<&str>::new())?;
        let mut matched = regular_files_in(parent, raw)?;
        matched.retain(|file| {
            file.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| mask.allows(name))
        });
        return Ok(matched);
    }

    let metadata = fs::metadata(path).map_err(|error| TransferError::InvalidLocalPath {
        path: raw.to_owned(),
        detail: error.to_string(),
    })?;
    if metadata.is_file() {
        Ok(vec![path.to_path_buf()])
    } else if metadata.is_dir() {
        regular_files_in(path, raw)
    } else {
        Err(TransferError::InvalidLocalPath {
            path: raw.to_owned(),
            detail: "not a regular file or directory".into(),
        })
    }
}

/// Immediate regular files of `dir`, sorted by name for stable batches.
fn regular_files_in(dir: &Path, raw: &str) -> Result<Vec<PathBuf>, TransferError> {
    let entries = fs::read_dir(dir).map_err(|error| TransferError::InvalidLocalPath {
        path: raw.to_owned(),
        detail: error.to_string(),
    })?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|error| TransferError::InvalidLocalPath {
            path: raw.to_owned(),
            detail: error.to_string(),
        })?;
        let file_type = entry.file_type().map_err(|error| TransferError::InvalidLocalPath {
            path: raw.to_owned(),
            detail: error.to_string(),
        })?;
        if file_type.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

/// Leaf component of a remote path.
fn remote_leaf(source: &str) -> &str {
    source
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(source)
}
