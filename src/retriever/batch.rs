use super::session::{Connector, Credentials, MirrorSession};
use crate::constants::OUTPUT_FILE_MODE;
use crate::errors::{AppError, AppResult};
use crate::mirrors::MirrorEndpoint;
use crate::models::{BatchReport, ItemOutcome, ItemStatus, RetrievalTask};
use flate2::read::GzDecoder;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{info, warn};

/// Decompresses a gzip payload fully into memory.
fn decompress(payload: &[u8]) -> AppResult<Vec<u8>> {
    let mut decoder = GzDecoder::new(payload);
    let mut body = Vec::new();
    decoder
        .read_to_end(&mut body)
        .map_err(|e| AppError::DecompressError(e.to_string()))?;
    Ok(body)
}

/// Writes `body` to `file_path`, replacing any existing file.
///
/// The bytes land in a fresh temporary file in the same directory, which is given mode 0644
/// and then persisted over `file_path`. A failure leaves neither a partial output nor the
/// temporary file behind.
fn write_output(file_path: &Path, body: &[u8]) -> AppResult<()> {
    let write_err = |e: std::io::Error| {
        AppError::IoError(format!("Failed to write {}: {e}", file_path.display()))
    };

    let parent = match file_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(parent).map_err(write_err)?;
    tmp.write_all(body).map_err(write_err)?;
    tmp.flush().map_err(write_err)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(OUTPUT_FILE_MODE))
            .map_err(write_err)?;
    }
    tmp.persist(file_path).map_err(|e| write_err(e.error))?;

    Ok(())
}

/// Retrieves, decompresses and writes a single task over an open session.
fn retrieve_one<S: MirrorSession>(session: &mut S, task: &RetrievalTask) -> AppResult<u64> {
    let payload = session.retrieve(&task.remote_path)?;
    let body = decompress(&payload)?;
    write_output(&task.local_file, &body)?;
    Ok(body.len() as u64)
}

/// Runs a batch of retrievals over a single session.
///
/// # Behavior
///
/// - **One session**: the mirror is dialed and logged into once; every task reuses it.
/// - **Sequential**: tasks are processed strictly in order.
/// - **Log and continue**: a failed retrieval, decompression or write is logged and recorded
///   in the report, and the batch moves on to the next task.
/// - **Always quits**: the session is closed after the last task whatever the item outcomes.
///
/// # Errors
///
/// Only session-level failures are returned: `ConnectionError` and `AuthenticationError`
/// before any task is attempted, or `DisconnectError` after all tasks were attempted (files
/// already written stay on disk).
pub fn retrieve_batch<C: Connector>(
    connector: &C,
    endpoint: &MirrorEndpoint,
    credentials: &Credentials,
    tasks: &[RetrievalTask],
) -> AppResult<BatchReport> {
    let mut session = connector.connect(endpoint)?;
    session.login(credentials)?;
    info!(host = endpoint.host(), tasks = tasks.len(), "Connected to mirror");

    let mut report = BatchReport {
        outcomes: Vec::with_capacity(tasks.len()),
    };

    for task in tasks {
        let status = match retrieve_one(&mut session, task) {
            Ok(bytes) => {
                info!(file = %task.local_file.display(), bytes = bytes, "Loaded");
                ItemStatus::Written { bytes }
            }
            Err(e) => {
                warn!(
                    file = %task.local_file.display(),
                    remote_path = task.remote_path.as_str(),
                    error = %e,
                    "Error loading entry"
                );
                ItemStatus::Failed {
                    reason: e.to_string(),
                }
            }
        };
        report.outcomes.push(ItemOutcome {
            task: task.clone(),
            status,
        });
    }

    info!(
        written = report.written_count(),
        failed = report.failed_count(),
        "Batch completed"
    );

    session.quit()?;
    Ok(report)
}
