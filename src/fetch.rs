use crate::errors::AppResult;
use crate::mirrors::MirrorEndpoint;
use crate::models::{BatchReport, FileFormat};
use crate::resolver::resolve_tasks;
use crate::retriever::{retrieve_batch, Connector, Credentials};
use crate::validator::validate_ids;
use std::path::Path;
use tracing::debug;

/// Validates raw identifiers, resolves them against `endpoint`, and downloads the batch.
///
/// # Returns
///
/// Returns the batch report, even when every item failed. Per-item failures are only
/// logged and recorded in the report.
///
/// # Errors
///
/// - `InvalidIdentifier` for the first malformed token, before any network activity
/// - session-level errors from [`retrieve_batch`] (connect, login, quit)
pub fn fetch_entries<C: Connector, S: AsRef<str>>(
    connector: &C,
    endpoint: &MirrorEndpoint,
    credentials: &Credentials,
    raw_ids: &[S],
    format: FileFormat,
    output_dir: &Path,
) -> AppResult<BatchReport> {
    let ids = validate_ids(raw_ids)?;
    let tasks = resolve_tasks(&ids, format, endpoint, output_dir);
    debug!(tasks = tasks.len(), format = ?format, "Resolved retrieval tasks");

    retrieve_batch(connector, endpoint, credentials, &tasks)
}
