//! Maps (identifier, format, mirror) to concrete remote and local names.
//!
//! Resolution is pure: the full task list is built before any connection is opened.

use crate::mirrors::MirrorEndpoint;
use crate::models::{EntryId, FileFormat, RetrievalTask};
use std::path::Path;

/// Joins remote path segments with single `/` separators.
///
/// Leading and trailing slashes of each segment are collapsed and empty segments are dropped.
/// The result is absolute when the first segment is.
fn join_remote(segments: &[&str]) -> String {
    let absolute = segments.first().is_some_and(|s| s.starts_with('/'));
    let joined = segments
        .iter()
        .map(|s| s.trim_matches('/'))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if absolute {
        format!("/{joined}")
    } else {
        joined
    }
}

/// Remote file name, e.g. `pdb1abc.ent.gz` or `4hhb.cif.gz`.
pub fn remote_filename(id: &EntryId, format: FileFormat) -> String {
    format!(
        "{}{}{}",
        format.remote_prefix(),
        id,
        format.remote_extension()
    )
}

/// Full remote path: `<base>/<format dir>/<shard>/<remote filename>`.
pub fn remote_path(id: &EntryId, format: FileFormat, base_dir: &str) -> String {
    join_remote(&[
        base_dir,
        format.mirror_dir(),
        id.shard(),
        &remote_filename(id, format),
    ])
}

/// Local output file name, e.g. `1abc.pdb`.
pub fn local_filename(id: &EntryId, format: FileFormat) -> String {
    format!("{}{}", id, format.local_extension())
}

pub fn resolve_task(
    id: &EntryId,
    format: FileFormat,
    endpoint: &MirrorEndpoint,
    output_dir: &Path,
) -> RetrievalTask {
    RetrievalTask {
        remote_path: remote_path(id, format, endpoint.base_dir),
        local_file: output_dir.join(local_filename(id, format)),
    }
}

/// Resolves one task per identifier, in input order.
pub fn resolve_tasks(
    ids: &[EntryId],
    format: FileFormat,
    endpoint: &MirrorEndpoint,
    output_dir: &Path,
) -> Vec<RetrievalTask> {
    ids.iter()
        .map(|id| resolve_task(id, format, endpoint, output_dir))
        .collect()
}
