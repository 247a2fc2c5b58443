use crate::constants::*;
use crate::errors::AppError;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Canonical 4-character, lowercase entry identifier (e.g. `1abc`).
///
/// Only obtainable through [`crate::validator`], so every value upholds the identifier rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryId(String);

impl EntryId {
    pub(crate) fn from_canonical(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Mirror shard directory: the 2nd and 3rd characters of the identifier.
    pub fn shard(&self) -> &str {
        &self.0[1..3]
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Supported structure file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Legacy fixed-column PDB text
    Pdb,
    /// mmCIF structured markup
    Cif,
}

impl FileFormat {
    /// Directory of this format relative to the mirror's base directory.
    pub fn mirror_dir(&self) -> &'static str {
        match self {
            Self::Pdb => PDB_MIRROR_DIR,
            Self::Cif => CIF_MIRROR_DIR,
        }
    }

    pub fn remote_prefix(&self) -> &'static str {
        match self {
            Self::Pdb => PDB_REMOTE_PREFIX,
            Self::Cif => CIF_REMOTE_PREFIX,
        }
    }

    /// Remote extension, compression suffix included.
    pub fn remote_extension(&self) -> &'static str {
        match self {
            Self::Pdb => PDB_REMOTE_EXTENSION,
            Self::Cif => CIF_REMOTE_EXTENSION,
        }
    }

    pub fn local_extension(&self) -> &'static str {
        match self {
            Self::Pdb => PDB_LOCAL_EXTENSION,
            Self::Cif => CIF_LOCAL_EXTENSION,
        }
    }
}

impl FromStr for FileFormat {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            PDB_FORMAT => Ok(Self::Pdb),
            CIF_FORMAT => Ok(Self::Cif),
            _ => Err(AppError::UnsupportedFormat(value.to_string())),
        }
    }
}

/// Regional mirror selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Us,
    Eu,
    Jp,
}

impl Region {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Us => US_REGION,
            Self::Eu => EU_REGION,
            Self::Jp => JP_REGION,
        }
    }
}

impl FromStr for Region {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            US_REGION => Ok(Self::Us),
            EU_REGION => Ok(Self::Eu),
            JP_REGION => Ok(Self::Jp),
            _ => Err(AppError::UnknownRegion(value.to_string())),
        }
    }
}

/// One resolved unit of work: where to fetch from and where to write to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrievalTask {
    pub remote_path: String,
    pub local_file: PathBuf,
}

/// Result of a single retrieval within a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemStatus {
    /// Decompressed payload written, with its size in bytes
    Written { bytes: u64 },
    /// Skipped after a transfer, decompression or write error
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemOutcome {
    pub task: RetrievalTask,
    pub status: ItemStatus,
}

/// Per-item outcomes of one batch, in task order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub outcomes: Vec<ItemOutcome>,
}

impl BatchReport {
    pub fn written_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, ItemStatus::Written { .. }))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.written_count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &ItemOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, ItemStatus::Failed { .. }))
    }
}
