// Mirror endpoints (host:port, base remote directory)
pub const US_MIRROR_ADDRESS: &str = "ftp.wwpdb.org:21";
pub const US_MIRROR_BASE_DIR: &str = "/pub/";
pub const EU_MIRROR_ADDRESS: &str = "ftp.ebi.ac.uk:21";
pub const EU_MIRROR_BASE_DIR: &str = "/pub/databases/rcsb/";
pub const JP_MIRROR_ADDRESS: &str = "ftp.pdbj.org:21";
pub const JP_MIRROR_BASE_DIR: &str = "/pub/";

// Region selector codes
pub const US_REGION: &str = "us";
pub const EU_REGION: &str = "eu";
pub const JP_REGION: &str = "jp";

// Legacy fixed-column PDB format
pub const PDB_FORMAT: &str = "pdb";
pub const PDB_MIRROR_DIR: &str = "pdb/data/structures/divided/pdb/";
pub const PDB_REMOTE_PREFIX: &str = "pdb";
pub const PDB_REMOTE_EXTENSION: &str = ".ent.gz";
pub const PDB_LOCAL_EXTENSION: &str = ".pdb";

// mmCIF format
pub const CIF_FORMAT: &str = "cif";
pub const CIF_MIRROR_DIR: &str = "pdb/data/structures/divided/mmCIF/";
pub const CIF_REMOTE_PREFIX: &str = "";
pub const CIF_REMOTE_EXTENSION: &str = ".cif.gz";
pub const CIF_LOCAL_EXTENSION: &str = ".cif";

// Entry identifiers
pub const ENTRY_ID_LEN: usize = 4;

// Session
pub const CONNECT_TIMEOUT_SECS: u64 = 5;
pub const ANONYMOUS_USER: &str = "anonymous";
pub const ANONYMOUS_PASSWORD: &str = "anonymous";

// Permissions of written entry files (Unix)
pub const OUTPUT_FILE_MODE: u32 = 0o644;

// CLI
pub const MIN_POSITIONAL_IDS: usize = 2;
pub const SINGLE_DASH_LONG_FLAGS: &[&str] = &["format", "region", "config", "output-dir"];
pub const FORMAT_HELP_TEXT: &str = "Format of file {pdb|cif} [default: pdb]";
pub const REGION_HELP_TEXT: &str = "Region of mirror {us|eu|jp} [default: us]";
