use crate::constants::*;
use crate::models::Region;

/// A regional mirror: control connection address and base remote directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MirrorEndpoint {
    /// `host:port` of the FTP control connection
    pub address: &'static str,
    /// Absolute directory under which the archive tree lives
    pub base_dir: &'static str,
}

const US_MIRROR: MirrorEndpoint = MirrorEndpoint {
    address: US_MIRROR_ADDRESS,
    base_dir: US_MIRROR_BASE_DIR,
};

const EU_MIRROR: MirrorEndpoint = MirrorEndpoint {
    address: EU_MIRROR_ADDRESS,
    base_dir: EU_MIRROR_BASE_DIR,
};

const JP_MIRROR: MirrorEndpoint = MirrorEndpoint {
    address: JP_MIRROR_ADDRESS,
    base_dir: JP_MIRROR_BASE_DIR,
};

impl Region {
    /// Returns the mirror serving this region.
    pub fn endpoint(&self) -> MirrorEndpoint {
        match self {
            Self::Us => US_MIRROR,
            Self::Eu => EU_MIRROR,
            Self::Jp => JP_MIRROR,
        }
    }
}

impl MirrorEndpoint {
    /// Host part of [`Self::address`], used for logging.
    pub fn host(&self) -> &str {
        self.address
            .rsplit_once(':')
            .map_or(self.address, |(host, _)| host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_maps_each_region() {
        assert_eq!(Region::Us.endpoint().address, "ftp.wwpdb.org:21");
        assert_eq!(Region::Us.endpoint().base_dir, "/pub/");
        assert_eq!(Region::Eu.endpoint().address, "ftp.ebi.ac.uk:21");
        assert_eq!(Region::Eu.endpoint().base_dir, "/pub/databases/rcsb/");
        assert_eq!(Region::Jp.endpoint().address, "ftp.pdbj.org:21");
        assert_eq!(Region::Jp.endpoint().base_dir, "/pub/");
    }

    #[test]
    fn all_mirrors_use_control_port() {
        for region in [Region::Us, Region::Eu, Region::Jp] {
            assert!(region.endpoint().address.ends_with(":21"));
        }
    }

    #[test]
    fn host_strips_port() {
        assert_eq!(Region::Eu.endpoint().host(), "ftp.ebi.ac.uk");
    }
}
