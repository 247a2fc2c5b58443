//! Common test utilities for integration tests

use fetchpdb::errors::{AppError, AppResult};
use fetchpdb::mirrors::MirrorEndpoint;
use fetchpdb::retriever::{Connector, Credentials, MirrorSession};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;
use std::rc::Rc;

/// Gzip-compresses `data` the way the mirrors serve entries
#[allow(dead_code)]
pub fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// In-memory mirror recording every session call
#[derive(Default)]
#[allow(dead_code)]
pub struct FakeMirror {
    pub files: HashMap<String, Vec<u8>>,
    pub fail_connect: bool,
    pub fail_login: bool,
    pub fail_quit: bool,
    pub calls: Rc<RefCell<Vec<String>>>,
}

#[allow(dead_code)]
impl FakeMirror {
    pub fn with_file(mut self, remote_path: &str, payload: Vec<u8>) -> Self {
        self.files.insert(remote_path.to_string(), payload);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

pub struct FakeSession {
    files: HashMap<String, Vec<u8>>,
    fail_login: bool,
    fail_quit: bool,
    calls: Rc<RefCell<Vec<String>>>,
}

impl Connector for FakeMirror {
    type Session = FakeSession;

    fn connect(&self, endpoint: &MirrorEndpoint) -> AppResult<FakeSession> {
        self.calls
            .borrow_mut()
            .push(format!("connect {}", endpoint.address));
        if self.fail_connect {
            return Err(AppError::ConnectionError("i/o timeout".to_string()));
        }
        Ok(FakeSession {
            files: self.files.clone(),
            fail_login: self.fail_login,
            fail_quit: self.fail_quit,
            calls: Rc::clone(&self.calls),
        })
    }
}

impl MirrorSession for FakeSession {
    fn login(&mut self, credentials: &Credentials) -> AppResult<()> {
        self.calls
            .borrow_mut()
            .push(format!("login {}", credentials.username));
        if self.fail_login {
            return Err(AppError::AuthenticationError("530 Login incorrect".to_string()));
        }
        Ok(())
    }

    fn retrieve(&mut self, remote_path: &str) -> AppResult<Vec<u8>> {
        self.calls.borrow_mut().push(format!("retr {remote_path}"));
        self.files.get(remote_path).cloned().ok_or_else(|| {
            AppError::TransferError(format!("550 {remote_path}: No such file or directory"))
        })
    }

    fn quit(self) -> AppResult<()> {
        self.calls.borrow_mut().push("quit".to_string());
        if self.fail_quit {
            return Err(AppError::DisconnectError("connection reset".to_string()));
        }
        Ok(())
    }
}

/// Sample fixed-column entry body
#[allow(dead_code)]
pub const SAMPLE_PDB: &str = "HEADER    OXYGEN TRANSPORT                        07-MAR-84   4HHB\nEND\n";

/// Sample mmCIF entry body
#[allow(dead_code)]
pub const SAMPLE_CIF: &str = "data_4HHB\n_entry.id 4HHB\n";

#[allow(dead_code)]
pub const US_PDB_1ABC: &str = "/pub/pdb/data/structures/divided/pdb/ab/pdb1abc.ent.gz";
#[allow(dead_code)]
pub const US_PDB_2DEF: &str = "/pub/pdb/data/structures/divided/pdb/de/pdb2def.ent.gz";
#[allow(dead_code)]
pub const US_PDB_3GHI: &str = "/pub/pdb/data/structures/divided/pdb/gh/pdb3ghi.ent.gz";
