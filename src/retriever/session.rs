use crate::constants::{ANONYMOUS_PASSWORD, ANONYMOUS_USER, CONNECT_TIMEOUT_SECS};
use crate::errors::{AppError, AppResult};
use crate::mirrors::MirrorEndpoint;
use std::net::ToSocketAddrs;
use std::time::Duration;
use suppaftp::types::FileType;
use suppaftp::FtpStream;
use tracing::debug;

/// Login credentials for a mirror. Defaults to the anonymous account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            username: ANONYMOUS_USER.to_string(),
            password: ANONYMOUS_PASSWORD.to_string(),
        }
    }
}

/// A live connection to a mirror, reused for every retrieval of a batch.
pub trait MirrorSession {
    fn login(&mut self, credentials: &Credentials) -> AppResult<()>;

    /// Fetches the raw (still compressed) remote file.
    fn retrieve(&mut self, remote_path: &str) -> AppResult<Vec<u8>>;

    /// Ends the session.
    fn quit(self) -> AppResult<()>;
}

/// Opens sessions to mirror endpoints.
pub trait Connector {
    type Session: MirrorSession;

    fn connect(&self, endpoint: &MirrorEndpoint) -> AppResult<Self::Session>;
}

/// FTP transport backed by `suppaftp`'s blocking stream.
#[derive(Debug, Clone)]
pub struct FtpConnector {
    /// Bound on establishing the control connection. Transfers themselves are unbounded.
    pub connect_timeout: Duration,
}

impl Default for FtpConnector {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(CONNECT_TIMEOUT_SECS),
        }
    }
}

impl Connector for FtpConnector {
    type Session = FtpSession;

    fn connect(&self, endpoint: &MirrorEndpoint) -> AppResult<FtpSession> {
        let addrs = endpoint.address.to_socket_addrs().map_err(|e| {
            AppError::ConnectionError(format!("Failed to resolve {}: {e}", endpoint.address))
        })?;

        let mut last_error = None;
        for addr in addrs {
            debug!(address = %addr, "Dialing mirror");
            match FtpStream::connect_timeout(addr, self.connect_timeout) {
                Ok(stream) => return Ok(FtpSession { stream }),
                Err(e) => last_error = Some(e.to_string()),
            }
        }

        Err(AppError::ConnectionError(format!(
            "Failed to connect to {}: {}",
            endpoint.address,
            last_error.unwrap_or_else(|| "no addresses resolved".to_string())
        )))
    }
}

pub struct FtpSession {
    stream: FtpStream,
}

impl MirrorSession for FtpSession {
    fn login(&mut self, credentials: &Credentials) -> AppResult<()> {
        self.stream
            .login(credentials.username.as_str(), credentials.password.as_str())
            .map_err(|e| AppError::AuthenticationError(e.to_string()))?;
        // Payloads are gzip; ASCII mode would mangle them
        self.stream
            .transfer_type(FileType::Binary)
            .map_err(|e| AppError::AuthenticationError(format!("Failed to set binary mode: {e}")))
    }

    fn retrieve(&mut self, remote_path: &str) -> AppResult<Vec<u8>> {
        let buffer = self.stream.retr_as_buffer(remote_path)?;
        Ok(buffer.into_inner())
    }

    fn quit(mut self) -> AppResult<()> {
        self.stream
            .quit()
            .map_err(|e| AppError::DisconnectError(e.to_string()))
    }
}
