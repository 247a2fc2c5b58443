//! Batch retrieval over a single mirror session.
//!
//! The main entry point is [`retrieve_batch`]. The transport sits behind the [`Connector`] and
//! [`MirrorSession`] traits, with [`FtpConnector`] as the production implementation.

mod batch;
mod session;

// Re-export public API
pub use batch::retrieve_batch;
pub use session::{Connector, Credentials, FtpConnector, FtpSession, MirrorSession};
