//! fetchpdb library
//!
//! This crate provides the core functionality for the `fetchpdb` binary: batch retrieval of
//! protein structure entries from the wwPDB FTP mirrors.
//!
//! ## Overview
//!
//! - [`validator`] - Normalizes raw tokens into canonical entry identifiers
//! - [`mirrors`] - Static registry of regional mirrors
//! - [`resolver`] - Computes remote paths and local file names
//! - [`retriever`] - Downloads, decompresses and writes a batch over one FTP session
//! - [`fetch`] - Wires validation, resolution and retrieval together
//! - [`cli`] - Command-line interface
//! - [`config`] - TOML configuration
//! - [`models`] - Entry, format, region and report types
//! - [`errors`] - Error types used throughout the application
//!
//! ## Example Usage
//!
//! ```no_run
//! use fetchpdb::fetch::fetch_entries;
//! use fetchpdb::models::{FileFormat, Region};
//! use fetchpdb::retriever::{Credentials, FtpConnector};
//! use std::path::Path;
//!
//! # fn example() -> fetchpdb::errors::AppResult<()> {
//! let report = fetch_entries(
//!     &FtpConnector::default(),
//!     &Region::Eu.endpoint(),
//!     &Credentials::default(),
//!     &["1abc", "4hhb"],
//!     FileFormat::Cif,
//!     Path::new("."),
//! )?;
//! println!("{} written, {} failed", report.written_count(), report.failed_count());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod fetch;
pub mod mirrors;
pub mod models;
pub mod resolver;
pub mod retriever;
pub mod validator;
