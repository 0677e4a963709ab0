#![crate_name = "cifs_wrapper"]
#![crate_type = "lib"]

//! # cifs-wrapper
//!
//! cifs-wrapper is a thin, safe wrapper around [libsmbclient](https://www.samba.org/samba/docs/current/man-html/libsmbclient.7.html),
//! exposing host discovery, share browsing and whole-file transfer over SMB/CIFS.
//!
//! ## Get started
//!
//! Add **cifs-wrapper** to your project dependencies; the `smbclient` feature
//! links the native backend against the system libsmbclient and talloc:
//!
//! ```toml
//! cifs-wrapper = { version = "^0.1", features = ["smbclient"] }
//! ```
//!
//! these features are supported:
//!
//! - `smbclient`: enable the native libsmbclient backend. Without it, only the
//!   [`SmbContext`] abstraction and the client generic over it are available.
//! - `no-log`: disable logging. By default, this library will log via the `log` crate.
//!
//! ## Usage
//!
//! ```rust,no_run
//! # #[cfg(feature = "smbclient")]
//! # fn main() -> anyhow::Result<()> {
//! use cifs_wrapper::{CifsClient, SmbAuth, TargetKind};
//! use url::Url;
//!
//! let client = CifsClient::try_new(
//!     SmbAuth::default()
//!         .workgroup("WORKGROUP")
//!         .username("test")
//!         .password("test"),
//! )?;
//!
//! // browse the local network for smb servers
//! for host in client.hosts()? {
//!     println!("{host}");
//! }
//!
//! // list a share
//! let share = Url::parse("smb://localhost/temp/")?;
//! for entry in client.list(&share, TargetKind::FileOrDirectory)? {
//!     println!("{}", entry.name);
//! }
//!
//! // drop cached server connections before reconnecting with other credentials
//! client.purge_cached_servers();
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "smbclient"))]
//! # fn main() {}
//! ```

// -- crates
#[macro_use]
extern crate log;

mod auth;
mod cache;
mod client;
mod context;
mod error;
mod types;

pub use auth::SmbAuth;
pub use cache::purge_cached_servers;
pub use client::CifsClient;
#[cfg(feature = "smbclient")]
pub use context::native::{NativeContext, TallocFrame};
pub use context::SmbContext;
pub use error::{CifsError, CifsResult, CopyError};
pub use types::{FileInfo, SmbDirent, SmbDirentType, TargetKind};

// -- utils
pub(crate) mod utils;
pub use utils::url::split_credentials;
// -- mock
#[cfg(test)]
pub(crate) mod mock;
