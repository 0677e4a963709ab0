//! ## context
//!
//! abstraction over the smb client context

use crate::error::CifsResult;
use crate::types::SmbDirent;

// -- native backend

#[cfg(feature = "smbclient")]
pub(crate) mod ffi;
#[cfg(feature = "smbclient")]
pub mod native;

/// Operations a concrete SMB client context provides.
///
/// libsmbclient exposes its operations as per-context function pointers
/// rather than fixed symbols, so that client implementations stay
/// pluggable; this trait is the Rust-side seam for that function table.
/// [`NativeContext`](crate::NativeContext) implements it over the system
/// library, tests implement it over canned data.
pub trait SmbContext {
    /// Guard for a scoped allocation frame of the library allocator.
    /// The frame is released when the guard is dropped.
    type Frame;

    /// Push a new scoped allocation frame.
    fn stack_frame(&self) -> Self::Frame;

    /// Invoke the context's purge handler, dropping every cached server
    /// connection.
    ///
    /// This is the raw table entry: it performs no allocation-frame
    /// bookkeeping. Use [`purge_cached_servers`](crate::purge_cached_servers)
    /// instead, which runs the handler inside the frame the library expects.
    fn purge_cached(&self);

    /// List the raw entries of the directory at `uri`
    fn read_dir(&self, uri: &str) -> CifsResult<Vec<SmbDirent>>;

    /// Read the whole file at `uri`
    fn read_file(&self, uri: &str) -> CifsResult<Vec<u8>>;

    /// Write `data` to the file at `uri`, creating it if missing.
    ///
    /// With `overwrite` an existing file is truncated; without it, writing
    /// over an existing file fails with
    /// [`AlreadyExists`](crate::CifsError::AlreadyExists).
    /// Returns the number of bytes written.
    fn write_file(&self, uri: &str, data: &[u8], overwrite: bool) -> CifsResult<usize>;
}
