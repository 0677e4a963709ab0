//! ## error
//!
//! error types returned by cifs operations

use std::io;

use thiserror::Error;

/// Result alias for cifs operations
pub type CifsResult<T> = Result<T, CifsError>;

/// Error returned by an SMB/CIFS operation.
///
/// libsmbclient reports failures through `errno`; the variants cover the
/// codes the library is known to set, everything else survives as
/// [`CifsError::Unknown`] with the raw value.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CifsError {
    #[error("invalid argument")]
    InvalidArgument,
    #[error("out of memory")]
    OutOfMemory,
    #[error("permission denied")]
    PermissionDenied,
    #[error("no such file or directory")]
    NoSuchFileOrDirectory,
    #[error("not a directory")]
    NotADirectory,
    #[error("is a directory")]
    IsDirectory,
    #[error("operation not permitted")]
    OperationNotPermitted,
    #[error("share does not exist")]
    ShareNotExist,
    #[error("entry already exists")]
    AlreadyExists,
    #[error("directory not empty")]
    DirectoryNotEmpty,
    #[error("connection refused")]
    ConnectionRefused,
    #[error("smb error (errno {0})")]
    Unknown(i32),
}

impl CifsError {
    /// Build the error from the calling thread's last OS error.
    ///
    /// Must be called right after the failing library call, before anything
    /// else can touch `errno`.
    pub fn last_os_error() -> Self {
        Self::from_errno(io::Error::last_os_error().raw_os_error().unwrap_or(0))
    }

    /// Map a raw `errno` value to a `CifsError`
    pub fn from_errno(errno: i32) -> Self {
        match errno {
            libc::EINVAL => Self::InvalidArgument,
            libc::ENOMEM => Self::OutOfMemory,
            libc::EACCES => Self::PermissionDenied,
            libc::ENOENT => Self::NoSuchFileOrDirectory,
            libc::ENOTDIR => Self::NotADirectory,
            libc::EISDIR => Self::IsDirectory,
            libc::EPERM => Self::OperationNotPermitted,
            libc::ENODEV => Self::ShareNotExist,
            libc::EEXIST => Self::AlreadyExists,
            libc::ENOTEMPTY => Self::DirectoryNotEmpty,
            libc::ECONNREFUSED => Self::ConnectionRefused,
            e => Self::Unknown(e),
        }
    }
}

/// Error returned by the local ⇄ server copy operations, keeping local
/// filesystem failures apart from SMB failures.
#[derive(Debug, Error)]
pub enum CopyError {
    #[error("local file not found")]
    LocalFileNotFound,
    #[error("local file error: {0}")]
    LocalFile(#[from] io::Error),
    #[error("smb error: {0}")]
    Cifs(#[from] CifsError),
}
