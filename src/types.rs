//! ## types
//!
//! directory entry and listing types

use url::Url;

/// Kind of an entry yielded by a directory listing.
///
/// Discriminants match the `SMBC_*` type constants of libsmbclient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum SmbDirentType {
    Workgroup = 1,
    Server = 2,
    FileShare = 3,
    PrinterShare = 4,
    CommsShare = 5,
    IpcShare = 6,
    Dir = 7,
    File = 8,
    Link = 9,
}

impl SmbDirentType {
    /// Map a raw `smbc_type` value; unknown values yield `None`
    pub fn from_raw(value: u32) -> Option<Self> {
        match value {
            1 => Some(Self::Workgroup),
            2 => Some(Self::Server),
            3 => Some(Self::FileShare),
            4 => Some(Self::PrinterShare),
            5 => Some(Self::CommsShare),
            6 => Some(Self::IpcShare),
            7 => Some(Self::Dir),
            8 => Some(Self::File),
            9 => Some(Self::Link),
            _ => None,
        }
    }
}

/// Raw directory entry as reported by the underlying library
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmbDirent {
    name: String,
    type_: Option<SmbDirentType>,
}

impl SmbDirent {
    pub fn new(type_: Option<SmbDirentType>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_,
        }
    }

    /// Entry name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entry kind; `None` if the library reported a value this crate doesn't know
    pub fn get_type(&self) -> Option<SmbDirentType> {
        self.type_
    }

    pub(crate) fn into_name(self) -> String {
        self.name
    }
}

/// Entry of a share or directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// Absolute smb url of the entry; directories carry a trailing slash.
    /// Names that are not url-safe appear percent-encoded here.
    pub url: Url,
    /// Entry name as reported by the server
    pub name: String,
    /// Whether the entry is a directory
    pub is_directory: bool,
}

/// Which entry kinds a listing should keep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    File,
    Directory,
    FileOrDirectory,
}

impl TargetKind {
    pub(crate) fn keeps_files(&self) -> bool {
        matches!(self, Self::File | Self::FileOrDirectory)
    }

    pub(crate) fn keeps_directories(&self) -> bool {
        matches!(self, Self::Directory | Self::FileOrDirectory)
    }
}

#[cfg(test)]
mod test {

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn should_map_raw_dirent_types() {
        assert_eq!(SmbDirentType::from_raw(2), Some(SmbDirentType::Server));
        assert_eq!(SmbDirentType::from_raw(7), Some(SmbDirentType::Dir));
        assert_eq!(SmbDirentType::from_raw(8), Some(SmbDirentType::File));
        assert_eq!(SmbDirentType::from_raw(0), None);
        assert_eq!(SmbDirentType::from_raw(10), None);
    }

    #[test]
    fn should_tell_target_kind_filters() {
        assert!(TargetKind::File.keeps_files());
        assert!(!TargetKind::File.keeps_directories());
        assert!(TargetKind::Directory.keeps_directories());
        assert!(!TargetKind::Directory.keeps_files());
        assert!(TargetKind::FileOrDirectory.keeps_files());
        assert!(TargetKind::FileOrDirectory.keeps_directories());
    }
}
