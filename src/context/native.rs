//! ## native
//!
//! client context backed by the system libsmbclient

use std::ffi::{CStr, CString};

use libc::{c_char, c_int, c_void};

use super::ffi;
use crate::auth::SmbAuth;
use crate::cache::purge_cached_servers;
use crate::context::SmbContext;
use crate::error::{CifsError, CifsResult};
use crate::types::{SmbDirent, SmbDirentType};

/// Location string talloc reports in leak traces
const TALLOC_LOCATION: &[u8] = b"cifs_wrapper::context::native\0";

/// Read buffer used when draining a remote file
const READ_BUFFER_SIZE: usize = 1024 * 1024;

/// Scoped talloc allocation frame.
///
/// Pushed on the calling thread's talloc stack; released when the guard
/// is dropped, freeing everything the library allocated underneath it.
#[derive(Debug)]
pub struct TallocFrame {
    frame: *mut c_void,
}

impl TallocFrame {
    fn push() -> Self {
        Self {
            frame: unsafe { ffi::_talloc_stackframe(TALLOC_LOCATION.as_ptr() as *const c_char) },
        }
    }
}

impl Drop for TallocFrame {
    fn drop(&mut self) {
        unsafe {
            ffi::_talloc_free(self.frame, TALLOC_LOCATION.as_ptr() as *const c_char);
        }
    }
}

/// SMB client context backed by libsmbclient.
///
/// Owns the underlying `SMBCCTX` together with the credentials the
/// library's auth callback reads. Dropping the context purges its cached
/// server connections and frees the library context.
///
/// Holds a raw library handle, so it is neither `Send` nor `Sync`; keep
/// it on the thread that created it.
pub struct NativeContext {
    ctx: *mut ffi::SMBCCTX,
}

impl NativeContext {
    /// Allocate and initialize a context authenticating with `auth`
    pub fn try_new(auth: SmbAuth) -> CifsResult<Self> {
        unsafe {
            let ctx = ffi::smbc_new_context();
            if ctx.is_null() {
                return Err(CifsError::last_os_error());
            }
            ffi::smbc_setFunctionAuthDataWithContext(ctx, auth_callback);
            // the credentials travel to the callback through the context
            // user data; ownership moves to the context until drop
            let auth = Box::into_raw(Box::new(auth));
            ffi::smbc_setOptionUserData(ctx, auth as *mut c_void);
            if ffi::smbc_init_context(ctx).is_null() {
                let err = CifsError::last_os_error();
                error!("failed to initialize smb context: {}", err);
                ffi::smbc_free_context(ctx, 1);
                drop(Box::from_raw(auth));
                return Err(err);
            }
            debug!("smb context initialized");
            Ok(Self { ctx })
        }
    }
}

impl SmbContext for NativeContext {
    type Frame = TallocFrame;

    fn stack_frame(&self) -> TallocFrame {
        TallocFrame::push()
    }

    fn purge_cached(&self) {
        trace!("purging cached server connections");
        unsafe {
            ffi::smbc_getFunctionPurgeCachedServers(self.ctx)(self.ctx);
        }
    }

    fn read_dir(&self, uri: &str) -> CifsResult<Vec<SmbDirent>> {
        let c_uri = to_cstring(uri)?;
        trace!("reading directory {}", uri);
        unsafe {
            let dir = ffi::smbc_getFunctionOpendir(self.ctx)(self.ctx, c_uri.as_ptr());
            if dir.is_null() {
                let err = CifsError::last_os_error();
                error!("could not open directory {}: {}", uri, err);
                return Err(err);
            }
            let dir = DirGuard {
                ctx: self.ctx,
                dir,
            };
            let readdir = ffi::smbc_getFunctionReaddir(self.ctx);
            let mut entries = Vec::new();
            loop {
                let dirent = readdir(self.ctx, dir.dir);
                if dirent.is_null() {
                    break;
                }
                let name = CStr::from_ptr((*dirent).name.as_ptr())
                    .to_string_lossy()
                    .into_owned();
                entries.push(SmbDirent::new(
                    SmbDirentType::from_raw((*dirent).smbc_type),
                    name,
                ));
            }
            debug!("found {} entries at {}", entries.len(), uri);
            Ok(entries)
        }
    }

    fn read_file(&self, uri: &str) -> CifsResult<Vec<u8>> {
        let c_uri = to_cstring(uri)?;
        trace!("opening file {} for read", uri);
        unsafe {
            let file =
                ffi::smbc_getFunctionOpen(self.ctx)(self.ctx, c_uri.as_ptr(), libc::O_RDONLY, 0);
            if file.is_null() {
                let err = CifsError::last_os_error();
                error!("could not open file {}: {}", uri, err);
                return Err(err);
            }
            let file = FileGuard {
                ctx: self.ctx,
                file,
            };
            let read = ffi::smbc_getFunctionRead(self.ctx);
            let mut data = Vec::new();
            let mut buffer = vec![0u8; READ_BUFFER_SIZE];
            loop {
                let n = read(
                    self.ctx,
                    file.file,
                    buffer.as_mut_ptr() as *mut c_void,
                    buffer.len(),
                );
                if n == 0 {
                    break;
                } else if n < 0 {
                    return Err(CifsError::last_os_error());
                }
                data.extend_from_slice(&buffer[..n as usize]);
            }
            debug!("read {} bytes from {}", data.len(), uri);
            Ok(data)
        }
    }

    fn write_file(&self, uri: &str, data: &[u8], overwrite: bool) -> CifsResult<usize> {
        let c_uri = to_cstring(uri)?;
        let mut flags = libc::O_WRONLY | libc::O_CREAT;
        flags |= if overwrite { libc::O_TRUNC } else { libc::O_EXCL };
        trace!("opening file {} for write (overwrite: {})", uri, overwrite);
        unsafe {
            let file = ffi::smbc_getFunctionOpen(self.ctx)(self.ctx, c_uri.as_ptr(), flags, 0o644);
            if file.is_null() {
                let err = CifsError::last_os_error();
                error!("could not create file {}: {}", uri, err);
                return Err(err);
            }
            let file = FileGuard {
                ctx: self.ctx,
                file,
            };
            let write = ffi::smbc_getFunctionWrite(self.ctx);
            let mut written = 0;
            while written < data.len() {
                let n = write(
                    self.ctx,
                    file.file,
                    data[written..].as_ptr() as *const c_void,
                    data.len() - written,
                );
                if n == 0 {
                    // server stopped accepting bytes; report the short write
                    break;
                } else if n < 0 {
                    return Err(CifsError::last_os_error());
                }
                written += n as usize;
            }
            debug!("wrote {} bytes to {}", written, uri);
            Ok(written)
        }
    }
}

impl Drop for NativeContext {
    fn drop(&mut self) {
        unsafe {
            let auth = ffi::smbc_getOptionUserData(self.ctx) as *mut SmbAuth;
            if !auth.is_null() {
                drop(Box::from_raw(auth));
            }
        }
        purge_cached_servers(self);
        unsafe {
            ffi::smbc_free_context(self.ctx, 1);
        }
        debug!("smb context released");
    }
}

/// Closes a directory handle when the enclosing operation returns
struct DirGuard {
    ctx: *mut ffi::SMBCCTX,
    dir: *mut ffi::SMBCFILE,
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        unsafe {
            ffi::smbc_getFunctionClosedir(self.ctx)(self.ctx, self.dir);
        }
    }
}

/// Closes a file handle when the enclosing operation returns
struct FileGuard {
    ctx: *mut ffi::SMBCCTX,
    file: *mut ffi::SMBCFILE,
}

impl Drop for FileGuard {
    fn drop(&mut self) {
        unsafe {
            ffi::smbc_getFunctionClose(self.ctx)(self.ctx, self.file);
        }
    }
}

fn to_cstring(uri: &str) -> CifsResult<CString> {
    CString::new(uri).map_err(|_| CifsError::InvalidArgument)
}

/// Auth callback handed to libsmbclient; reads the credentials boxed into
/// the context user data and copies them into the library's buffers,
/// falling back to a guest login when no credentials are attached.
unsafe extern "C" fn auth_callback(
    ctx: *mut ffi::SMBCCTX,
    _server: *const c_char,
    _share: *const c_char,
    workgroup: *mut c_char,
    wglen: c_int,
    username: *mut c_char,
    unlen: c_int,
    password: *mut c_char,
    pwlen: c_int,
) {
    let auth = ffi::smbc_getOptionUserData(ctx) as *const SmbAuth;
    let (wg, user, pass) = if auth.is_null() {
        ("", "guest", "")
    } else {
        (
            (*auth).workgroup_str(),
            (*auth).username_str(),
            (*auth).password_str(),
        )
    };
    copy_cstr(workgroup, wglen, wg);
    copy_cstr(username, unlen, if user.is_empty() { "guest" } else { user });
    copy_cstr(password, pwlen, pass);
}

/// strncpy semantics: copy up to `cap - 1` bytes and always terminate
fn copy_cstr(dst: *mut c_char, cap: c_int, src: &str) {
    if dst.is_null() || cap <= 0 {
        return;
    }
    let n = src.len().min(cap as usize - 1);
    unsafe {
        std::ptr::copy_nonoverlapping(src.as_ptr() as *const c_char, dst, n);
        *dst.add(n) = 0;
    }
}

#[cfg(test)]
mod test {

    use pretty_assertions::assert_eq;
    #[cfg(feature = "with-containers")]
    use serial_test::serial;

    use super::*;

    #[test]
    fn should_copy_cstr_with_termination() {
        let mut buf = [0x7f as c_char; 8];
        copy_cstr(buf.as_mut_ptr(), buf.len() as c_int, "abc");
        let s = unsafe { CStr::from_ptr(buf.as_ptr()) };
        assert_eq!(s.to_str().unwrap(), "abc");
    }

    #[test]
    fn should_truncate_cstr_to_capacity() {
        let mut buf = [0x7f as c_char; 4];
        copy_cstr(buf.as_mut_ptr(), buf.len() as c_int, "workgroup");
        let s = unsafe { CStr::from_ptr(buf.as_ptr()) };
        assert_eq!(s.to_str().unwrap(), "wor");
    }

    #[test]
    fn should_copy_empty_cstr() {
        let mut buf = [0x7f as c_char; 4];
        copy_cstr(buf.as_mut_ptr(), buf.len() as c_int, "");
        let s = unsafe { CStr::from_ptr(buf.as_ptr()) };
        assert_eq!(s.to_str().unwrap(), "");
    }

    #[test]
    #[cfg(feature = "with-containers")]
    #[serial]
    fn should_write_and_read_file() {
        crate::mock::logger();
        let ctx = init_context();
        let uri = "smb://localhost:3445/temp/native-a.txt";
        let data = b"test data\n";
        assert_eq!(ctx.write_file(uri, data, true).ok().unwrap(), data.len());
        assert_eq!(ctx.read_file(uri).ok().unwrap(), data.to_vec());
    }

    #[test]
    #[cfg(feature = "with-containers")]
    #[serial]
    fn should_not_overwrite_existing_file() {
        crate::mock::logger();
        let ctx = init_context();
        let uri = "smb://localhost:3445/temp/native-b.txt";
        assert!(ctx.write_file(uri, b"first", true).is_ok());
        assert_eq!(
            ctx.write_file(uri, b"second", false).err().unwrap(),
            CifsError::AlreadyExists
        );
    }

    #[test]
    #[cfg(feature = "with-containers")]
    #[serial]
    fn should_read_directory() {
        crate::mock::logger();
        let ctx = init_context();
        assert!(ctx
            .write_file("smb://localhost:3445/temp/native-c.txt", b"x", true)
            .is_ok());
        let entries = ctx.read_dir("smb://localhost:3445/temp/").ok().unwrap();
        assert!(entries.iter().any(|e| e.name() == "native-c.txt"));
    }

    #[test]
    #[cfg(feature = "with-containers")]
    #[serial]
    fn should_purge_cached_servers_and_stay_usable() {
        crate::mock::logger();
        let ctx = init_context();
        let uri = "smb://localhost:3445/temp/native-d.txt";
        assert!(ctx.write_file(uri, b"hello", true).is_ok());
        purge_cached_servers(&ctx);
        // next operation reconnects transparently
        assert_eq!(ctx.read_file(uri).ok().unwrap(), b"hello".to_vec());
    }

    #[cfg(feature = "with-containers")]
    fn init_context() -> NativeContext {
        NativeContext::try_new(
            SmbAuth::default()
                .workgroup("WORKGROUP")
                .username("test")
                .password("test"),
        )
        .ok()
        .unwrap()
    }
}
