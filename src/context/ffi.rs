//! ## ffi
//!
//! raw bindings to the subset of libsmbclient and talloc used by this crate

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]

use libc::{c_char, c_int, c_uint, c_void, mode_t};

/// Opaque smb client context
#[repr(C)]
pub struct SMBCCTX {
    _opaque: [u8; 0],
}

/// Opaque handle for open files and directories
#[repr(C)]
pub struct SMBCFILE {
    _opaque: [u8; 0],
}

/// Directory entry as laid out by libsmbclient.
///
/// `name` is a trailing inline array; only its first byte is declared
/// here, the rest lives past the end of the struct.
#[repr(C)]
pub struct smbc_dirent {
    pub smbc_type: c_uint,
    pub dirlen: c_uint,
    pub commentlen: c_uint,
    pub comment: *mut c_char,
    pub namelen: c_uint,
    pub name: [c_char; 1],
}

/// Auth callback installed with [`smbc_setFunctionAuthDataWithContext`]
pub type smbc_get_auth_data_with_context_fn = unsafe extern "C" fn(
    ctx: *mut SMBCCTX,
    server: *const c_char,
    share: *const c_char,
    workgroup: *mut c_char,
    wglen: c_int,
    username: *mut c_char,
    unlen: c_int,
    password: *mut c_char,
    pwlen: c_int,
);

// per-context function table entries. The getters below never return null
// for a context obtained from smbc_new_context, which installs the default
// table before handing the context out.
pub type smbc_purge_cached_fn = unsafe extern "C" fn(ctx: *mut SMBCCTX) -> c_int;
pub type smbc_opendir_fn =
    unsafe extern "C" fn(ctx: *mut SMBCCTX, fname: *const c_char) -> *mut SMBCFILE;
pub type smbc_readdir_fn =
    unsafe extern "C" fn(ctx: *mut SMBCCTX, dir: *mut SMBCFILE) -> *mut smbc_dirent;
pub type smbc_closedir_fn = unsafe extern "C" fn(ctx: *mut SMBCCTX, dir: *mut SMBCFILE) -> c_int;
pub type smbc_open_fn = unsafe extern "C" fn(
    ctx: *mut SMBCCTX,
    fname: *const c_char,
    flags: c_int,
    mode: mode_t,
) -> *mut SMBCFILE;
pub type smbc_read_fn = unsafe extern "C" fn(
    ctx: *mut SMBCCTX,
    file: *mut SMBCFILE,
    buf: *mut c_void,
    count: libc::size_t,
) -> libc::ssize_t;
pub type smbc_write_fn = unsafe extern "C" fn(
    ctx: *mut SMBCCTX,
    file: *mut SMBCFILE,
    buf: *const c_void,
    count: libc::size_t,
) -> libc::ssize_t;
pub type smbc_close_fn = unsafe extern "C" fn(ctx: *mut SMBCCTX, file: *mut SMBCFILE) -> c_int;

#[link(name = "smbclient")]
extern "C" {
    pub fn smbc_new_context() -> *mut SMBCCTX;
    pub fn smbc_init_context(ctx: *mut SMBCCTX) -> *mut SMBCCTX;
    pub fn smbc_free_context(ctx: *mut SMBCCTX, shutdown_ctx: c_int) -> c_int;

    pub fn smbc_setFunctionAuthDataWithContext(
        ctx: *mut SMBCCTX,
        fn_: smbc_get_auth_data_with_context_fn,
    );
    pub fn smbc_setOptionUserData(ctx: *mut SMBCCTX, user_data: *mut c_void);
    pub fn smbc_getOptionUserData(ctx: *mut SMBCCTX) -> *mut c_void;

    pub fn smbc_getFunctionPurgeCachedServers(ctx: *mut SMBCCTX) -> smbc_purge_cached_fn;
    pub fn smbc_getFunctionOpendir(ctx: *mut SMBCCTX) -> smbc_opendir_fn;
    pub fn smbc_getFunctionReaddir(ctx: *mut SMBCCTX) -> smbc_readdir_fn;
    pub fn smbc_getFunctionClosedir(ctx: *mut SMBCCTX) -> smbc_closedir_fn;
    pub fn smbc_getFunctionOpen(ctx: *mut SMBCCTX) -> smbc_open_fn;
    pub fn smbc_getFunctionRead(ctx: *mut SMBCCTX) -> smbc_read_fn;
    pub fn smbc_getFunctionWrite(ctx: *mut SMBCCTX) -> smbc_write_fn;
    pub fn smbc_getFunctionClose(ctx: *mut SMBCCTX) -> smbc_close_fn;
}

// talloc_stackframe()/TALLOC_FREE() are macros in the C headers; these are
// the entry points they expand to.
#[link(name = "talloc")]
extern "C" {
    pub fn _talloc_stackframe(location: *const c_char) -> *mut c_void;
    pub fn _talloc_free(ptr: *mut c_void, location: *const c_char) -> c_int;
}
