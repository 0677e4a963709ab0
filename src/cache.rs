//! ## cache
//!
//! cached server connection purge

use crate::context::SmbContext;

/// Purge every server connection the context keeps cached, forcing
/// subsequent operations to re-resolve and reconnect.
///
/// The purge handler allocates through the library's talloc stack and
/// leaks (`no talloc stackframe at libsmb/cliconnect.c`) unless a frame
/// encloses the call, so one is pushed first and released on return.
pub fn purge_cached_servers<C: SmbContext>(ctx: &C) {
    let _frame = ctx.stack_frame();
    ctx.purge_cached();
}
