//! ## Mock
//!
//! Contains mock for test units

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::context::SmbContext;
use crate::error::{CifsError, CifsResult};
use crate::types::SmbDirent;

// -- logger

#[allow(dead_code)]
pub fn logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// -- context

/// Allocation frame handed out by [`MockContext`]; keeps the live-frame
/// counter honest by decrementing it on drop.
pub struct MockFrame {
    live: Rc<Cell<usize>>,
}

impl Drop for MockFrame {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

/// Context backed by canned data, recording purge and frame activity
#[derive(Default)]
pub struct MockContext {
    purge_calls: Cell<usize>,
    purged_inside_frame: Cell<bool>,
    frames_opened: Cell<usize>,
    live_frames: Rc<Cell<usize>>,
    max_live_frames: Cell<usize>,
    dirs: RefCell<HashMap<String, Vec<SmbDirent>>>,
    files: RefCell<HashMap<String, Vec<u8>>>,
}

impl MockContext {
    pub fn put_dir(&self, uri: &str, entries: Vec<SmbDirent>) {
        self.dirs.borrow_mut().insert(uri.to_string(), entries);
    }

    pub fn put_file(&self, uri: &str, data: Vec<u8>) {
        self.files.borrow_mut().insert(uri.to_string(), data);
    }

    pub fn file(&self, uri: &str) -> Option<Vec<u8>> {
        self.files.borrow().get(uri).cloned()
    }

    pub fn purge_calls(&self) -> usize {
        self.purge_calls.get()
    }

    /// Whether the latest purge ran with an allocation frame open
    pub fn purged_inside_frame(&self) -> bool {
        self.purged_inside_frame.get()
    }

    pub fn frames_opened(&self) -> usize {
        self.frames_opened.get()
    }

    pub fn live_frames(&self) -> usize {
        self.live_frames.get()
    }

    pub fn max_live_frames(&self) -> usize {
        self.max_live_frames.get()
    }
}

impl SmbContext for MockContext {
    type Frame = MockFrame;

    fn stack_frame(&self) -> MockFrame {
        self.frames_opened.set(self.frames_opened.get() + 1);
        self.live_frames.set(self.live_frames.get() + 1);
        self.max_live_frames
            .set(self.max_live_frames.get().max(self.live_frames.get()));
        MockFrame {
            live: Rc::clone(&self.live_frames),
        }
    }

    fn purge_cached(&self) {
        self.purge_calls.set(self.purge_calls.get() + 1);
        self.purged_inside_frame.set(self.live_frames.get() > 0);
    }

    fn read_dir(&self, uri: &str) -> CifsResult<Vec<SmbDirent>> {
        self.dirs
            .borrow()
            .get(uri)
            .cloned()
            .ok_or(CifsError::NoSuchFileOrDirectory)
    }

    fn read_file(&self, uri: &str) -> CifsResult<Vec<u8>> {
        self.files
            .borrow()
            .get(uri)
            .cloned()
            .ok_or(CifsError::NoSuchFileOrDirectory)
    }

    fn write_file(&self, uri: &str, data: &[u8], overwrite: bool) -> CifsResult<usize> {
        let mut files = self.files.borrow_mut();
        if !overwrite && files.contains_key(uri) {
            return Err(CifsError::AlreadyExists);
        }
        files.insert(uri.to_string(), data.to_vec());
        Ok(data.len())
    }
}
