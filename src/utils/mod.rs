//! ## utils
//!
//! utilities for the cifs client

pub mod url;
