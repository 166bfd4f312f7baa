//! File system helpers: naming and path management.

pub mod naming;
pub mod paths;

pub use naming::sanitize_title;
pub use paths::{ensure_dir, tmp_path};
