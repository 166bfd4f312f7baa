//! Download pipeline: streaming fetch plus progress reporting.

pub mod fetch;
pub mod progress;

pub use fetch::download_file;
pub use progress::ProgressCounter;
