//! gogo-dl - episodic anime downloader
//!
//! This library crawls per-episode pages of a gogoanime-style site, picks the
//! download mirror matching a requested resolution, and streams it to disk
//! with single-line progress reporting and an atomic tmp-then-rename write.
//!
//! # Example
//!
//! ```no_run
//! use gogo_dl::{config::Config, crawl::PageCrawler};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_required("one-piece", 1, 3);
//!     PageCrawler::new(&config)?.run().await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod crawl;
pub mod download;
pub mod error;
pub mod fs;
pub mod output;
pub mod scrape;

// Re-exports for convenience
pub use config::Config;
pub use crawl::PageCrawler;
pub use download::{download_file, ProgressCounter};
pub use error::{Error, Result};
pub use scrape::{Anchor, Collector, VisitHooks};
