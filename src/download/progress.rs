//! Single-line download progress reporting.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use indicatif::HumanBytes;

/// Width of the blank pad used to erase the previous render.
const LINE_WIDTH: usize = 45;

/// Byte counter tapped by the download copy loop.
///
/// Accumulates the total bytes seen, recomputes a KB/s rate once per second,
/// and re-renders an overwriting progress line on every chunk. Output volume
/// therefore scales with chunk count, not with the sampling window.
pub struct ProgressCounter {
    total: u64,
    last_sample_at: Instant,
    last_sample_bytes: u64,
    rate_kbps: u64,
}

impl ProgressCounter {
    pub fn new() -> Self {
        Self {
            total: 0,
            last_sample_at: Instant::now(),
            last_sample_bytes: 0,
            rate_kbps: 0,
        }
    }

    /// Account for one chunk and re-render the progress line. Returns the
    /// chunk length; the bytes themselves are only observed, never altered.
    pub fn observe(&mut self, chunk: &[u8]) -> usize {
        self.record(chunk.len() as u64, Instant::now());
        self.render();
        chunk.len()
    }

    fn record(&mut self, len: u64, now: Instant) {
        self.total += len;
        if now.duration_since(self.last_sample_at) > Duration::from_secs(1) {
            self.rate_kbps = (self.total - self.last_sample_bytes) / 1024;
            self.last_sample_at = now;
            self.last_sample_bytes = self.total;
        }
    }

    /// Total bytes observed so far.
    pub fn total_bytes(&self) -> u64 {
        self.total
    }

    /// Rate as of the last one-second sample.
    pub fn rate_kbps(&self) -> u64 {
        self.rate_kbps
    }

    fn render(&self) {
        // Blank out the previous line, then return to column zero and
        // overwrite it with the current status.
        print!("\r{}", " ".repeat(LINE_WIDTH));
        print!(
            "\rDownloading... {} complete [{} KB/s]",
            HumanBytes(self.total),
            self.rate_kbps
        );
        let _ = io::stdout().flush();
    }

    /// The progress display shares one line; terminate it once the
    /// download is done.
    pub fn finish(&self) {
        println!();
    }
}

impl Default for ProgressCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_sum_of_chunk_lengths() {
        let mut counter = ProgressCounter::new();
        let now = Instant::now();
        counter.record(100, now);
        counter.record(0, now);
        counter.record(4096, now);
        assert_eq!(counter.total_bytes(), 4196);
    }

    #[test]
    fn test_rate_unchanged_within_sampling_window() {
        let mut counter = ProgressCounter::new();
        let now = counter.last_sample_at;
        counter.record(1024 * 1024, now);
        assert_eq!(counter.rate_kbps(), 0);
    }

    #[test]
    fn test_rate_reflects_bytes_since_last_sample() {
        let mut counter = ProgressCounter::new();
        let start = counter.last_sample_at;

        counter.record(2048, start);
        counter.record(0, start + Duration::from_secs(2));
        assert_eq!(counter.rate_kbps(), 2);

        // Anchors reset: only bytes after the sample count next time.
        counter.record(10 * 1024, start + Duration::from_secs(3));
        counter.record(0, start + Duration::from_secs(5));
        assert_eq!(counter.rate_kbps(), 10);
    }

    #[test]
    fn test_observe_returns_chunk_length() {
        let mut counter = ProgressCounter::new();
        assert_eq!(counter.observe(&[0u8; 37]), 37);
        assert_eq!(counter.total_bytes(), 37);
    }
}
