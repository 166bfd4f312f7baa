//! Streaming file download with atomic rename.

use std::path::PathBuf;

use futures::StreamExt;
use reqwest::Client;
use tokio::fs::File;
use url::Url;
use tokio::io::AsyncWriteExt;

use crate::config::Config;
use crate::download::progress::ProgressCounter;
use crate::error::{Error, Result};
use crate::fs::{ensure_dir, sanitize_title, tmp_path};
use crate::output::print_info;

/// Download `url` into the configured download directory.
///
/// The file is named after the `title` query parameter of the final
/// (post-redirect) URL, written under a `.tmp` suffix while the body
/// streams, and renamed into place only after every byte is flushed. A
/// mid-stream failure leaves the partial `.tmp` behind; it is overwritten
/// by the next matching run.
pub async fn download_file(client: &Client, config: &Config, url: &str) -> Result<PathBuf> {
    let response = client.get(url).send().await?;

    // Redirects were already followed; the title lives on the final URL.
    let title = title_from_url(response.url())?;
    let title = sanitize_title(&title)?;

    let dir = config.download_directory()?;
    ensure_dir(&dir)?;

    let destination = dir.join(&title);
    let tmp = tmp_path(&destination);

    print_info(&format!("Downloading at {}", destination.display()));

    let mut file = File::create(&tmp).await?;
    let mut counter = ProgressCounter::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
        // Tap the chunk before it reaches disk; observation only.
        counter.observe(&chunk);
        file.write_all(&chunk).await?;
    }

    file.flush().await?;
    drop(file);
    counter.finish();

    // The file must be closed and fully flushed before this rename; nothing
    // ever appears under the final name until the download is complete.
    tokio::fs::rename(&tmp, &destination).await?;

    Ok(destination)
}

/// Read the `title` query parameter off the final download URL.
///
/// The upstream CDN names files through this parameter. An absent or empty
/// title would otherwise produce a nameless file, so it is surfaced as an
/// error instead.
fn title_from_url(url: &Url) -> Result<String> {
    url.query_pairs()
        .find(|(key, _)| key == "title")
        .map(|(_, value)| value.into_owned())
        .filter(|title| !title.is_empty())
        .ok_or_else(|| {
            Error::Download(format!("no 'title' query parameter on download URL {}", url))
        })
}
