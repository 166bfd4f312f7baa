//! Episode range crawling.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use reqwest::Client;

use crate::config::Config;
use crate::download::download_file;
use crate::error::Result;
use crate::output::{print_info, print_success, print_warning};
use crate::scrape::{Anchor, Collector, VisitHooks};

/// Crawls every episode page in the configured range and downloads each
/// mirror link whose text matches the configured resolution.
///
/// Strictly sequential: a matching anchor blocks the crawl of its page until
/// the download finishes, and pages are visited one after another.
pub struct PageCrawler<'a> {
    config: &'a Config,
    collector: Collector,
    client: Client,
}

impl<'a> PageCrawler<'a> {
    pub fn new(config: &'a Config) -> Result<Self> {
        Ok(Self {
            config,
            collector: Collector::new(&config.options.link_selector)?,
            client: Client::new(),
        })
    }

    /// Visit every episode page in `[start_episode, end_episode]`. A reversed
    /// range visits nothing; a page without a matching mirror downloads
    /// nothing. Any page or download failure aborts the whole run.
    pub async fn run(&self) -> Result<()> {
        let mut hooks = EpisodeHooks {
            config: self.config,
            client: &self.client,
        };

        for episode in self.config.target.start_episode..=self.config.target.end_episode {
            let url = self.config.episode_page_url(episode);
            print_info(&format!("Visiting {}", url));
            self.collector.visit(&url, &mut hooks).await?;
        }

        Ok(())
    }
}

/// Returns whether a mirror anchor matches the resolution filter. Plain
/// substring containment: "1280p-fast" matches a "1280" filter.
pub fn anchor_matches(anchor: &Anchor, resolution: &str) -> bool {
    anchor.text.contains(resolution)
}

struct EpisodeHooks<'a> {
    config: &'a Config,
    client: &'a Client,
}

#[async_trait]
impl VisitHooks for EpisodeHooks<'_> {
    fn before_request(&mut self, headers: &mut HeaderMap) {
        let cookie = &self.config.session.auth_cookie;
        if cookie.is_empty() {
            return;
        }

        match HeaderValue::from_str(cookie) {
            Ok(value) => {
                headers.insert(COOKIE, value);
            }
            Err(_) => {
                print_warning("auth cookie contains invalid header characters, not sent");
            }
        }
    }

    async fn on_anchor(&mut self, anchor: &Anchor) -> Result<()> {
        if !anchor_matches(anchor, &self.config.target.resolution) {
            tracing::debug!("skipping mirror '{}'", anchor.text);
            return Ok(());
        }

        download_file(self.client, self.config, &anchor.href).await?;
        print_success("Complete!");

        Ok(())
    }
}
