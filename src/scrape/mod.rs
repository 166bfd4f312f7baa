//! Minimal page-crawling seam.
//!
//! The crawler core only needs two capabilities from an HTML engine: mutate
//! the outgoing request before a page visit, and get called back once per
//! element matching a CSS selector. [`VisitHooks`] captures both, and
//! [`Collector`] satisfies it with reqwest + scraper. Matches are dispatched
//! in document order and each hook runs to completion before the next one
//! fires, so a visit returns only after all of its callbacks have run.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::Client;
use scraper::{Html, Selector};

use crate::error::{Error, Result};

/// Owned snapshot of a matched anchor element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// Visible text content, whitespace-trimmed.
    pub text: String,
    /// Value of the `href` attribute.
    pub href: String,
}

/// Callbacks fired during a page visit.
#[async_trait]
pub trait VisitHooks: Send {
    /// Runs once per visit, before the page is fetched.
    fn before_request(&mut self, _headers: &mut HeaderMap) {}

    /// Runs once per matched anchor, in document order. Returning an error
    /// aborts the visit.
    async fn on_anchor(&mut self, anchor: &Anchor) -> Result<()>;
}

/// Fetches pages and dispatches selector matches to a [`VisitHooks`] impl.
pub struct Collector {
    client: Client,
    selector: Selector,
}

impl Collector {
    /// Create a collector matching anchors under the given CSS selector.
    pub fn new(selector: &str) -> Result<Self> {
        let selector = Selector::parse(selector)
            .map_err(|e| Error::Selector(format!("{}: {}", selector, e)))?;

        Ok(Self {
            client: Client::new(),
            selector,
        })
    }

    /// Visit a page: run the request hook, fetch, then dispatch one
    /// `on_anchor` call per selector match.
    pub async fn visit<H: VisitHooks>(&self, url: &str, hooks: &mut H) -> Result<()> {
        let mut headers = HeaderMap::new();
        hooks.before_request(&mut headers);

        let response = self.client.get(url).headers(headers).send().await?;
        let status = response.status();
        tracing::debug!("GET {} -> {}", url, status);

        let body = response.text().await?;

        // Html is not Send, so collect matches before awaiting anything.
        let anchors = extract_anchors(&body, &self.selector);

        for anchor in &anchors {
            hooks.on_anchor(anchor).await?;
        }

        Ok(())
    }
}

/// Pull all matching anchors out of an HTML document, in document order.
fn extract_anchors(html: &str, selector: &Selector) -> Vec<Anchor> {
    let document = Html::parse_document(html);

    document
        .select(selector)
        .filter_map(|element| {
            let href = element.value().attr("href")?.to_string();
            let text = element.text().collect::<String>().trim().to_string();
            Some(Anchor { text, href })
        })
        .collect()
}
