use crate::compose;
use crate::ConjugateError;
use scraper::{Html, Selector};
use url::Url;

pub const BASE_URL: &str = "https://cooljugator.com";

/// Fetches conjugation pages from cooljugator.com and turns them into
/// standalone documents for the embedded view.
///
/// All requests are blocking and run on the caller's thread; the interaction
/// surface stays frozen for the duration of a lookup.
pub struct Conjugator {
    client: reqwest::blocking::Client,
    base: Url,
}

impl Conjugator {
    /// A conjugator pointed at the real site.
    pub fn new() -> Result<Self, ConjugateError> {
        Self::with_base_url(BASE_URL)
    }

    /// A conjugator pointed at an arbitrary origin. Tests aim this at a
    /// local mock server.
    pub fn with_base_url(base: &str) -> Result<Self, ConjugateError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("vervoeger/0.1 (verb conjugation viewer)")
            .build()?;
        Ok(Self {
            client,
            base: Url::parse(base)?,
        })
    }

    /// Run one full lookup for `verb`.
    ///
    /// Fetches `{base}/nl/{verb}`, extracts the conjugation container,
    /// inlines every reachable stylesheet the page links, appends the
    /// override styles, and wraps it all into a standalone document.
    ///
    /// An empty (or whitespace-only) verb short-circuits before any network
    /// traffic. A missing container is `NoConjugationData`, not a fetch
    /// error. Unreachable stylesheets are skipped, never propagated.
    pub fn lookup(&self, verb: &str) -> Result<String, ConjugateError> {
        let verb = verb.trim();
        if verb.is_empty() {
            return Err(ConjugateError::EmptyVerb);
        }

        let url = self.page_url(verb);
        tracing::info!(url = %url, "Fetching conjugation page");
        let html = self.fetch_text(&url)?;
        tracing::info!(bytes = html.len(), "Received HTML");

        let document = Html::parse_document(&html);
        let fragment =
            extract_conjugation(&document).ok_or(ConjugateError::NoConjugationData)?;
        let css = self.collect_styles(&document);

        Ok(compose::standalone_document(&css, &fragment))
    }

    fn page_url(&self, verb: &str) -> String {
        format!("{}/nl/{verb}", self.base.as_str().trim_end_matches('/'))
    }

    /// Fetch each linked stylesheet and concatenate the bodies.
    ///
    /// Failures here are downgraded to debug logs: a page with fewer (or
    /// zero) reachable stylesheets still renders, just less styled. Only
    /// network-layer errors are swallowed.
    fn collect_styles(&self, document: &Html) -> String {
        let link_sel = Selector::parse(r#"link[rel="stylesheet"]"#).expect("valid selector");

        let mut css = String::new();
        for link in document.select(&link_sel) {
            let Some(href) = link.value().attr("href") else {
                continue;
            };
            // Resolves root-relative hrefs against the site origin and
            // passes absolute ones through untouched.
            let stylesheet_url = match self.base.join(href) {
                Ok(resolved) => resolved,
                Err(err) => {
                    tracing::debug!(href, %err, "Skipping stylesheet with unresolvable href");
                    continue;
                }
            };
            match self.fetch_text(stylesheet_url.as_str()) {
                Ok(body) => {
                    css.push_str(&body);
                    css.push('\n');
                }
                Err(err) => {
                    tracing::debug!(url = %stylesheet_url, %err, "Skipping unreachable stylesheet");
                }
            }
        }
        css
    }

    fn fetch_text(&self, url: &str) -> Result<String, reqwest::Error> {
        self.client.get(url).send()?.error_for_status()?.text()
    }
}

/// Find the conjugation container and serialize it back to markup.
fn extract_conjugation(document: &Html) -> Option<String> {
    let container_sel = Selector::parse("div#conjugation-data").expect("valid selector");
    document.select(&container_sel).next().map(|el| el.html())
}
