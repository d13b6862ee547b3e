//! Major certification requests submitted through the web form

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ZendeskError};

/// Search query matching major certification request tickets
pub const MAJOR_CERT_QUERY: &str = "subject:\"Major certification request for\"";

/// Submitter and video link read from the comment that opened a request
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CertificationRequest {
    /// Last word of the first `<h5>` heading, the submitter's email
    pub submitter: Option<String>,
    /// Target of the first link
    pub video_url: Option<String>,
}

impl CertificationRequest {
    /// Read a request from the HTML body of its first comment
    ///
    /// Headings without any text are skipped. Missing parts stay `None`.
    pub fn parse(html_body: &str) -> Result<Self> {
        let fragment = Html::parse_fragment(html_body);
        let headings = selector("h5")?;
        let links = selector("a[href]")?;

        let submitter = fragment.select(&headings).find_map(last_word);
        let video_url = fragment
            .select(&links)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(str::to_string);

        Ok(Self {
            submitter,
            video_url,
        })
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ZendeskError::Html(format!("selector '{}': {}", css, e)))
}

fn last_word(element: ElementRef<'_>) -> Option<String> {
    element
        .text()
        .flat_map(str::split_whitespace)
        .last()
        .map(str::to_string)
}
