// src/fetch.rs

use anyhow::{bail, Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use tracing::{debug, info};
use url::Url;

/// Pinned revision of the Falcon 9 / Falcon Heavy launch list. The table
/// positions in `schema::FALCON_LAUNCHES` were verified against this `oldid`;
/// fetching the live article would move them underneath us.
pub static LAUNCH_PAGE_URL: &str =
    "https://en.wikipedia.org/w/index.php?title=List_of_Falcon_9_and_Falcon_Heavy_launches&oldid=1027686922";

/// Raw fetch result: the markup plus the status it arrived with.
#[derive(Debug)]
pub struct Page {
    pub status: StatusCode,
    pub body: String,
}

/// GET `url` once and return the page body.
///
/// Any status other than 200 is terminal; redirects the transport already
/// followed are fine, anything still visible here is not. No retries.
pub fn fetch_page(client: &Client, url: &str) -> Result<Page> {
    let parsed = Url::parse(url).with_context(|| format!("invalid page URL `{}`", url))?;
    debug!(url = %parsed, "requesting page");

    let resp = client
        .get(parsed)
        .send()
        .with_context(|| format!("request to `{}` failed", url))?;

    let status = resp.status();
    if status != StatusCode::OK {
        bail!(
            "Failed to retrieve the page, status code: {}",
            status.as_u16()
        );
    }

    let body = resp.text().context("reading response body")?;
    info!(status = %status, bytes = body.len(), "page retrieved");
    Ok(Page { status, body })
}
