//! Cursor pagination over Up list endpoints.
//!
//! Up pages with an opaque `page[after]` cursor embedded in the
//! `links.next` / `links.prev` URLs of every list response.

use std::collections::HashSet;
use std::future::Future;

use reqwest::Url;
use thiserror::Error;

use crate::client::ClientError;
use crate::models::{ListDocument, Resource};

/// Query parameter carrying the cursor in pagination links.
pub const CURSOR_PARAM: &str = "page[after]";

/// Largest `page[size]` Up accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Upper bound on pages walked by [`fetch_all_pages`] for one collection.
pub const DEFAULT_MAX_PAGES: usize = 100;

#[derive(Debug, Error)]
pub enum PaginationError {
    #[error(transparent)]
    Fetch(#[from] ClientError),

    #[error("Pagination stopped after {0} pages without reaching the last page")]
    PageLimit(usize),

    #[error("Pagination cursor '{0}' was returned twice")]
    RepeatedCursor(String),
}

/// Extract the `page[after]` cursor from a pagination link.
///
/// Returns `None` for a missing link, a link without the parameter, an empty
/// parameter, or a link that does not parse as a URL.
pub fn extract_cursor(link: Option<&str>) -> Option<String> {
    let link = link?;
    let url = match Url::parse(link) {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring unparsable pagination link");
            return None;
        }
    };

    url.query_pairs()
        .find(|(key, _)| key == CURSOR_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Walk a paginated listing to the end and return every item in page order.
///
/// `fetch_page` is called with `None` first, then with each next cursor.
/// Pages are fetched one after another since each cursor comes from the
/// previous page. The walk fails once `max_pages` pages have been fetched
/// without reaching the end, or when the server hands back a cursor it
/// already returned.
pub async fn fetch_all_pages<F, Fut>(
    max_pages: usize,
    mut fetch_page: F,
) -> Result<Vec<Resource>, PaginationError>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<ListDocument, ClientError>>,
{
    let mut items = Vec::new();
    let mut seen = HashSet::new();
    let mut cursor: Option<String> = None;
    let mut pages = 0;

    loop {
        if pages == max_pages {
            return Err(PaginationError::PageLimit(max_pages));
        }

        let page = fetch_page(cursor.take()).await?;
        pages += 1;

        let next = extract_cursor(page.next_link());
        items.extend(page.data);

        match next {
            None => break,
            Some(next) => {
                if !seen.insert(next.clone()) {
                    return Err(PaginationError::RepeatedCursor(next));
                }
                cursor = Some(next);
            }
        }
    }

    tracing::debug!(pages, items = items.len(), "Fetched all pages");
    Ok(items)
}
