//! Pager implementation
//!
//! Drives a [`PageFetcher`] into a lazy sequence of pages or items.

use super::types::{CursorState, Page};
use crate::error::Result;
use async_trait::async_trait;
use futures::stream::{self, Stream, TryStreamExt};

/// The fetch seam between a pager and a concrete list operation
///
/// Filter parameters belong to the fetcher: one fetcher is built per
/// logical listing call, so `fetch_first` takes no arguments and
/// `fetch_next` takes only the server-issued token.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Item type produced by the listing
    type Item: Send;

    /// Fetch the first page
    async fn fetch_first(&self) -> Result<Page<Self::Item>>;

    /// Fetch the page a continuation token points at
    ///
    /// Only ever called with a non-empty token.
    async fn fetch_next(&self, token: &str) -> Result<Page<Self::Item>>;
}

/// Lazy, strictly sequential pager over a fetcher
///
/// At most one fetch is in flight at any time; the fetch for page N+1 is
/// only issued once page N has been handed to the consumer. Dropping the
/// pager (or a stream built from it) cancels the sequence: no further
/// fetches are issued.
///
/// The pager is not restartable. Any fetch error exhausts the cursor;
/// retries belong to the transport layer underneath the fetcher.
#[derive(Debug)]
pub struct Pager<F: PageFetcher> {
    fetcher: F,
    state: CursorState,
}

impl<F: PageFetcher> Pager<F> {
    /// Create a pager over a fetcher
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            state: CursorState::NotStarted,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_state(fetcher: F, state: CursorState) -> Self {
        Self { fetcher, state }
    }

    /// Current cursor state
    pub fn state(&self) -> &CursorState {
        &self.state
    }

    /// Check if the sequence is over
    pub fn is_exhausted(&self) -> bool {
        self.state.is_exhausted()
    }

    /// Fetch the next page, or `None` once the sequence is over
    ///
    /// The state is taken before fetching and only a successful fetch
    /// reinstates a continuation, so an error leaves the cursor exhausted
    /// without replay.
    pub async fn next_page(&mut self) -> Result<Option<Page<F::Item>>> {
        let result = match std::mem::replace(&mut self.state, CursorState::Exhausted) {
            CursorState::Exhausted => return Ok(None),
            // Guard: an empty-but-non-null token means "no more results",
            // never a request
            CursorState::Continuation(token) if token.is_empty() => return Ok(None),
            CursorState::NotStarted => self.fetcher.fetch_first().await,
            CursorState::Continuation(token) => self.fetcher.fetch_next(&token).await,
        };

        let page = result?;
        self.state = match page.continuation_token() {
            Some(token) => CursorState::Continuation(token.to_string()),
            None => CursorState::Exhausted,
        };
        Ok(Some(page))
    }

    /// Drain the whole sequence into one vector
    ///
    /// Issues exactly as many fetches as there are pages; items keep
    /// server order across page boundaries.
    pub async fn collect(mut self) -> Result<Vec<F::Item>> {
        let mut all = Vec::new();
        while let Some(page) = self.next_page().await? {
            all.extend(page.into_items());
        }
        Ok(all)
    }

    /// Lazy stream of pages
    pub fn pages(self) -> impl Stream<Item = Result<Page<F::Item>>> {
        stream::try_unfold(self, |mut pager| async move {
            Ok(pager.next_page().await?.map(|page| (page, pager)))
        })
    }

    /// Lazy stream of items, flattened across pages in server order
    ///
    /// The next page is only fetched once every item of the current page
    /// has been consumed.
    pub fn items(self) -> impl Stream<Item = Result<F::Item>> {
        self.pages()
            .map_ok(|page| stream::iter(page.into_items().into_iter().map(Ok)))
            .try_flatten()
    }
}
