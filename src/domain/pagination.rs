use tracing::debug;

use crate::domain::location::ListingEnvelope;
use crate::error::{PokedexError, Result};
use crate::ports::fetcher::Fetcher;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Forward/backward position in a paginated listing.
///
/// Links are only ever replaced by a fully decoded envelope, so a failed
/// page load leaves the cursor where it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationCursor {
    next: Option<String>,
    previous: Option<String>,
}

impl PaginationCursor {
    pub fn new(first_page: impl Into<String>) -> Self {
        Self {
            next: Some(first_page.into()),
            previous: None,
        }
    }

    pub fn next(&self) -> Option<&str> {
        self.next.as_deref()
    }

    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Load the next page and return its result names in order.
    pub async fn advance(&mut self, source: &dyn Fetcher) -> Result<Vec<String>> {
        self.turn(source, Direction::Forward).await
    }

    /// Load the previous page and return its result names in order.
    pub async fn retreat(&mut self, source: &dyn Fetcher) -> Result<Vec<String>> {
        self.turn(source, Direction::Backward).await
    }

    async fn turn(&mut self, source: &dyn Fetcher, direction: Direction) -> Result<Vec<String>> {
        let url = match direction {
            Direction::Forward => self.next.as_deref().ok_or(PokedexError::NoNextPage)?,
            Direction::Backward => self
                .previous
                .as_deref()
                .ok_or(PokedexError::NoPreviousPage)?,
        };

        let body = source.fetch(url).await?;
        let envelope = ListingEnvelope::decode(&body)?;
        debug!(
            ?direction,
            url,
            results = envelope.results.len(),
            "Loaded listing page"
        );

        let names = envelope.names();
        self.next = envelope.next;
        self.previous = envelope.previous;
        Ok(names)
    }
}
