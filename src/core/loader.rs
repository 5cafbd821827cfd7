use crate::core::mapper::FeedItemsMapper;
use crate::domain::model::{LoadError, LoadResult};
use crate::domain::ports::{FeedLoader, HttpClient, HttpClientResult, LoadCompletion};
use std::sync::{Arc, Weak};
use url::Url;

/// Loads feed items from a fixed URL through an injected [`HttpClient`].
///
/// Every `load` issues exactly one GET. Completions for requests that are still
/// in flight when the loader is dropped are never invoked.
pub struct RemoteFeedLoader<C: HttpClient + ?Sized> {
    url: Url,
    client: Arc<C>,
    alive: Arc<()>,
}

impl<C: HttpClient + ?Sized> RemoteFeedLoader<C> {
    pub fn new(url: Url, client: Arc<C>) -> Self {
        Self {
            url,
            client,
            alive: Arc::new(()),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl<C: HttpClient + ?Sized> FeedLoader for RemoteFeedLoader<C> {
    fn load(&self, completion: LoadCompletion) {
        tracing::debug!("Requesting feed from {}", self.url);

        // Only a weak handle goes into the request, so dropping the loader silences it
        let alive: Weak<()> = Arc::downgrade(&self.alive);
        self.client.get(
            &self.url,
            Box::new(move |result| {
                // The loader holds the only strong reference to `alive`.
                let Some(_guard) = alive.upgrade() else {
                    tracing::debug!("Feed loader released before the response arrived");
                    return;
                };
                completion(translate(result));
            }),
        );
    }
}

fn translate(result: HttpClientResult) -> LoadResult {
    match result {
        // A response arrived: status and body decide
        HttpClientResult::Success { data, response } => {
            match FeedItemsMapper::map(&data, &response) {
                Ok(items) => {
                    tracing::debug!("Decoded {} feed items from {}", items.len(), response.url);
                    Ok(items)
                }
                Err(e) => {
                    tracing::warn!("Rejected feed response from {}: {}", response.url, e);
                    Err(LoadError::InvalidData)
                }
            }
        }
        // No usable response, whatever the cause
        HttpClientResult::Failure(e) => {
            tracing::warn!("Feed request failed: {:#}", e);
            Err(LoadError::Connectivity)
        }
    }
}
