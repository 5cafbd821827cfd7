use crate::domain::model::{LoadError, LoadResult};
use async_trait::async_trait;
use tokio::sync::oneshot;
use url::Url;

/// Metadata of a response that made it back from the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub url: Url,
    pub status_code: u16,
}

#[derive(Debug)]
pub enum HttpClientResult {
    Success { data: Vec<u8>, response: HttpResponse },
    Failure(anyhow::Error),
}

pub type HttpCompletion = Box<dyn FnOnce(HttpClientResult) + Send + 'static>;

pub type LoadCompletion = Box<dyn FnOnce(LoadResult) + Send + 'static>;

/// Performs a GET for `url` and reports the outcome through `completion`.
///
/// Implementations must invoke `completion` exactly once, from any thread,
/// and must keep concurrent requests independent of each other.
pub trait HttpClient: Send + Sync {
    fn get(&self, url: &Url, completion: HttpCompletion);
}

pub trait FeedLoader: Send + Sync {
    fn load(&self, completion: LoadCompletion);
}

#[async_trait]
pub trait AsyncFeedLoader: Send + Sync {
    async fn load_items(&self) -> LoadResult;
}

#[async_trait]
impl<T: FeedLoader + ?Sized> AsyncFeedLoader for T {
    async fn load_items(&self) -> LoadResult {
        let (tx, rx) = oneshot::channel();
        self.load(Box::new(move |result| {
            // The receiver only goes away when the caller stopped waiting.
            let _ = tx.send(result);
        }));

        match rx.await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!("Feed completion was dropped without a result");
                Err(LoadError::Connectivity)
            }
        }
    }
}

pub trait ConfigProvider: Send + Sync {
    fn feed_url(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn user_agent(&self) -> &str;
}
