pub mod loader;
pub mod mapper;

pub use crate::domain::model::{FeedItem, LoadError, LoadResult};
pub use crate::domain::ports::{
    AsyncFeedLoader, ConfigProvider, FeedLoader, HttpClient, HttpClientResult, HttpCompletion,
    HttpResponse, LoadCompletion,
};
pub use crate::utils::error::Result;
