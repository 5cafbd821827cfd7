pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::ReqwestHttpClient;
pub use config::toml_config::TomlConfig;
pub use crate::core::{
    loader::RemoteFeedLoader, mapper::FeedItemsMapper, AsyncFeedLoader, FeedItem, FeedLoader,
    HttpClient, HttpClientResult, HttpResponse, LoadError, LoadResult,
};
pub use utils::error::{FeedError, Result};
