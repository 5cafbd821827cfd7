use serde::Serialize;
use thiserror::Error;
use url::Url;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedItem {
    pub id: Uuid,
    pub description: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "image")]
    pub image_url: Url,
}

impl FeedItem {
    pub fn new(
        id: Uuid,
        description: Option<String>,
        location: Option<String>,
        image_url: Url,
    ) -> Self {
        Self {
            id,
            description,
            location,
            image_url,
        }
    }
}

/// The only failures a feed consumer ever sees.
///
/// Underlying transport errors and decoding diagnostics are collapsed into
/// these two kinds by the loader.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadError {
    #[error("could not reach the feed server")]
    Connectivity,

    #[error("the feed server returned invalid data")]
    InvalidData,
}

pub type LoadResult = std::result::Result<Vec<FeedItem>, LoadError>;
