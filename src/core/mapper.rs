use crate::domain::model::FeedItem;
use crate::domain::ports::HttpResponse;
use serde::{de, Deserialize, Deserializer};
use thiserror::Error;
use url::Url;
use uuid::Uuid;

pub const OK_200: u16 = 200;

#[derive(Error, Debug)]
pub enum MappingError {
    #[error("unexpected status code {0}")]
    UnexpectedStatus(u16),

    #[error("malformed feed payload: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct Root {
    items: Vec<RemoteFeedItem>,
}

#[derive(Deserialize)]
struct RemoteFeedItem {
    #[serde(deserialize_with = "deserialize_hyphenated_uuid")]
    id: Uuid,
    description: Option<String>,
    location: Option<String>,
    image: Url,
}

// Only the canonical 8-4-4-4-12 form; simple, braced and URN ids are rejected.
fn deserialize_hyphenated_uuid<'de, D>(deserializer: D) -> Result<Uuid, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if raw.len() != uuid::fmt::Hyphenated::LENGTH {
        return Err(de::Error::custom(format!("id is not a hyphenated UUID: {}", raw)));
    }
    Uuid::try_parse(&raw).map_err(de::Error::custom)
}

impl From<RemoteFeedItem> for FeedItem {
    fn from(item: RemoteFeedItem) -> Self {
        FeedItem::new(item.id, item.description, item.location, item.image)
    }
}

/// Turns a raw feed response into domain items.
///
/// Only a 200 response is considered, and the whole document must decode:
/// a single bad record rejects the response.
pub struct FeedItemsMapper;

impl FeedItemsMapper {
    pub fn map(data: &[u8], response: &HttpResponse) -> Result<Vec<FeedItem>, MappingError> {
        if response.status_code != OK_200 {
            return Err(MappingError::UnexpectedStatus(response.status_code));
        }

        let root: Root = serde_json::from_slice(data)?;
        Ok(root.items.into_iter().map(FeedItem::from).collect())
    }
}
