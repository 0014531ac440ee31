use serde::{Deserialize, Serialize};

/// Publisher identity attached to a headline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub id: String,
    pub name: String,
}

/// A single news article surfaced to the UI.
///
/// `url` is the stable identity key for list diffing. `published_at` holds
/// the already-formatted display timestamp, not the wire instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headline {
    pub source: Source,
    pub author: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub url_to_image: String,
    pub published_at: String,
    pub content: String,
}
