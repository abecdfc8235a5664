use crate::utils::error::PublishError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Identity of the queue a post belongs to. `None` collects posts that are
/// not attributable to any known feed.
pub type FeedKey = Option<i64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PubFormat {
    Json,
    Rss,
    Atom,
}

impl fmt::Display for PubFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PubFormat::Json => "JSON",
            PubFormat::Rss => "RSS",
            PubFormat::Atom => "ATOM",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for PubFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "JSON" => Ok(PubFormat::Json),
            "RSS" => Ok(PubFormat::Rss),
            "ATOM" => Ok(PubFormat::Atom),
            other => Err(format!("unknown publication format: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedDefinition {
    pub id: i64,
    pub ident: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub generator: Option<String>,
    #[serde(default)]
    pub copyright: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    pub transport_ident: String,
    pub username: String,
    #[serde(default)]
    pub image_transport_ident: Option<String>,
}

/// A typed block of post text (title, description or body content).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentObject {
    #[serde(rename = "type")]
    pub content_type: Option<String>,
    pub value: Option<String>,
}

impl ContentObject {
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            content_type: Some("text".to_string()),
            value: Some(value.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostUrl {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub url_type: Option<String>,
    pub href: Option<String>,
    pub hreflang: Option<String>,
    pub rel: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostPerson {
    pub name: Option<String>,
    pub email: Option<String>,
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostEnclosure {
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub enclosure_type: Option<String>,
    pub length: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaThumbnail {
    pub url: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Vec<String>,
    pub thumbnails: Vec<MediaThumbnail>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaContent {
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    pub medium: Option<String>,
    pub file_size: Option<u64>,
    pub duration: Option<u64>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostMedia {
    pub metadata: Option<MediaMetadata>,
    pub contents: Vec<MediaContent>,
}

/// iTunes podcast extension fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostITunes {
    pub author: Option<String>,
    pub subtitle: Option<String>,
    pub summary: Option<String>,
    pub image_uri: Option<String>,
    pub keywords: Vec<String>,
    pub explicit: bool,
    pub duration: Option<u64>,
    pub episode: Option<u32>,
    pub season: Option<u32>,
    pub episode_type: Option<String>,
    pub close_captioned: bool,
    pub order: Option<u32>,
}

/// A normalized post ready for publication.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StagingPost {
    pub queue_id: FeedKey,
    pub title: Option<ContentObject>,
    pub description: Option<ContentObject>,
    pub contents: Vec<ContentObject>,
    pub media: Option<PostMedia>,
    pub itunes: Option<PostITunes>,
    pub url: Option<String>,
    pub urls: Vec<PostUrl>,
    pub image_url: Option<String>,
    pub comment: Option<String>,
    pub rights: Option<String>,
    pub contributors: Vec<PostPerson>,
    pub authors: Vec<PostPerson>,
    pub categories: Vec<String>,
    pub enclosures: Vec<PostEnclosure>,
    pub publish_timestamp: Option<DateTime<Utc>>,
    pub expiration_timestamp: Option<DateTime<Utc>>,
    pub last_updated_timestamp: Option<DateTime<Utc>>,
}

/// Preview of one feed: the feed key and its single-line payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPreview {
    pub feed_key: FeedKey,
    pub payload: String,
}

impl FeedPreview {
    pub fn new(feed_key: FeedKey, payload: String) -> Self {
        Self { feed_key, payload }
    }
}

/// Outcome of one publisher's attempt at one feed.
#[derive(Debug)]
pub struct PubResult {
    pub publisher_id: String,
    pub urls: Vec<String>,
    pub errors: Vec<PublishError>,
    pub pub_date: DateTime<Utc>,
}

impl PubResult {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Results keyed by publisher id so several publishers can be merged.
pub type PubResults = HashMap<String, PubResult>;
