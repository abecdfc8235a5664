pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{FileDefinitionLookup, LocalFeedStore};
pub use crate::config::PublisherConfig;
pub use crate::core::{
    engine::PublishEngine,
    payload::{JsonPayloadBuilder, PayloadBuilder},
    publisher::FeedPublisher,
    url_template::UrlTemplates,
};
pub use crate::domain::model::{
    ContentObject, FeedDefinition, FeedKey, FeedPreview, PubFormat, PubResult, PubResults,
    StagingPost,
};
pub use crate::domain::ports::{FeedDefinitionLookup, Publisher, RenderedFeedStore};
pub use crate::utils::error::{PublishError, Result};
