use crate::domain::model::{FeedDefinition, FeedKey, FeedPreview, PubFormat, PubResults, StagingPost};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Write side of the rendered-document store.
pub trait RenderedFeedStore: Send + Sync {
    fn put_feed_at_transport_ident(
        &self,
        transport_ident: &str,
        format: PubFormat,
        document: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Resolves feed definitions owned by a user. `Ok(None)` is a normal miss.
pub trait FeedDefinitionLookup: Send + Sync {
    fn find_by_feed_id(
        &self,
        username: &str,
        feed_key: FeedKey,
    ) -> impl std::future::Future<Output = Result<Option<FeedDefinition>>> + Send;
}

/// One output format plugged into the publishing framework.
#[async_trait]
pub trait Publisher: Send + Sync {
    fn publisher_id(&self) -> &str;

    fn supports_format(&self, format: PubFormat) -> bool;

    /// Never fails: errors are captured in the returned result.
    async fn publish_feed(
        &self,
        definition: &FeedDefinition,
        posts: &[StagingPost],
        pub_date: DateTime<Utc>,
    ) -> PubResults;

    async fn do_preview(
        &self,
        username: &str,
        posts: &[StagingPost],
        format: PubFormat,
    ) -> Vec<FeedPreview>;
}
