use crate::core::grouping::group_by_feed;
use crate::core::payload::PayloadBuilder;
use crate::domain::model::{
    FeedDefinition, FeedKey, FeedPreview, PubFormat, PubResult, PubResults, StagingPost,
};
use crate::domain::ports::{FeedDefinitionLookup, Publisher, RenderedFeedStore};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Publishes and previews feeds in the format of its payload builder.
pub struct FeedPublisher<B, L, S> {
    builder: B,
    lookup: L,
    store: S,
}

impl<B, L, S> FeedPublisher<B, L, S>
where
    B: PayloadBuilder,
    L: FeedDefinitionLookup,
    S: RenderedFeedStore,
{
    pub fn new(builder: B, lookup: L, store: S) -> Self {
        tracing::info!(
            "{} publisher constructed at {}",
            builder.publisher_id(),
            Utc::now()
        );
        Self {
            builder,
            lookup,
            store,
        }
    }

    /// Renders and stores one feed. Exactly one store attempt is made; any
    /// failure is captured in the result and no URLs are reported.
    pub async fn publish(
        &self,
        definition: &FeedDefinition,
        posts: &[&StagingPost],
        pub_date: &DateTime<Utc>,
    ) -> PubResult {
        let publisher_id = self.builder.publisher_id();
        tracing::info!(
            "Deploying {} feed with ident={}",
            publisher_id,
            definition.ident
        );

        let mut urls = Vec::new();
        let mut errors = Vec::new();
        match self.render_and_store(definition, posts, pub_date).await {
            Ok(()) => {
                urls = self.public_urls(definition);
                tracing::info!(
                    "Published {} feed for feedIdent={}, transportIdent={}",
                    publisher_id,
                    definition.ident,
                    definition.transport_ident
                );
            }
            Err(e) => {
                tracing::error!(
                    "Unable to publish {} feed with ident={}: {}",
                    publisher_id,
                    definition.ident,
                    e
                );
                errors.push(e);
            }
        }

        PubResult {
            publisher_id: publisher_id.to_string(),
            urls,
            errors,
            pub_date: Utc::now(),
        }
    }

    /// Builds a single-line preview per feed found in `posts`.
    ///
    /// Groups whose definition cannot be resolved are skipped; a group that
    /// fails to render yields an empty payload.
    pub async fn preview(
        &self,
        username: &str,
        posts: &[StagingPost],
        format: PubFormat,
    ) -> Vec<FeedPreview> {
        if format != self.builder.format() {
            tracing::debug!(
                "{} publisher skipping preview for format {}",
                self.builder.publisher_id(),
                format
            );
            return Vec::new();
        }

        tracing::info!(
            "{} publisher has {} posts to preview at {}",
            self.builder.publisher_id(),
            posts.len(),
            Utc::now()
        );
        let groups = group_by_feed(posts);
        let mut previews = Vec::with_capacity(groups.len());
        for (feed_key, group) in groups {
            if let Some(preview) = self.preview_feed(username, feed_key, &group).await {
                previews.push(preview);
            }
        }
        tracing::info!(
            "{} publisher preview finished at {}",
            self.builder.publisher_id(),
            Utc::now()
        );
        previews
    }

    async fn preview_feed(
        &self,
        username: &str,
        feed_key: FeedKey,
        posts: &[&StagingPost],
    ) -> Option<FeedPreview> {
        let label = feed_label(feed_key);
        tracing::info!(
            "Previewing feed with id={}, format={}",
            label,
            self.builder.format()
        );

        let definition = match self.lookup.find_by_feed_id(username, feed_key).await {
            Ok(Some(definition)) => definition,
            Ok(None) => {
                tracing::warn!("Unable to locate feed definition with id={}", label);
                return None;
            }
            Err(e) => {
                tracing::warn!("Feed definition lookup failed for id={}: {}", label, e);
                return None;
            }
        };

        let payload = match self.builder.assemble(&definition, posts, &Utc::now()) {
            Ok(text) => strip_line_breaks(&text),
            Err(e) => {
                tracing::error!("Unable to render feed with id={}: {}", label, e);
                String::new()
            }
        };

        Some(FeedPreview::new(feed_key, payload))
    }

    async fn render_and_store(
        &self,
        definition: &FeedDefinition,
        posts: &[&StagingPost],
        pub_date: &DateTime<Utc>,
    ) -> Result<()> {
        let document = self.builder.assemble(definition, posts, pub_date)?;
        tracing::debug!(
            "Storing {} bytes at transportIdent={}",
            document.len(),
            definition.transport_ident
        );
        self.store
            .put_feed_at_transport_ident(
                &definition.transport_ident,
                self.builder.format(),
                &document,
            )
            .await
    }

    /// Transport URL followed by the user-identity URL (`username/ident`).
    fn public_urls(&self, definition: &FeedDefinition) -> Vec<String> {
        let templates = self.builder.templates();
        vec![
            templates.channel_link(&definition.transport_ident),
            templates.channel_link(&format!("{}/{}", definition.username, definition.ident)),
        ]
    }
}

#[async_trait]
impl<B, L, S> Publisher for FeedPublisher<B, L, S>
where
    B: PayloadBuilder,
    L: FeedDefinitionLookup,
    S: RenderedFeedStore,
{
    fn publisher_id(&self) -> &str {
        self.builder.publisher_id()
    }

    fn supports_format(&self, format: PubFormat) -> bool {
        format == self.builder.format()
    }

    async fn publish_feed(
        &self,
        definition: &FeedDefinition,
        posts: &[StagingPost],
        pub_date: DateTime<Utc>,
    ) -> PubResults {
        let posts: Vec<&StagingPost> = posts.iter().collect();
        let result = self.publish(definition, &posts, &pub_date).await;
        HashMap::from([(result.publisher_id.clone(), result)])
    }

    async fn do_preview(
        &self,
        username: &str,
        posts: &[StagingPost],
        format: PubFormat,
    ) -> Vec<FeedPreview> {
        self.preview(username, posts, format).await
    }
}

fn feed_label(feed_key: FeedKey) -> String {
    feed_key
        .map(|id| id.to_string())
        .unwrap_or_else(|| "(all)".to_string())
}

fn strip_line_breaks(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '\r' | '\n')).collect()
}
