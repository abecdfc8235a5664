#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use feed_json_publisher::core::payload::PayloadBuilder;
use feed_json_publisher::domain::model::FeedKey;
use feed_json_publisher::{
    FeedDefinition, FeedDefinitionLookup, JsonPayloadBuilder, PubFormat, PublishError,
    RenderedFeedStore, Result, StagingPost, UrlTemplates,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone, Default)]
pub struct MockStore {
    files: Arc<Mutex<HashMap<String, String>>>,
    attempts: Arc<Mutex<usize>>,
    fail: bool,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub async fn get(&self, transport_ident: &str) -> Option<String> {
        self.files.lock().await.get(transport_ident).cloned()
    }

    pub async fn attempts(&self) -> usize {
        *self.attempts.lock().await
    }
}

impl RenderedFeedStore for MockStore {
    async fn put_feed_at_transport_ident(
        &self,
        transport_ident: &str,
        _format: PubFormat,
        document: &str,
    ) -> Result<()> {
        *self.attempts.lock().await += 1;
        if self.fail {
            return Err(PublishError::persistence(transport_ident, "store unavailable"));
        }
        self.files
            .lock()
            .await
            .insert(transport_ident.to_string(), document.to_string());
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MockLookup {
    definitions: Vec<FeedDefinition>,
    broken_ids: Vec<i64>,
}

impl MockLookup {
    pub fn new(definitions: Vec<FeedDefinition>) -> Self {
        Self {
            definitions,
            broken_ids: Vec::new(),
        }
    }

    /// Lookups for these ids fail with an error instead of a miss.
    pub fn with_broken_ids(mut self, ids: Vec<i64>) -> Self {
        self.broken_ids = ids;
        self
    }
}

impl FeedDefinitionLookup for MockLookup {
    async fn find_by_feed_id(&self, username: &str, feed_key: FeedKey) -> Result<Option<FeedDefinition>> {
        if let Some(id) = feed_key {
            if self.broken_ids.contains(&id) {
                return Err(PublishError::lookup(format!("database down for {}", id)));
            }
        }
        Ok(self
            .definitions
            .iter()
            .find(|d| Some(d.id) == feed_key && d.username == username)
            .cloned())
    }
}

/// JSON builder that fails for one feed ident and pretty-prints the rest.
pub struct FlakyPrettyBuilder {
    inner: JsonPayloadBuilder,
    failing_ident: String,
}

impl FlakyPrettyBuilder {
    pub fn new(failing_ident: &str) -> Self {
        Self {
            inner: json_builder(),
            failing_ident: failing_ident.to_string(),
        }
    }
}

impl PayloadBuilder for FlakyPrettyBuilder {
    fn publisher_id(&self) -> &'static str {
        "JSON"
    }

    fn format(&self) -> PubFormat {
        PubFormat::Json
    }

    fn templates(&self) -> &UrlTemplates {
        self.inner.templates()
    }

    fn assemble(
        &self,
        definition: &FeedDefinition,
        posts: &[&StagingPost],
        pub_date: &DateTime<Utc>,
    ) -> Result<String> {
        if definition.ident == self.failing_ident {
            return Err(PublishError::AssemblyError {
                feed_ident: definition.ident.clone(),
                message: "broken feed".to_string(),
            });
        }
        let payload = self.inner.build_payload(definition, posts, pub_date)?;
        Ok(serde_json::to_string_pretty(&payload)?)
    }
}

pub fn json_builder() -> JsonPayloadBuilder {
    JsonPayloadBuilder::new(UrlTemplates::parse("https://x/%s", "https://img/%s").unwrap())
}

pub fn definition(id: i64, ident: &str, transport_ident: &str) -> FeedDefinition {
    FeedDefinition {
        id,
        ident: ident.to_string(),
        transport_ident: transport_ident.to_string(),
        username: "alice".to_string(),
        ..Default::default()
    }
}

pub fn post(queue_id: FeedKey, url: &str) -> StagingPost {
    StagingPost {
        queue_id,
        url: Some(url.to_string()),
        publish_timestamp: Some(publish_date()),
        ..Default::default()
    }
}

pub fn publish_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 5, 15, 4, 5).unwrap()
}
