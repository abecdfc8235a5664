use crate::domain::model::{FeedDefinition, FeedPreview, PubFormat, PubResults, StagingPost};
use crate::domain::ports::Publisher;
use chrono::{DateTime, Utc};

/// Runs a set of format publishers over the same feed and merges their results.
#[derive(Default)]
pub struct PublishEngine {
    publishers: Vec<Box<dyn Publisher>>,
}

impl PublishEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_publisher(mut self, publisher: Box<dyn Publisher>) -> Self {
        self.publishers.push(publisher);
        self
    }

    pub fn publisher_ids(&self) -> Vec<&str> {
        self.publishers.iter().map(|p| p.publisher_id()).collect()
    }

    pub async fn publish_all(
        &self,
        definition: &FeedDefinition,
        posts: &[StagingPost],
        pub_date: DateTime<Utc>,
    ) -> PubResults {
        let mut results = PubResults::new();
        for publisher in &self.publishers {
            results.extend(publisher.publish_feed(definition, posts, pub_date).await);
        }
        let failed = results.values().filter(|r| !r.is_success()).count();
        tracing::info!(
            "Publishing feed {} finished: {} publishers, {} failed",
            definition.ident,
            results.len(),
            failed
        );
        results
    }

    pub async fn preview_all(
        &self,
        username: &str,
        posts: &[StagingPost],
        format: PubFormat,
    ) -> Vec<FeedPreview> {
        let mut previews = Vec::new();
        for publisher in self.publishers.iter().filter(|p| p.supports_format(format)) {
            previews.extend(publisher.do_preview(username, posts, format).await);
        }
        previews
    }
}
