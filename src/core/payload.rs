use crate::core::feed_object::FeedObjectBuilder;
use crate::core::posts_array::build_posts_array;
use crate::core::url_template::UrlTemplates;
use crate::domain::model::{FeedDefinition, PubFormat, StagingPost};
use crate::utils::error::{PublishError, Result};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// Renders one feed document in a single output format.
///
/// Publish and preview orchestration is written against this trait, so a
/// new format only needs a builder.
pub trait PayloadBuilder: Send + Sync {
    fn publisher_id(&self) -> &'static str;

    fn format(&self) -> PubFormat;

    /// Link templates used both inside the document and for the public URLs
    /// reported after a publish.
    fn templates(&self) -> &UrlTemplates;

    fn assemble(
        &self,
        definition: &FeedDefinition,
        posts: &[&StagingPost],
        pub_date: &DateTime<Utc>,
    ) -> Result<String>;
}

#[derive(Debug, Clone)]
pub struct JsonPayloadBuilder {
    feed_object_builder: FeedObjectBuilder,
}

impl JsonPayloadBuilder {
    pub fn new(templates: UrlTemplates) -> Self {
        Self {
            feed_object_builder: FeedObjectBuilder::new(templates),
        }
    }

    pub fn build_payload(
        &self,
        definition: &FeedDefinition,
        posts: &[&StagingPost],
        pub_date: &DateTime<Utc>,
    ) -> Result<Value> {
        let posts_array = build_posts_array(posts).map_err(|e| PublishError::AssemblyError {
            feed_ident: definition.ident.clone(),
            message: e.to_string(),
        })?;

        let mut payload = Map::new();
        payload.insert(
            "feed".to_string(),
            self.feed_object_builder.build_feed_object(definition, pub_date),
        );
        payload.insert("posts".to_string(), posts_array);
        Ok(Value::Object(payload))
    }
}

impl PayloadBuilder for JsonPayloadBuilder {
    fn publisher_id(&self) -> &'static str {
        "JSON"
    }

    fn format(&self) -> PubFormat {
        PubFormat::Json
    }

    fn templates(&self) -> &UrlTemplates {
        self.feed_object_builder.templates()
    }

    fn assemble(
        &self,
        definition: &FeedDefinition,
        posts: &[&StagingPost],
        pub_date: &DateTime<Utc>,
    ) -> Result<String> {
        let payload = self.build_payload(definition, posts, pub_date)?;
        tracing::debug!(
            "Assembled JSON payload for feed {} with {} posts",
            definition.ident,
            posts.len()
        );
        Ok(serde_json::to_string(&payload)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn builder() -> JsonPayloadBuilder {
        JsonPayloadBuilder::new(UrlTemplates::parse("https://x/%s", "https://img/%s").unwrap())
    }

    #[test]
    fn test_assemble_produces_feed_and_posts() {
        let def = FeedDefinition {
            id: 1,
            ident: "f1".to_string(),
            title: Some("T".to_string()),
            transport_ident: "t1".to_string(),
            username: "me".to_string(),
            ..Default::default()
        };
        let post = StagingPost {
            url: Some("http://p".to_string()),
            publish_timestamp: Some(Utc.with_ymd_and_hms(2024, 1, 5, 15, 4, 5).unwrap()),
            ..Default::default()
        };
        let date = Utc.with_ymd_and_hms(2024, 1, 6, 0, 0, 0).unwrap();

        let text = builder().assemble(&def, &[&post], &date).unwrap();
        let doc: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(doc["feed"]["ident"], "f1");
        assert_eq!(doc["feed"]["title"], "T");
        assert_eq!(doc["feed"]["url"], "https://x/t1");
        assert_eq!(doc["posts"][0]["postUrl"], "http://p");
        assert_eq!(doc["posts"][0]["publishTimestamp"], "Jan 5, 2024, 3:04:05 PM");
    }

    #[test]
    fn test_document_keys_follow_contract_order() {
        let def = FeedDefinition {
            ident: "f1".to_string(),
            transport_ident: "t1".to_string(),
            ..Default::default()
        };
        let date = Utc.with_ymd_and_hms(2024, 1, 6, 0, 0, 0).unwrap();

        let text = builder().assemble(&def, &[], &date).unwrap();

        assert!(text.starts_with(r#"{"feed":{"ident":"f1","pubDate":"#));
        assert!(text.ends_with(r#""url":"https://x/t1"},"posts":[]}"#));
    }

    #[test]
    fn test_json_builder_identity() {
        let b = builder();
        assert_eq!(b.publisher_id(), "JSON");
        assert_eq!(b.format(), PubFormat::Json);
    }
}
