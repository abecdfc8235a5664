mod common;

use chrono::{DateTime, Utc};
use common::{definition, json_builder, post, publish_date, MockLookup, MockStore};
use feed_json_publisher::{
    FeedDefinition, FeedPublisher, PayloadBuilder, PubFormat, PublishEngine, Result,
    StagingPost, UrlTemplates,
};

/// Minimal second format so merged results carry two publisher ids.
struct RssStubBuilder {
    templates: UrlTemplates,
}

impl PayloadBuilder for RssStubBuilder {
    fn publisher_id(&self) -> &'static str {
        "RSS"
    }

    fn format(&self) -> PubFormat {
        PubFormat::Rss
    }

    fn templates(&self) -> &UrlTemplates {
        &self.templates
    }

    fn assemble(
        &self,
        definition: &FeedDefinition,
        posts: &[&StagingPost],
        _pub_date: &DateTime<Utc>,
    ) -> Result<String> {
        Ok(format!(
            "<rss>\n<channel>{}</channel>\n<items>{}</items>\n</rss>",
            definition.ident,
            posts.len()
        ))
    }
}

fn engine(json_store: MockStore, rss_store: MockStore) -> PublishEngine {
    let lookup = MockLookup::new(vec![definition(1, "f1", "t1")]);
    let rss = RssStubBuilder {
        templates: UrlTemplates::parse("https://rss/%s", "https://img/%s").unwrap(),
    };
    PublishEngine::new()
        .with_publisher(Box::new(FeedPublisher::new(
            json_builder(),
            lookup.clone(),
            json_store,
        )))
        .with_publisher(Box::new(FeedPublisher::new(rss, lookup, rss_store)))
}

#[tokio::test]
async fn test_results_are_merged_by_publisher_id() {
    let engine = engine(MockStore::new(), MockStore::failing());
    assert_eq!(engine.publisher_ids(), vec!["JSON", "RSS"]);

    let results = engine
        .publish_all(&definition(1, "f1", "t1"), &[post(Some(1), "http://a")], publish_date())
        .await;

    assert_eq!(results.len(), 2);
    assert!(results["JSON"].is_success());
    assert_eq!(results["JSON"].urls[0], "https://x/t1");
    // one format failing leaves the other untouched
    assert_eq!(results["RSS"].errors.len(), 1);
    assert!(results["RSS"].urls.is_empty());
}

#[tokio::test]
async fn test_preview_all_only_uses_matching_publishers() {
    let engine = engine(MockStore::new(), MockStore::new());
    let posts = vec![post(Some(1), "http://a")];

    let json = engine.preview_all("alice", &posts, PubFormat::Json).await;
    assert_eq!(json.len(), 1);
    assert!(json[0].payload.starts_with('{'));

    let rss = engine.preview_all("alice", &posts, PubFormat::Rss).await;
    assert_eq!(rss.len(), 1);
    assert_eq!(rss[0].payload, "<rss><channel>f1</channel><items>1</items></rss>");

    assert!(engine
        .preview_all("alice", &posts, PubFormat::Atom)
        .await
        .is_empty());
}
