use crate::core::date_format::format_medium;
use crate::core::presence::{include_collection, non_blank};
use crate::domain::model::{ContentObject, StagingPost};
use crate::utils::error::Result;
use serde::Serialize;
use serde_json::{Map, Value};

const POST_TITLE_FIELD_NAME: &str = "postTitle";
const POST_DESC_FIELD_NAME: &str = "postDesc";
const POST_CONTENTS_FIELD_NAME: &str = "postContents";
const POST_MEDIA_FIELD_NAME: &str = "postMedia";
const POST_ITUNES_FIELD_NAME: &str = "postITunes";
const POST_URL_FIELD_NAME: &str = "postUrl";
const POST_URLS_FIELD_NAME: &str = "postUrls";
const POST_IMG_URL_FIELD_NAME: &str = "postImgUrl";
const POST_COMMENT_FIELD_NAME: &str = "postComment";
const POST_RIGHTS_FIELD_NAME: &str = "postRights";
const CONTRIBUTORS_FIELD_NAME: &str = "contributors";
const AUTHORS_FIELD_NAME: &str = "authors";
const POST_CATEGORIES_FIELD_NAME: &str = "postCategories";
const PUBLISH_TIMESTAMP_FIELD_NAME: &str = "publishTimestamp";
const EXPIRATION_TIMESTAMP_FIELD_NAME: &str = "expirationTimestamp";
const LAST_UPDATED_TIMESTAMP_FIELD_NAME: &str = "lastUpdatedTimestamp";
const ENCLOSURES_FIELD_NAME: &str = "enclosures";

/// Builds the `posts` array, one object per post, in input order.
///
/// Every post is represented. The only error source is `serde_json` encoding
/// a nested object, which the derived models in `domain::model` never
/// trigger; it surfaces as an assembly error rather than a dropped post.
pub fn build_posts_array(posts: &[&StagingPost]) -> Result<Value> {
    posts
        .iter()
        .map(|post| build_post_object(post))
        .collect::<Result<Vec<_>>>()
        .map(Value::Array)
}

fn build_post_object(post: &StagingPost) -> Result<Value> {
    let mut obj = Map::new();

    put_text(&mut obj, POST_TITLE_FIELD_NAME, content_value(post.title.as_ref()));
    put_text(&mut obj, POST_DESC_FIELD_NAME, content_value(post.description.as_ref()));
    put_list(&mut obj, POST_CONTENTS_FIELD_NAME, &post.contents)?;
    put_object(&mut obj, POST_MEDIA_FIELD_NAME, post.media.as_ref())?;
    put_object(&mut obj, POST_ITUNES_FIELD_NAME, post.itunes.as_ref())?;

    // consumers deduplicate on this key, so it is written even when absent
    obj.insert(
        POST_URL_FIELD_NAME.to_string(),
        post.url.clone().map(Value::String).unwrap_or(Value::Null),
    );
    put_list(&mut obj, POST_URLS_FIELD_NAME, &post.urls)?;
    put_text(&mut obj, POST_IMG_URL_FIELD_NAME, non_blank(post.image_url.as_ref()));
    put_text(&mut obj, POST_COMMENT_FIELD_NAME, non_blank(post.comment.as_ref()));
    put_text(&mut obj, POST_RIGHTS_FIELD_NAME, non_blank(post.rights.as_ref()));
    put_list(&mut obj, CONTRIBUTORS_FIELD_NAME, &post.contributors)?;
    put_list(&mut obj, AUTHORS_FIELD_NAME, &post.authors)?;
    put_list(&mut obj, POST_CATEGORIES_FIELD_NAME, &post.categories)?;

    obj.insert(
        PUBLISH_TIMESTAMP_FIELD_NAME.to_string(),
        post.publish_timestamp
            .as_ref()
            .map(|ts| Value::String(format_medium(ts)))
            .unwrap_or(Value::Null),
    );
    if let Some(ts) = &post.expiration_timestamp {
        obj.insert(
            EXPIRATION_TIMESTAMP_FIELD_NAME.to_string(),
            Value::String(format_medium(ts)),
        );
    }
    if let Some(ts) = &post.last_updated_timestamp {
        obj.insert(
            LAST_UPDATED_TIMESTAMP_FIELD_NAME.to_string(),
            Value::String(format_medium(ts)),
        );
    }
    put_list(&mut obj, ENCLOSURES_FIELD_NAME, &post.enclosures)?;

    Ok(Value::Object(obj))
}

fn content_value(content: Option<&ContentObject>) -> Option<&str> {
    content.and_then(|c| non_blank(c.value.as_ref()))
}

fn put_text(obj: &mut Map<String, Value>, name: &str, value: Option<&str>) {
    if let Some(text) = value {
        obj.insert(name.to_string(), Value::from(text));
    }
}

fn put_list<T: Serialize>(obj: &mut Map<String, Value>, name: &str, values: &[T]) -> Result<()> {
    if include_collection(values) {
        obj.insert(name.to_string(), serde_json::to_value(values)?);
    }
    Ok(())
}

fn put_object<T: Serialize>(obj: &mut Map<String, Value>, name: &str, value: Option<&T>) -> Result<()> {
    if let Some(v) = value {
        obj.insert(name.to_string(), serde_json::to_value(v)?);
    }
    Ok(())
}
