use crate::core::date_format::format_medium;
use crate::core::presence::non_blank;
use crate::core::url_template::UrlTemplates;
use crate::domain::model::FeedDefinition;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

const IDENT_FIELD_NAME: &str = "ident";
const TITLE_FIELD_NAME: &str = "title";
const DESCRIPTION_FIELD_NAME: &str = "description";
const GENERATOR_FIELD_NAME: &str = "generator";
const COPYRIGHT_FIELD_NAME: &str = "copyright";
const LANGUAGE_FIELD_NAME: &str = "language";
const PUB_DATE_FIELD_NAME: &str = "pubDate";
const URL_FIELD_NAME: &str = "url";
const IMG_URL_FIELD_NAME: &str = "imgUrl";

/// Builds the `feed` object of a payload.
#[derive(Debug, Clone)]
pub struct FeedObjectBuilder {
    templates: UrlTemplates,
}

impl FeedObjectBuilder {
    pub fn new(templates: UrlTemplates) -> Self {
        Self { templates }
    }

    pub fn templates(&self) -> &UrlTemplates {
        &self.templates
    }

    pub fn build_feed_object(&self, definition: &FeedDefinition, pub_date: &DateTime<Utc>) -> Value {
        let mut feed = Map::new();

        feed.insert(IDENT_FIELD_NAME.to_string(), Value::from(definition.ident.as_str()));

        let optional_text = [
            (TITLE_FIELD_NAME, definition.title.as_ref()),
            (DESCRIPTION_FIELD_NAME, definition.description.as_ref()),
            (GENERATOR_FIELD_NAME, definition.generator.as_ref()),
            (COPYRIGHT_FIELD_NAME, definition.copyright.as_ref()),
            (LANGUAGE_FIELD_NAME, definition.language.as_ref()),
        ];
        for (name, value) in optional_text {
            if let Some(text) = non_blank(value) {
                feed.insert(name.to_string(), Value::from(text));
            }
        }

        feed.insert(PUB_DATE_FIELD_NAME.to_string(), Value::from(format_medium(pub_date)));

        feed.insert(
            URL_FIELD_NAME.to_string(),
            Value::from(self.templates.channel_link(&definition.transport_ident)),
        );

        if let Some(image_ident) = non_blank(definition.image_transport_ident.as_ref()) {
            feed.insert(
                IMG_URL_FIELD_NAME.to_string(),
                Value::from(self.templates.channel_image_url(image_ident)),
            );
        }

        Value::Object(feed)
    }
}
