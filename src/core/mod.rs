pub mod date_format;
pub mod engine;
pub mod feed_object;
pub mod grouping;
pub mod payload;
pub mod posts_array;
pub mod presence;
pub mod publisher;
pub mod url_template;

pub use crate::domain::model::{FeedDefinition, FeedPreview, PubFormat, PubResult, StagingPost};
pub use crate::domain::ports::{FeedDefinitionLookup, Publisher, RenderedFeedStore};
pub use crate::utils::error::Result;
