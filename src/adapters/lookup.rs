use crate::core::{FeedDefinition, FeedDefinitionLookup};
use crate::domain::model::FeedKey;
use crate::utils::error::{PublishError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use std::path::Path;

/// Feed definitions held in memory, usually loaded from a JSON array file.
#[derive(Debug, Clone, Default)]
pub struct FileDefinitionLookup {
    definitions: Vec<FeedDefinition>,
}

impl FileDefinitionLookup {
    pub fn new(definitions: Vec<FeedDefinition>) -> Self {
        Self { definitions }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let definitions: Vec<FeedDefinition> =
            serde_json::from_str(&content).map_err(|e| PublishError::ConfigError {
                message: format!(
                    "Unable to parse feed definitions in {}: {}",
                    path.as_ref().display(),
                    e
                ),
            })?;
        for definition in &definitions {
            definition.validate()?;
        }
        Ok(Self::new(definitions))
    }

    pub fn find_by_ident(&self, username: &str, ident: &str) -> Option<&FeedDefinition> {
        self.definitions
            .iter()
            .find(|d| d.username == username && d.ident == ident)
    }
}

impl FeedDefinitionLookup for FileDefinitionLookup {
    async fn find_by_feed_id(&self, username: &str, feed_key: FeedKey) -> Result<Option<FeedDefinition>> {
        let Some(id) = feed_key else {
            return Ok(None);
        };
        Ok(self
            .definitions
            .iter()
            .find(|d| d.id == id && d.username == username)
            .cloned())
    }
}

impl Validate for FeedDefinition {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("feed.ident", &self.ident)?;
        validate_non_empty_string("feed.transportIdent", &self.transport_ident)?;
        Ok(())
    }
}
