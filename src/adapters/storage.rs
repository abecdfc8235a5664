use crate::core::{PubFormat, RenderedFeedStore};
use crate::utils::error::{PublishError, Result};
use std::path::{Path, PathBuf};

/// Stores rendered feeds as files named after their transport identifier.
#[derive(Debug, Clone)]
pub struct LocalFeedStore {
    base_path: String,
}

impl LocalFeedStore {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    pub fn path_for(&self, transport_ident: &str, format: PubFormat) -> Result<PathBuf> {
        if transport_ident.trim().is_empty()
            || transport_ident.contains(['/', '\\', '\0'])
            || transport_ident.starts_with('.')
        {
            return Err(PublishError::persistence(
                transport_ident,
                "transport identifier is not a valid file name",
            ));
        }
        let file_name = format!("{}.{}", transport_ident, extension(format));
        Ok(Path::new(&self.base_path).join(file_name))
    }
}

fn extension(format: PubFormat) -> &'static str {
    match format {
        PubFormat::Json => "json",
        PubFormat::Rss => "rss.xml",
        PubFormat::Atom => "atom.xml",
    }
}

fn staging_path(target: &Path) -> PathBuf {
    let mut name = target.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    target.with_file_name(name)
}

impl RenderedFeedStore for LocalFeedStore {
    async fn put_feed_at_transport_ident(
        &self,
        transport_ident: &str,
        format: PubFormat,
        document: &str,
    ) -> Result<()> {
        let full_path = self.path_for(transport_ident, format)?;

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| PublishError::persistence(transport_ident, e.to_string()))?;
        }

        // the target is only ever replaced by a complete document
        let tmp_path = staging_path(&full_path);
        if let Err(e) = tokio::fs::write(&tmp_path, document).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(PublishError::persistence(transport_ident, e.to_string()));
        }
        if let Err(e) = tokio::fs::rename(&tmp_path, &full_path).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(PublishError::persistence(transport_ident, e.to_string()));
        }
        tracing::debug!("Wrote {}", full_path.display());
        Ok(())
    }
}
