use anyhow::{bail, Context};
use clap::Parser;
use feed_json_publisher::config::{Command, LogFormat};
use feed_json_publisher::utils::{logger, validation::Validate};
use feed_json_publisher::{
    CliConfig, FeedPublisher, FileDefinitionLookup, JsonPayloadBuilder, LocalFeedStore,
    PublishEngine, PublisherConfig, StagingPost,
};

fn load_posts(path: &str) -> anyhow::Result<Vec<StagingPost>> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading posts from {}", path))?;
    serde_json::from_str(&content).with_context(|| format!("parsing posts in {}", path))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();
    let config = PublisherConfig::from_file(&cli.config)
        .with_context(|| format!("loading {}", cli.config))?;

    match config.log_format() {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }
    tracing::info!("Starting feed-json-publisher");

    // 驗證配置
    if let Err(e) = cli.validate().and_then(|_| config.validate()) {
        tracing::error!("❌ Configuration validation failed: {} ({:?})", e, e.category());
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let templates = config.url_templates()?;
    let output_path = cli
        .output_path
        .clone()
        .unwrap_or_else(|| config.output_path().to_string());

    let [definitions_path, posts_path] = cli.command.input_files();
    let lookup = FileDefinitionLookup::from_file(definitions_path)?;
    let posts = load_posts(posts_path)?;

    match &cli.command {
        Command::Publish {
            username,
            feed_ident,
            ..
        } => {
            let Some(definition) = lookup.find_by_ident(username, feed_ident).cloned() else {
                bail!("no feed definition {} for user {}", feed_ident, username);
            };
            let feed_posts: Vec<StagingPost> = posts
                .into_iter()
                .filter(|p| p.queue_id == Some(definition.id))
                .collect();

            let publisher = FeedPublisher::new(
                JsonPayloadBuilder::new(templates),
                lookup,
                LocalFeedStore::new(output_path),
            );
            let engine = PublishEngine::new().with_publisher(Box::new(publisher));
            let results = engine
                .publish_all(&definition, &feed_posts, chrono::Utc::now())
                .await;

            let mut failed = false;
            for (publisher_id, result) in &results {
                for url in &result.urls {
                    println!("✅ [{}] {}", publisher_id, url);
                }
                for error in &result.errors {
                    failed = true;
                    eprintln!("❌ [{}] {}", publisher_id, error);
                }
            }
            if failed {
                std::process::exit(2);
            }
        }
        Command::Preview {
            username, format, ..
        } => {
            let publisher = FeedPublisher::new(
                JsonPayloadBuilder::new(templates),
                lookup,
                LocalFeedStore::new(output_path),
            );
            let engine = PublishEngine::new().with_publisher(Box::new(publisher));
            let previews = engine.preview_all(username, &posts, *format).await;
            if previews.is_empty() {
                tracing::warn!("No previews produced for format {}", format);
            }
            for preview in previews {
                let key = preview
                    .feed_key
                    .map(|k| k.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!("{}\t{}", key, preview.payload);
            }
        }
    }

    Ok(())
}
