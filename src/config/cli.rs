use crate::core::PubFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extensions, validate_non_empty_string, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "feed-json-publisher")]
#[command(about = "Render feeds to JSON, publish them or preview them")]
pub struct CliConfig {
    #[arg(long, default_value = "publisher.toml")]
    pub config: String,

    #[arg(long, help = "Override the output directory from the config file")]
    pub output_path: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Render one feed and write it to the output directory
    Publish {
        #[arg(long)]
        definitions: String,
        #[arg(long)]
        posts: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        feed_ident: String,
    },
    /// Print a single-line preview for every feed found in the posts file
    Preview {
        #[arg(long)]
        definitions: String,
        #[arg(long)]
        posts: String,
        #[arg(long)]
        username: String,
        #[arg(long, default_value = "JSON")]
        format: PubFormat,
    },
}

impl Command {
    pub fn input_files(&self) -> [&str; 2] {
        match self {
            Command::Publish {
                definitions, posts, ..
            }
            | Command::Preview {
                definitions, posts, ..
            } => [definitions.as_str(), posts.as_str()],
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_file_extensions("config", &[self.config.as_str()], &["toml"])?;
        validate_file_extensions("inputs", &self.command.input_files(), &["json"])?;
        match &self.command {
            Command::Publish {
                username,
                feed_ident,
                ..
            } => {
                validate_non_empty_string("username", username)?;
                validate_non_empty_string("feed_ident", feed_ident)?;
            }
            Command::Preview { username, .. } => {
                validate_non_empty_string("username", username)?;
            }
        }
        Ok(())
    }
}
