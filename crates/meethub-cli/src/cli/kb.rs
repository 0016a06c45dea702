use clap::{Args, Subcommand};
use meethub_core::models::SourceType;

use super::parsers::{parse_category, parse_source_type};

#[derive(Debug, Args)]
pub struct KbArgs {
    #[command(subcommand)]
    pub command: KbCommand,
}

#[derive(Debug, Subcommand)]
pub enum KbCommand {
    Add {
        #[arg(long)]
        title: String,
        #[arg(long, value_parser = parse_category)]
        category: String,
        #[arg(long)]
        url: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Comma-separated tags.
        #[arg(long, default_value = "")]
        tags: String,
        #[arg(long, default_value = "internal", value_parser = parse_source_type)]
        source: SourceType,
    },
    /// List articles ordered by category and title.
    List,
    /// Case-insensitive keyword search over title, description, tags and category.
    Search {
        #[arg(allow_hyphen_values = true)]
        query: String,
    },
    Update {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long, value_parser = parse_category)]
        category: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        tags: Option<String>,
        #[arg(long, value_parser = parse_source_type)]
        source: Option<SourceType>,
    },
    Delete {
        id: i64,
    },
    /// Article counts per category.
    Categories,
}
