use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::answer::{CategoryAxis, SourceAxis};
use crate::config::{DEFAULT_USERNAME, SOURCE_URL};

#[derive(Parser, Debug)]
#[command(
    name = "casualties",
    version,
    about = "Extract and query the Total casualties table of a saved Wikipedia page",
    after_help = format!("Source page: {SOURCE_URL}")
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Extract(ExtractArgs),
    Query(QueryArgs),
    Chat(ChatArgs),
}

#[derive(Args, Debug, Clone)]
pub struct DocumentArgs {
    /// Raw page HTML; `-` reads stdin.
    #[arg(long)]
    pub document: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub input: DocumentArgs,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long)]
    pub report_path: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    #[command(flatten)]
    pub input: DocumentArgs,

    #[arg(long, value_enum)]
    pub data: CategoryAxis,

    #[arg(long, value_enum, default_value_t = SourceAxis::Neutral)]
    pub source: SourceAxis,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ChatArgs {
    #[command(flatten)]
    pub input: DocumentArgs,

    #[arg(long, default_value = DEFAULT_USERNAME)]
    pub username: String,
}
