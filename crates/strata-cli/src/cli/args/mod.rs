use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "strata",
    version,
    about = "Code archaeology for old file collections: keyword buckets, filename token counts, one report"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scan a corpus, print the summary and write the report
    Analyze(AnalyzeArgs),
    /// Print one corpus file with the emojis it contains
    Sample(SampleArgs),
    /// Show the dominant theme label for filenames
    Theme(ThemeArgs),
    Version,
}

#[derive(clap::Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// YAML file with any of: corpus_root, output, extension, top_n, stamp
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory holding the files to analyze
    #[arg(long)]
    pub corpus: Option<PathBuf>,

    /// Report path (.yaml/.yml writes YAML, anything else JSON)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// File extension to include, without the dot [default: py]
    #[arg(long)]
    pub extension: Option<String>,

    /// Number of filename keywords kept in the report [default: 20]
    #[arg(long)]
    pub top: Option<usize>,

    /// Embed a generated_at timestamp in the report
    #[arg(long)]
    pub stamp: bool,

    /// Only print the saved path
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct SampleArgs {
    #[arg(long)]
    pub corpus: PathBuf,

    #[arg(long, default_value = strata_core::config::DEFAULT_EXTENSION)]
    pub extension: String,

    /// File name, with or without extension
    pub name: String,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ThemeArgs {
    /// Only this suffix is stripped from each name
    #[arg(long, default_value = strata_core::config::DEFAULT_EXTENSION)]
    pub extension: String,

    #[arg(required = true)]
    pub names: Vec<String>,
}
