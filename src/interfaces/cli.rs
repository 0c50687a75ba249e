use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "agribot")]
#[command(about = "Multilingual farming assistant backend.")]
#[command(version)]
pub struct Cli {
    /// Path to a config file (defaults to the user config directory)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Port to listen on
    #[arg(short = 'p', long)]
    pub port: Option<u16>,

    /// Include intermediate pipeline values in every response
    #[arg(long)]
    pub debug: bool,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Show effective configuration and exit
    #[arg(long)]
    pub status: bool,
}
