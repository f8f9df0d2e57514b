use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about)]
/// Pull the "coming soon" slice of the Internet Archive feature-film
/// catalog into a static JSON file
pub struct Args {
    /// Advanced-search endpoint
    #[arg(default_value = "https://archive.org/advancedsearch.php")]
    #[arg(long)]
    pub endpoint: String,

    /// Rows to request from the search API
    #[arg(default_value_t = 550)]
    #[arg(long)]
    pub rows: u32,

    /// Output file
    #[arg(default_value = "src/data/coming_soon.json")]
    #[arg(long)]
    pub output: PathBuf,
}
