use anyhow::{Context, Result};
use clap::Parser;
use coming_soon_ingest::args::Args;
use coming_soon_ingest::run;
use coming_soon_ingest::transform::{WINDOW_END, WINDOW_START};

#[tokio::main]
pub async fn main() -> Result<()> {
    let args = Args::parse();
    let count = run(&args).await.context("ingestion failed")?;

    if count == WINDOW_END - WINDOW_START {
        println!("Saved {} upcoming movies to {}", count, args.output.display());
    } else {
        println!(
            "Saved {} upcoming movies to {} (search returned fewer than {} rows)",
            count,
            args.output.display(),
            WINDOW_END
        );
    }
    Ok(())
}
