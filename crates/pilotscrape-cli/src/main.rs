use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod crawl;
mod output;

#[derive(Debug, Parser)]
#[command(name = "pilotscrape")]
#[command(about = "Collects review records from paginated review listings into CSV")]
struct Cli {
    /// CSV file listing the target site slugs to crawl (column `c_site`).
    #[arg(long, default_value = "config/targets.csv")]
    input: PathBuf,

    /// Destination CSV for the normalized review records.
    #[arg(long, default_value = "reviews.csv")]
    output: PathBuf,

    /// Crawl only this target slug from the input file.
    #[arg(long)]
    target: Option<String>,

    /// Print what would be crawled without performing any requests.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = pilotscrape_core::load_app_config_from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_level)?)
        .init();

    let cli = Cli::parse();

    let all_targets = pilotscrape_core::load_targets(&cli.input)?;
    let targets = crawl::select_targets(all_targets, cli.target.as_deref())?;

    if cli.dry_run {
        let slugs: Vec<&str> = targets.iter().map(|t| t.slug.as_str()).collect();
        println!(
            "dry-run: would crawl {} targets: [{}]",
            targets.len(),
            slugs.join(", ")
        );
        return Ok(());
    }

    let outcome = crawl::run_crawl(&config, &targets).await?;

    output::write_reviews(&cli.output, &outcome.reviews)?;
    println!(
        "wrote {} review records for {} targets to {}",
        outcome.reviews.len(),
        targets.len() - outcome.failures.len(),
        cli.output.display()
    );

    if !outcome.failures.is_empty() {
        for failure in &outcome.failures {
            eprintln!("error: target {} failed: {}", failure.slug, failure.reason);
        }
        anyhow::bail!(
            "{} of {} targets failed; partial output was written",
            outcome.failures.len(),
            targets.len()
        );
    }

    Ok(())
}
