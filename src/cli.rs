use crate::config;
use crate::engine::{Engine, EngineOptions};
use crate::services::fetch::ReqwestFetcher;
use crate::services::ledger::Ledger;
use crate::services::log::ActivityLogger;
use crate::services::resolve::StdinResolver;
use crate::services::vocab::Vocabulary;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "larder", version, about = "Scrape recipe pages into a CSV ledger")]
pub struct Cli {
    /// Scrape a single recipe link
    #[arg(long, value_name = "URL", conflicts_with = "slides")]
    link: Option<String>,

    /// Scrape a slideshow page and every recipe it links to
    #[arg(long, value_name = "URL")]
    slides: Option<String>,

    /// Collapse repeated ingredient tokens within one recipe
    #[arg(long)]
    strict: bool,

    /// Config file overriding selectors and data file paths
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref())?;

    let vocab = Vocabulary::load(&cfg.paths.vocabulary)?;
    let ledger = Ledger::open(&cfg.paths)?;
    let logger = ActivityLogger::new()?;
    let fetcher = ReqwestFetcher::new()?;
    let mut resolver = StdinResolver::new();

    let mut engine = Engine::new(
        &fetcher,
        &mut resolver,
        &logger,
        &cfg,
        vocab,
        ledger,
        EngineOptions { strict: cli.strict },
    );

    match (&cli.link, &cli.slides) {
        (Some(url), _) => {
            engine.scrape_link(url)?;
        }
        (None, Some(url)) => {
            let summary = engine.scrape_slides(url)?;
            println!(
                "Collected {} recipe(s) ({} duplicate, {} unmatched, {} failed)",
                summary.collected, summary.duplicates, summary.unmatched, summary.failed
            );
        }
        // no mode flag: nothing to scrape, the vocabulary still round-trips
        (None, None) => {}
    }

    engine.finish()?;
    Ok(())
}
