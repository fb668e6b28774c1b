use crate::error::*;
use crate::normalize::normalize;
use crate::services::extract::{extract_recipe, extract_slide_links};
use crate::services::ledger::Ledger;
use crate::services::log::ActivityLogger;
use crate::services::vocab::Vocabulary;
use crate::types::*;
use url::Url;

pub trait Fetcher: Send + Sync {
    fn name(&self) -> &'static str;
    fn fetch(&self, url: &str, cfg: &FetchConfig) -> Result<String>;
}

/// The seam between normalization and the operator. Stdin in production,
/// scripted in tests and unattended runs.
pub trait Resolver {
    fn resolve(&mut self, line: &str) -> Result<Resolution>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EngineOptions {
    /// Collapse repeated tokens within one recipe's row. Off by default:
    /// historical rows kept per-recipe repeats, and existing files stay
    /// comparable.
    pub strict: bool,
}

/// The run driver. Owns the vocabulary and ledger for the duration of one
/// invocation; both are shared across every page of a slideshow so titles
/// seen earlier are not reprocessed and tokens learned early apply to later
/// pages.
pub struct Engine<'a> {
    fetcher: &'a dyn Fetcher,
    resolver: &'a mut dyn Resolver,
    logger: &'a ActivityLogger,
    cfg: &'a Config,
    opts: EngineOptions,
    vocab: Vocabulary,
    ledger: Ledger,
}

impl<'a> Engine<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        fetcher: &'a dyn Fetcher,
        resolver: &'a mut dyn Resolver,
        logger: &'a ActivityLogger,
        cfg: &'a Config,
        vocab: Vocabulary,
        ledger: Ledger,
        opts: EngineOptions,
    ) -> Self {
        Self {
            fetcher,
            resolver,
            logger,
            cfg,
            opts,
            vocab,
            ledger,
        }
    }

    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Fetch one recipe page, extract it, normalize every ingredient line and
    /// append the row. Structure mismatches and duplicate titles skip the
    /// page; fetch errors propagate to the caller.
    pub fn scrape_link(&mut self, url: &str) -> Result<PageOutcome> {
        Url::parse(url).map_err(|_| LarderError::InvalidUrl(url.to_string()))?;

        let html = self.fetcher.fetch(url, &self.cfg.fetch)?;
        let page = match extract_recipe(&html, &self.cfg.profile)? {
            Some(page) => page,
            None => {
                println!("Skipping one that does not match pattern");
                let _ = self.logger.info(Some(url), "skip_no_match", None);
                return Ok(PageOutcome::NoMatch);
            }
        };

        println!("{}", page.title);
        if self.ledger.contains(&page.title) {
            println!("Already collected");
            let _ = self
                .logger
                .info(Some(url), "skip_duplicate", Some(&page.title));
            return Ok(PageOutcome::Duplicate);
        }

        let mut tokens: Vec<String> = Vec::new();
        for line in &page.ingredients {
            for token in normalize(line, &mut self.vocab, &mut *self.resolver)? {
                if self.opts.strict && tokens.contains(&token) {
                    continue;
                }
                tokens.push(token);
            }
        }

        self.ledger.append(&page.title, &tokens)?;
        let _ = self.logger.info(Some(url), "collect", Some(&page.title));
        Ok(PageOutcome::Collected)
    }

    /// Fetch a slideshow listing and run every linked recipe through
    /// `scrape_link`. A failure on one page is printed and logged, then the
    /// remaining pages continue.
    pub fn scrape_slides(&mut self, url: &str) -> Result<RunSummary> {
        let base = Url::parse(url).map_err(|_| LarderError::InvalidUrl(url.to_string()))?;
        let html = self.fetcher.fetch(url, &self.cfg.fetch)?;
        let links = extract_slide_links(&html, &base, &self.cfg.profile)?;

        let mut summary = RunSummary::default();
        for link in links {
            println!("RECIPE------------");
            match self.scrape_link(&link) {
                Ok(PageOutcome::Collected) => summary.collected += 1,
                Ok(PageOutcome::Duplicate) => summary.duplicates += 1,
                Ok(PageOutcome::NoMatch) => summary.unmatched += 1,
                Err(e) => {
                    println!("Skipping {link}: {e}");
                    let _ = self.logger.error(Some(&link), "page_failed", Some(&e.to_string()));
                    summary.failed += 1;
                }
            }
            println!();
        }
        Ok(summary)
    }

    /// Persist the vocabulary. The sole write-back point: an interrupted run
    /// loses what it learned.
    pub fn finish(self) -> Result<()> {
        self.vocab.flush(&self.cfg.paths.vocabulary)
    }
}
