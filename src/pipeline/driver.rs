//! Pipeline driver - per-page build orchestration
//!
//! This module contains the main build loop, which for each configured page:
//! - Fetches the rendered HTML
//! - Consults the cache by content fingerprint
//! - Transforms the page on a cache miss and records the result
//! - Writes the page file and remembers it for the manifest
//!
//! Pages run one at a time, in order. A failing page is logged and recorded
//! in the report; it never stops the pages after it.

use crate::cache::CacheStore;
use crate::output::{BuildReport, DiscoveryFiles, FailedPage, GeneratedPage, OutputWriter};
use crate::pipeline::fetcher::Fetcher;
use crate::state::PageState;
use crate::transform::TransformOrchestrator;
use crate::AgentPagesError;

/// Tracks one page through the state machine
struct PageRun<'a> {
    page_id: &'a str,
    state: PageState,
}

impl<'a> PageRun<'a> {
    fn new(page_id: &'a str) -> Self {
        Self {
            page_id,
            state: PageState::Fetching,
        }
    }

    fn advance(&mut self, next: PageState) -> Result<(), AgentPagesError> {
        if !self.state.can_transition_to(next) {
            return Err(AgentPagesError::InvalidTransition {
                from: self.state,
                to: next,
            });
        }
        tracing::trace!("{}: {} -> {}", self.page_id, self.state, next);
        self.state = next;
        Ok(())
    }
}

/// Main pipeline driver structure
pub struct PipelineDriver {
    fetcher: Box<dyn Fetcher>,
    orchestrator: TransformOrchestrator,
    cache: CacheStore,
    writer: OutputWriter,
}

impl PipelineDriver {
    /// Creates a driver from its collaborators
    pub fn new(
        fetcher: Box<dyn Fetcher>,
        orchestrator: TransformOrchestrator,
        cache: CacheStore,
        writer: OutputWriter,
    ) -> Self {
        Self {
            fetcher,
            orchestrator,
            cache,
            writer,
        }
    }

    /// The cache, for inspection after a run
    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    /// Runs every page and collects the outcome
    ///
    /// Per-page errors end up in [`BuildReport::failed`]; this never fails
    /// as a whole.
    pub async fn run(&mut self, pages: &[String]) -> BuildReport {
        tracing::info!(
            "Building {} pages with transformer '{}'",
            pages.len(),
            self.orchestrator.transformer_name()
        );

        let start_time = std::time::Instant::now();
        let mut report = BuildReport::new();

        for page_id in pages {
            tracing::info!("Processing {}", page_id);

            let mut run = PageRun::new(page_id);
            match self.run_page(&mut run).await {
                Ok(generated) => {
                    tracing::info!("Saved {} to {}", page_id, generated.path.display());
                    report.generated.push(generated);
                }
                Err(e) => {
                    report.failed.push(FailedPage {
                        page_id: page_id.clone(),
                        message: e.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            "Build finished: {} generated ({} from cache), {} failed in {:?}",
            report.generated.len(),
            report.cache_hits(),
            report.failed.len(),
            start_time.elapsed()
        );

        report
    }

    /// Rewrites the manifest and robots snippet from the generated pages
    pub fn finalize(&self, report: &BuildReport) -> Result<DiscoveryFiles, AgentPagesError> {
        tracing::info!(
            "Generating discovery files for {} pages",
            report.generated.len()
        );
        Ok(self.writer.write_discovery_files(&report.generated)?)
    }

    /// Runs one page to a terminal state
    ///
    /// On error the page ends in `Failed` and the error is returned.
    async fn run_page(
        &mut self,
        run: &mut PageRun<'_>,
    ) -> Result<GeneratedPage, AgentPagesError> {
        let error = match self.process_page(run).await {
            Ok(generated) => return Ok(generated),
            Err(e) => e,
        };

        let failed_in = run.state;
        if let Err(transition) = run.advance(PageState::Failed) {
            tracing::warn!("{}", transition);
        }
        tracing::error!(
            page = %run.page_id,
            state = %failed_in,
            "Failed to process {}: {}",
            run.page_id,
            error
        );

        Err(error)
    }

    /// Moves one page from `Fetching` to `Done`
    async fn process_page(
        &mut self,
        run: &mut PageRun<'_>,
    ) -> Result<GeneratedPage, AgentPagesError> {
        let page_id = run.page_id;

        let raw = self.fetcher.fetch(page_id).await?;
        run.advance(PageState::CacheCheck)?;

        let cached = self.cache.lookup(page_id, &raw).map(str::to_string);
        let (content, from_cache) = match cached {
            Some(content) => {
                tracing::info!("Cache hit for {}", page_id);
                (content, true)
            }
            None => {
                run.advance(PageState::Transforming)?;
                tracing::info!(
                    "Transforming {} ({})",
                    page_id,
                    self.orchestrator.transformer_name()
                );
                let transformed = self.orchestrator.transform(&raw).await?;

                run.advance(PageState::Store)?;
                self.cache.store(page_id, &raw, &transformed)?;
                (transformed, false)
            }
        };

        let generated = self.writer.save_page(page_id, &content, from_cache)?;
        run.advance(PageState::Done)?;
        Ok(generated)
    }
}
