//! Pipeline module for building agent-friendly pages
//!
//! This module contains the build logic, including:
//! - HTTP fetching of rendered pages
//! - The per-page fetch → cache → transform → store state machine
//! - Wiring configuration into the collaborators

mod driver;
mod fetcher;

pub use driver::PipelineDriver;
pub use fetcher::{build_http_client, Fetcher, HttpFetcher, USER_AGENT};

use crate::cache::CacheStore;
use crate::config::Config;
use crate::output::{BuildReport, DiscoveryFiles, OutputWriter};
use crate::storage::{FsStorage, Storage};
use crate::transform::{build_transformer, TransformOrchestrator};
use crate::AgentPagesError;
use std::sync::Arc;

/// Everything a finished build produced
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub report: BuildReport,
    pub discovery: DiscoveryFiles,
}

/// Runs a complete build
///
/// This is the main entry point. It will:
/// 1. Check the transformer credential (fatal before any page work)
/// 2. Load the cache
/// 3. Process every configured page in order
/// 4. Regenerate the manifest and robots snippet from the pages that succeeded
///
/// # Returns
///
/// * `Ok(BuildOutcome)` - Build ran; individual pages may still have failed
/// * `Err(AgentPagesError)` - Configuration or discovery-file write failure
pub async fn run_build(config: &Config) -> Result<BuildOutcome, AgentPagesError> {
    let transformer = build_transformer(&config.transformer)?;

    let fetcher = HttpFetcher::new(&config.site.base_url).map_err(|e| {
        crate::ConfigError::Validation(format!("failed to build HTTP client: {}", e))
    })?;

    let storage: Arc<dyn Storage> = Arc::new(FsStorage::from_config(config));
    let cache =
        CacheStore::load(Arc::clone(&storage)).with_raw_content(config.cache.keep_raw_content);
    let writer = OutputWriter::new(storage, config.output.resolved_public_path());
    let orchestrator = TransformOrchestrator::new(transformer, &config.transformer.language);

    let mut driver = PipelineDriver::new(Box::new(fetcher), orchestrator, cache, writer);
    let report = driver.run(&config.site.pages).await;
    let discovery = driver.finalize(&report)?;

    Ok(BuildOutcome { report, discovery })
}
