use std::sync::mpsc;
use std::time::Duration;

use scraper_logging::{scrape_debug, scrape_info};

use crate::random::RandomSource;
use crate::{catalog, JobRecord, ProgressSnapshot, ScrapeEvent, ScrapeQuery};

/// Tunable constants for the simulated pipeline. The defaults mirror the
/// behavior the dashboard was built against; none of them are load-bearing
/// business rules.
#[derive(Debug, Clone)]
pub struct SimulationSettings {
    pub min_pages: u64,
    pub max_pages: u64,
    pub min_jobs_per_page: u64,
    pub max_jobs_per_page: u64,
    /// Chance of a page fetch failing, in whole percent.
    pub failure_percent: u64,
    /// Half-open latency range per page, in milliseconds.
    pub min_latency_ms: u64,
    pub max_latency_ms: u64,
    pub min_quality: u64,
    pub max_quality: u64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            min_pages: 3,
            max_pages: 5,
            min_jobs_per_page: 5,
            max_jobs_per_page: 12,
            failure_percent: 15,
            min_latency_ms: 1000,
            max_latency_ms: 3000,
            min_quality: 40,
            max_quality: 100,
        }
    }
}

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: ScrapeEvent);
}

pub struct ChannelProgressSink {
    tx: mpsc::Sender<ScrapeEvent>,
}

impl ChannelProgressSink {
    pub fn new(tx: mpsc::Sender<ScrapeEvent>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelProgressSink {
    fn emit(&self, event: ScrapeEvent) {
        let _ = self.tx.send(event);
    }
}

/// A run: pages in strict sequential order, one progress emission per page,
/// and a complete record list at the end. There is no failure channel and
/// no cancellation; once started, a run always resolves.
#[async_trait::async_trait]
pub trait ScrapeRunner: Send {
    async fn scrape(&mut self, query: &ScrapeQuery, sink: &dyn ProgressSink) -> Vec<JobRecord>;
}

/// Produces a plausible, randomized dataset while exercising the same
/// progress-reporting contract a real scraper would use.
pub struct SimulatedScraper {
    settings: SimulationSettings,
    rng: Box<dyn RandomSource>,
}

impl SimulatedScraper {
    pub fn new(settings: SimulationSettings, rng: Box<dyn RandomSource>) -> Self {
        Self { settings, rng }
    }

    pub fn with_system_rng(settings: SimulationSettings) -> Self {
        Self::new(settings, Box::new(crate::random::SystemRandom))
    }

    fn page_latency(&mut self) -> Duration {
        let lo = self.settings.min_latency_ms;
        let hi = self.settings.max_latency_ms.max(lo + 1);
        Duration::from_millis(self.rng.pick_in(lo, hi - 1))
    }
}

#[async_trait::async_trait]
impl ScrapeRunner for SimulatedScraper {
    async fn scrape(&mut self, query: &ScrapeQuery, sink: &dyn ProgressSink) -> Vec<JobRecord> {
        let settings = self.settings.clone();
        // The url is accepted as-is; it only matters to the caller.
        scrape_info!(
            "scrape start source={} url={} title_filter={:?} location_filter={:?}",
            query.source,
            query.url,
            query.job_title,
            query.location
        );

        let titles = catalog::title_variants(&query.job_title);
        let locations = catalog::location_variants(&query.location);

        let total_pages = self.rng.pick_in(settings.min_pages, settings.max_pages);
        let mut jobs: Vec<JobRecord> = Vec::new();
        let mut error_count = 0usize;

        for page in 0..total_pages {
            // The only suspension point in the pipeline.
            tokio::time::sleep(self.page_latency()).await;

            let percent = (((page + 1) as f64 / total_pages as f64) * 100.0).round() as u8;

            if self.rng.percent(settings.failure_percent) {
                // Failed fetch: the page counts as processed but contributes
                // no records.
                error_count += 1;
                scrape_debug!("page {} of {} failed", page + 1, total_pages);
                sink.emit(ScrapeEvent::Progress(ProgressSnapshot {
                    percent,
                    jobs_found: jobs.len(),
                    pages_scraped: (page + 1) as usize,
                    error_count,
                }));
                continue;
            }

            let per_page = self
                .rng
                .pick_in(settings.min_jobs_per_page, settings.max_jobs_per_page);
            for _ in 0..per_page {
                let title = titles[self.rng.pick_index(titles.len())].clone();
                let company =
                    catalog::COMPANIES[self.rng.pick_index(catalog::COMPANIES.len())].to_string();
                let location = locations[self.rng.pick_index(locations.len())].clone();
                let salary = catalog::SALARY_RANGES
                    [self.rng.pick_index(catalog::SALARY_RANGES.len())]
                .map(str::to_string);
                let data_quality =
                    self.rng.pick_in(settings.min_quality, settings.max_quality) as u8;

                jobs.push(JobRecord {
                    title,
                    company,
                    location,
                    salary,
                    description: None,
                    url: None,
                    post_date: None,
                    data_quality,
                });
            }

            sink.emit(ScrapeEvent::Progress(ProgressSnapshot {
                percent,
                jobs_found: jobs.len(),
                pages_scraped: (page + 1) as usize,
                error_count,
            }));
        }

        scrape_info!(
            "scrape done pages={} jobs={} failed_pages={}",
            total_pages,
            jobs.len(),
            error_count
        );
        jobs
    }
}
