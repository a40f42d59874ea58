/// One scraped listing as produced by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRecord {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub post_date: Option<String>,
    /// Completeness score in 0..=100.
    pub data_quality: u8,
}

/// Parameters for one scrape run. The url is carried along and logged but
/// never validated; the source id is informational only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScrapeQuery {
    pub url: String,
    pub job_title: String,
    pub location: String,
    pub source: String,
}

/// Counters reported after each simulated page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub percent: u8,
    pub jobs_found: usize,
    pub pages_scraped: usize,
    pub error_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeEvent {
    Progress(ProgressSnapshot),
    Completed { jobs: Vec<JobRecord> },
}
