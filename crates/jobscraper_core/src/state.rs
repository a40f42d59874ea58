use crate::sources::DEFAULT_SOURCE;
use crate::view_model::{AppViewModel, JobRowView, TemplateRowView};

pub type TemplateId = String;

/// One scraped listing. Records are immutable once produced; a run yields
/// them in discovery order across pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub post_date: Option<String>,
    /// Completeness score, always in 0..=100.
    pub data_quality: u8,
}

/// The scrape parameters currently held by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryForm {
    pub url: String,
    pub job_title: String,
    pub location: String,
    pub source: String,
}

impl Default for QueryForm {
    fn default() -> Self {
        Self {
            url: String::new(),
            job_title: String::new(),
            location: String::new(),
            source: DEFAULT_SOURCE.to_string(),
        }
    }
}

/// Counters for the run in progress (or the most recent one).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunStatus {
    pub active: bool,
    pub percent: u8,
    pub jobs_found: usize,
    pub pages_scraped: usize,
    pub error_count: usize,
    pub elapsed_secs: u64,
}

/// A saved query configuration, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    pub id: TemplateId,
    pub name: String,
    pub url: String,
    pub job_title: String,
    pub location: String,
    pub source: String,
    pub created_at: String,
}

/// Transient user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Success(String),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    form: QueryForm,
    jobs: Vec<Job>,
    run: RunStatus,
    templates: Vec<TemplateEntry>,
    notice: Option<Notice>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            form: self.form.clone(),
            run: self.run,
            job_count: self.jobs.len(),
            jobs: self.jobs.iter().map(JobRowView::from_job).collect(),
            templates: self
                .templates
                .iter()
                .map(TemplateRowView::from_entry)
                .collect(),
            notice: self.notice.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether a re-render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn form(&self) -> &QueryForm {
        &self.form
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn run(&self) -> RunStatus {
        self.run
    }

    pub fn templates(&self) -> &[TemplateEntry] {
        &self.templates
    }

    pub(crate) fn form_mut(&mut self) -> &mut QueryForm {
        self.dirty = true;
        &mut self.form
    }

    /// Resets every run counter and discards the previous result set.
    pub(crate) fn start_run(&mut self) {
        self.jobs.clear();
        self.run = RunStatus {
            active: true,
            ..RunStatus::default()
        };
        self.dirty = true;
    }

    /// Applies one progress snapshot. Percent is clamped so it never moves
    /// backwards within a run.
    pub(crate) fn apply_progress(
        &mut self,
        percent: u8,
        jobs_found: usize,
        pages_scraped: usize,
        error_count: usize,
    ) {
        self.run.percent = self.run.percent.max(percent.min(100));
        self.run.jobs_found = jobs_found;
        self.run.pages_scraped = pages_scraped;
        self.run.error_count = error_count;
        self.dirty = true;
    }

    pub(crate) fn finish_run(&mut self, jobs: Vec<Job>) {
        self.run.active = false;
        self.run.jobs_found = jobs.len();
        self.jobs = jobs;
        self.dirty = true;
    }

    pub(crate) fn tick(&mut self) {
        if self.run.active {
            self.run.elapsed_secs += 1;
            self.dirty = true;
        }
    }

    pub(crate) fn set_templates(&mut self, templates: Vec<TemplateEntry>) {
        self.templates = templates;
        self.dirty = true;
    }

    pub(crate) fn push_template(&mut self, entry: TemplateEntry) {
        self.templates.push(entry);
        self.dirty = true;
    }

    pub(crate) fn remove_template(&mut self, id: &str) -> Option<TemplateEntry> {
        let index = self.templates.iter().position(|t| t.id == id)?;
        self.dirty = true;
        Some(self.templates.remove(index))
    }

    pub(crate) fn template(&self, id: &str) -> Option<&TemplateEntry> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub(crate) fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.dirty = true;
    }
}
