use crate::{Job, Notice, QueryForm, RunStatus, TemplateEntry};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub form: QueryForm,
    pub run: RunStatus,
    pub job_count: usize,
    pub jobs: Vec<JobRowView>,
    pub templates: Vec<TemplateRowView>,
    pub notice: Option<Notice>,
    pub dirty: bool,
}

/// One row of the results table, with display-ready fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRowView {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary_label: String,
    pub quality: u8,
    pub quality_band: QualityBand,
}

impl JobRowView {
    pub(crate) fn from_job(job: &Job) -> Self {
        Self {
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            salary_label: job
                .salary
                .clone()
                .unwrap_or_else(|| "Not specified".to_string()),
            quality: job.data_quality,
            quality_band: QualityBand::for_score(job.data_quality),
        }
    }
}

/// Badge bucket for a completeness score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl QualityBand {
    pub fn for_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => Self::Excellent,
            60..=79 => Self::Good,
            40..=59 => Self::Fair,
            _ => Self::Poor,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

/// One row of the saved-templates panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRowView {
    pub id: String,
    pub name: String,
    pub summary: String,
}

impl TemplateRowView {
    pub(crate) fn from_entry(entry: &TemplateEntry) -> Self {
        let title = if entry.job_title.is_empty() {
            "No title filter"
        } else {
            &entry.job_title
        };
        let location = if entry.location.is_empty() {
            "No location filter"
        } else {
            &entry.location
        };
        Self {
            id: entry.id.clone(),
            name: entry.name.clone(),
            summary: format!("{} | {} | {}", entry.source, title, location),
        }
    }
}

/// Formats elapsed seconds as `mm:ss`.
pub fn format_elapsed(seconds: u64) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    format!("{mins:02}:{secs:02}")
}
