//! Jobscraper core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod sources;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, ExportFormat, TemplateDraft};
pub use msg::Msg;
pub use sources::{search_url, source_label, SourceSite, DEFAULT_SOURCE, SOURCES};
pub use state::{AppState, Job, Notice, QueryForm, RunStatus, TemplateEntry, TemplateId};
pub use update::update;
pub use view_model::{
    format_elapsed, AppViewModel, JobRowView, QualityBand, TemplateRowView,
};
