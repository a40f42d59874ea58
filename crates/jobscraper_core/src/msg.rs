#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the job board URL input.
    UrlChanged(String),
    /// User edited the job title filter.
    JobTitleChanged(String),
    /// User edited the location filter.
    LocationChanged(String),
    /// User picked a different source site.
    SourceChanged(String),
    /// User asked for a search URL templated from the current filters.
    GenerateUrlRequested,
    /// User submitted the form to start a scrape.
    SubmitClicked,
    /// Runner progress after one simulated page.
    ScrapeProgress {
        percent: u8,
        jobs_found: usize,
        pages_scraped: usize,
        error_count: usize,
    },
    /// Runner resolved with the complete result set.
    ScrapeCompleted { jobs: Vec<crate::Job> },
    /// One-second elapsed-time tick; counted only while a run is active.
    TimerTick,
    /// Restore previously saved templates from the store.
    TemplatesRestored(Vec<crate::TemplateEntry>),
    /// User asked to save the current form under a name.
    SaveTemplateRequested { name: String },
    /// Store confirmation for a newly created template.
    TemplateSaved(crate::TemplateEntry),
    /// User applied a saved template to the form.
    TemplateApplied { id: crate::TemplateId },
    /// User asked to delete a saved template.
    DeleteTemplateRequested { id: crate::TemplateId },
    /// Store confirmation for a deletion.
    TemplateDeleted { id: crate::TemplateId },
    /// User asked to export the current result set.
    ExportRequested { format: crate::ExportFormat },
    /// Export file has been written.
    ExportCompleted { file_name: String, count: usize },
    /// A storage operation failed; shown to the user, state unchanged.
    StorageFailed(String),
    /// Fallback for placeholder wiring.
    NoOp,
}
