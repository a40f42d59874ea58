use crate::{sources, AppState, Effect, Msg, Notice, TemplateDraft};

/// Pure update function: applies a message to state and returns any effects.
///
/// Boundary validation happens here, before any effect is emitted; a
/// rejected message produces a `Notice::Error` and no state change beyond
/// the notice itself.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::UrlChanged(url) => {
            state.form_mut().url = url;
            Vec::new()
        }
        Msg::JobTitleChanged(job_title) => {
            state.form_mut().job_title = job_title;
            Vec::new()
        }
        Msg::LocationChanged(location) => {
            state.form_mut().location = location;
            Vec::new()
        }
        Msg::SourceChanged(source) => {
            state.form_mut().source = source;
            Vec::new()
        }
        Msg::GenerateUrlRequested => {
            let form = state.form();
            if form.job_title.is_empty() && form.location.is_empty() {
                state.set_notice(Notice::Error(
                    "Provide at least a job title or location to generate a URL".to_string(),
                ));
            } else {
                let url = sources::search_url(&form.source, &form.job_title, &form.location);
                state.form_mut().url = url;
                state.set_notice(Notice::Success("URL generated".to_string()));
            }
            Vec::new()
        }
        Msg::SubmitClicked => {
            if state.run().active {
                state.set_notice(Notice::Error("A scrape is already running".to_string()));
                return (state, Vec::new());
            }
            if state.form().url.is_empty() {
                state.set_notice(Notice::Error("Enter a job board URL".to_string()));
                return (state, Vec::new());
            }
            state.start_run();
            vec![Effect::StartScrape {
                query: state.form().clone(),
            }]
        }
        Msg::ScrapeProgress {
            percent,
            jobs_found,
            pages_scraped,
            error_count,
        } => {
            state.apply_progress(percent, jobs_found, pages_scraped, error_count);
            Vec::new()
        }
        Msg::ScrapeCompleted { jobs } => {
            let count = jobs.len();
            state.finish_run(jobs);
            // A run always ends in this notification, however many pages failed.
            state.set_notice(Notice::Success(format!(
                "Successfully scraped {count} jobs"
            )));
            vec![Effect::StopTimer]
        }
        Msg::TimerTick => {
            state.tick();
            Vec::new()
        }
        Msg::TemplatesRestored(templates) => {
            state.set_templates(templates);
            Vec::new()
        }
        Msg::SaveTemplateRequested { name } => {
            if name.is_empty() {
                state.set_notice(Notice::Error("Enter a template name".to_string()));
                return (state, Vec::new());
            }
            let form = state.form();
            vec![Effect::PersistTemplate {
                draft: TemplateDraft {
                    name,
                    url: form.url.clone(),
                    job_title: form.job_title.clone(),
                    location: form.location.clone(),
                    source: form.source.clone(),
                },
            }]
        }
        Msg::TemplateSaved(entry) => {
            state.set_notice(Notice::Success(format!(
                "Template \"{}\" saved",
                entry.name
            )));
            state.push_template(entry);
            Vec::new()
        }
        Msg::TemplateApplied { id } => {
            match state.template(&id).cloned() {
                Some(entry) => {
                    let form = state.form_mut();
                    form.url = entry.url;
                    form.job_title = entry.job_title;
                    form.location = entry.location;
                    form.source = entry.source;
                    state.set_notice(Notice::Info(format!(
                        "Template \"{}\" loaded",
                        entry.name
                    )));
                }
                None => {
                    state.set_notice(Notice::Error(format!("No template with id {id}")));
                }
            }
            Vec::new()
        }
        Msg::DeleteTemplateRequested { id } => {
            vec![Effect::DeleteTemplate { id }]
        }
        Msg::TemplateDeleted { id } => {
            if let Some(entry) = state.remove_template(&id) {
                state.set_notice(Notice::Success(format!(
                    "Template \"{}\" deleted",
                    entry.name
                )));
            }
            Vec::new()
        }
        Msg::ExportRequested { format } => {
            if state.jobs().is_empty() {
                state.set_notice(Notice::Error("No jobs to export".to_string()));
                return (state, Vec::new());
            }
            let form = state.form();
            vec![Effect::ExportJobs {
                format,
                jobs: state.jobs().to_vec(),
                job_title: form.job_title.clone(),
                location: form.location.clone(),
            }]
        }
        Msg::ExportCompleted { file_name, count } => {
            state.set_notice(Notice::Success(format!(
                "Exported {count} jobs to {file_name}"
            )));
            Vec::new()
        }
        Msg::StorageFailed(message) => {
            state.set_notice(Notice::Error(message));
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
