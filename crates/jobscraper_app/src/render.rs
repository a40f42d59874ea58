use jobscraper_core::{format_elapsed, AppViewModel, Notice, RunStatus};

const BAR_WIDTH: usize = 20;

/// Prints view-model changes to the terminal. Progress and notices are
/// deduplicated so a render per message stays readable.
#[derive(Default)]
pub struct TerminalRenderer {
    last_progress: Option<String>,
    last_notice: Option<Notice>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw(&mut self, view: &AppViewModel) {
        if view.run.active {
            let line = progress_line(&view.run);
            if self.last_progress.as_deref() != Some(line.as_str()) {
                println!("{line}");
                self.last_progress = Some(line);
            }
        }

        if view.notice != self.last_notice {
            if let Some(notice) = &view.notice {
                println!("{}", notice_line(notice));
            }
            self.last_notice = view.notice.clone();
        }
    }

    pub fn results_table(&self, view: &AppViewModel) {
        if view.jobs.is_empty() {
            println!("No jobs scraped.");
            return;
        }
        println!(
            "{:<40} {:<26} {:<22} {:<20} {}",
            "Job Title", "Company", "Location", "Salary", "Quality"
        );
        for job in &view.jobs {
            println!(
                "{:<40} {:<26} {:<22} {:<20} {} ({})",
                job.title,
                job.company,
                job.location,
                job.salary_label,
                job.quality,
                job.quality_band.label()
            );
        }
    }

    pub fn templates_list(&self, view: &AppViewModel) {
        if view.templates.is_empty() {
            println!("No templates saved yet.");
            return;
        }
        for template in &view.templates {
            println!("{}  {}  ({})", template.id, template.name, template.summary);
        }
    }
}

fn progress_line(run: &RunStatus) -> String {
    let filled = (run.percent as usize * BAR_WIDTH) / 100;
    let bar: String = (0..BAR_WIDTH)
        .map(|i| if i < filled { '=' } else { ' ' })
        .collect();
    format!(
        "[{bar}] {:>3}% | jobs {} | pages {} | errors {} | {}",
        run.percent,
        run.jobs_found,
        run.pages_scraped,
        run.error_count,
        format_elapsed(run.elapsed_secs)
    )
}

fn notice_line(notice: &Notice) -> String {
    match notice {
        Notice::Info(text) => format!("* {text}"),
        Notice::Success(text) => format!("+ {text}"),
        Notice::Error(text) => format!("! {text}"),
    }
}
