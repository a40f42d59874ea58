use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use chrono::Utc;
use scraper_logging::{scrape_error, scrape_info};

use jobscraper_core::{Effect, Job, Msg, QueryForm, TemplateEntry};
use jobscraper_engine::{
    csv_document, export_file_name, word_document, AtomicFileWriter, EngineHandle, JobRecord,
    ScrapeEvent, ScrapeQuery, SimulatedScraper, SimulationSettings, Template, TemplateStore,
};

use crate::persistence::FileSlot;

/// Executes the effects the pure core asks for: engine runs, the elapsed
/// ticker, template CRUD and export writes.
pub struct EffectRunner {
    engine: EngineHandle,
    store: Arc<TemplateStore<FileSlot>>,
    output_dir: std::path::PathBuf,
    msg_tx: mpsc::Sender<Msg>,
    ticker: Mutex<Option<TickerHandle>>,
}

impl EffectRunner {
    pub fn new(
        msg_tx: mpsc::Sender<Msg>,
        store: Arc<TemplateStore<FileSlot>>,
        output_dir: std::path::PathBuf,
        settings: SimulationSettings,
    ) -> Self {
        let runner = SimulatedScraper::with_system_rng(settings);
        let (engine, event_rx) = EngineHandle::start(Box::new(runner));
        spawn_event_pump(event_rx, msg_tx.clone());

        Self {
            engine,
            store,
            output_dir,
            msg_tx,
            ticker: Mutex::new(None),
        }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartScrape { query } => {
                    scrape_info!("starting scrape of {}", query.url);
                    self.replace_ticker(Some(start_ticker(self.msg_tx.clone())));
                    self.engine.start_run(map_query(query));
                }
                Effect::StopTimer => {
                    self.replace_ticker(None);
                }
                Effect::PersistTemplate { draft } => {
                    let draft = jobscraper_engine::TemplateDraft {
                        name: draft.name,
                        url: draft.url,
                        job_title: draft.job_title,
                        location: draft.location,
                        source: draft.source,
                    };
                    let msg = match self.store.create(draft) {
                        Ok(template) => Msg::TemplateSaved(map_template(&template)),
                        Err(err) => {
                            scrape_error!("template save failed: {err}");
                            Msg::StorageFailed(format!("Could not save template: {err}"))
                        }
                    };
                    let _ = self.msg_tx.send(msg);
                }
                Effect::DeleteTemplate { id } => {
                    let msg = match id.parse::<uuid::Uuid>() {
                        // An id the store never issued matches nothing; treat
                        // it like any other absent entry.
                        Err(_) => Msg::TemplateDeleted { id },
                        Ok(parsed) => match self.store.delete(parsed) {
                            Ok(()) => Msg::TemplateDeleted { id },
                            Err(err) => {
                                scrape_error!("template delete failed: {err}");
                                Msg::StorageFailed(format!("Could not delete template: {err}"))
                            }
                        },
                    };
                    let _ = self.msg_tx.send(msg);
                }
                Effect::ExportJobs {
                    format,
                    jobs,
                    job_title,
                    location,
                } => {
                    let msg = self.export(format, &jobs, &job_title, &location);
                    let _ = self.msg_tx.send(msg);
                }
            }
        }
    }

    fn export(
        &self,
        format: jobscraper_core::ExportFormat,
        jobs: &[Job],
        job_title: &str,
        location: &str,
    ) -> Msg {
        let records: Vec<JobRecord> = jobs.iter().map(map_job_out).collect();
        let today = Utc::now().format("%Y-%m-%d").to_string();
        let format = map_format(format);
        let file_name = export_file_name(job_title, location, format, &today);
        let content = match format {
            jobscraper_engine::ExportFormat::Csv => csv_document(&records),
            jobscraper_engine::ExportFormat::Word => word_document(&records, &today),
        };

        let writer = AtomicFileWriter::new(self.output_dir.clone());
        match writer.write(&file_name, &content) {
            Ok(path) => {
                scrape_info!("exported {} jobs to {}", records.len(), path.display());
                Msg::ExportCompleted {
                    file_name,
                    count: records.len(),
                }
            }
            Err(err) => {
                scrape_error!("export failed: {err}");
                Msg::StorageFailed(format!("Could not write {file_name}: {err}"))
            }
        }
    }

    fn replace_ticker(&self, next: Option<TickerHandle>) {
        let mut slot = self.ticker.lock().expect("ticker lock");
        if let Some(old) = slot.take() {
            old.stop();
        }
        *slot = next;
    }
}

impl Drop for EffectRunner {
    fn drop(&mut self) {
        // Teardown must not leave a dangling periodic task behind.
        self.replace_ticker(None);
    }
}

fn spawn_event_pump(event_rx: mpsc::Receiver<ScrapeEvent>, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        for event in event_rx.iter() {
            let msg = match event {
                ScrapeEvent::Progress(snapshot) => Msg::ScrapeProgress {
                    percent: snapshot.percent,
                    jobs_found: snapshot.jobs_found,
                    pages_scraped: snapshot.pages_scraped,
                    error_count: snapshot.error_count,
                },
                ScrapeEvent::Completed { jobs } => Msg::ScrapeCompleted {
                    jobs: jobs.iter().map(map_job_in).collect(),
                },
            };
            if msg_tx.send(msg).is_err() {
                break;
            }
        }
    });
}

/// Once-per-second elapsed-time tick, owned by the run that started it.
struct TickerHandle {
    stop: Arc<AtomicBool>,
}

impl TickerHandle {
    fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

fn start_ticker(msg_tx: mpsc::Sender<Msg>) -> TickerHandle {
    let stop = Arc::new(AtomicBool::new(false));
    let flag = stop.clone();
    thread::spawn(move || loop {
        thread::sleep(Duration::from_secs(1));
        if flag.load(Ordering::Relaxed) || msg_tx.send(Msg::TimerTick).is_err() {
            break;
        }
    });
    TickerHandle { stop }
}

fn map_query(form: QueryForm) -> ScrapeQuery {
    ScrapeQuery {
        url: form.url,
        job_title: form.job_title,
        location: form.location,
        source: form.source,
    }
}

fn map_job_in(record: &JobRecord) -> Job {
    Job {
        title: record.title.clone(),
        company: record.company.clone(),
        location: record.location.clone(),
        salary: record.salary.clone(),
        description: record.description.clone(),
        url: record.url.clone(),
        post_date: record.post_date.clone(),
        data_quality: record.data_quality,
    }
}

fn map_job_out(job: &Job) -> JobRecord {
    JobRecord {
        title: job.title.clone(),
        company: job.company.clone(),
        location: job.location.clone(),
        salary: job.salary.clone(),
        description: job.description.clone(),
        url: job.url.clone(),
        post_date: job.post_date.clone(),
        data_quality: job.data_quality,
    }
}

fn map_format(format: jobscraper_core::ExportFormat) -> jobscraper_engine::ExportFormat {
    match format {
        jobscraper_core::ExportFormat::Csv => jobscraper_engine::ExportFormat::Csv,
        jobscraper_core::ExportFormat::Word => jobscraper_engine::ExportFormat::Word,
    }
}

pub fn map_template(template: &Template) -> TemplateEntry {
    TemplateEntry {
        id: template.id.to_string(),
        name: template.name.clone(),
        url: template.url.clone(),
        job_title: template.job_title.clone(),
        location: template.location.clone(),
        source: template.source.clone(),
        created_at: template.created_at.to_rfc3339(),
    }
}
