//! Jobscraper engine: simulated scrape pipeline, template store and exports.
mod catalog;
mod engine;
mod export;
mod filename;
mod persist;
mod random;
mod simulate;
mod store;
mod types;

pub use catalog::{location_variants, title_variants, COMPANIES, SALARY_RANGES};
pub use engine::EngineHandle;
pub use export::{csv_document, word_document, ExportFormat};
pub use filename::export_file_name;
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use random::{RandomSource, ScriptedRandom, SystemRandom};
pub use simulate::{
    ChannelProgressSink, ProgressSink, ScrapeRunner, SimulatedScraper, SimulationSettings,
};
pub use store::{InMemorySlot, SlotStorage, StoreError, Template, TemplateDraft, TemplateStore};
pub use types::{JobRecord, ProgressSnapshot, ScrapeEvent, ScrapeQuery};
