use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use scraper_logging::scrape_warn;

/// A saved query configuration. Identity fields are assigned by the store
/// and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: Uuid,
    pub name: String,
    pub url: String,
    pub job_title: String,
    pub location: String,
    pub source: String,
    pub created_at: DateTime<Utc>,
}

/// A template as submitted for saving, before identity is assigned. Field
/// contents are not validated; empty names and urls are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TemplateDraft {
    pub name: String,
    pub url: String,
    pub job_title: String,
    pub location: String,
    pub source: String,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage slot unavailable: {0}")]
    Storage(String),
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The single key-value slot holding the serialized template collection.
pub trait SlotStorage {
    fn read(&self) -> Result<Option<String>, StoreError>;
    fn write(&self, raw: &str) -> Result<(), StoreError>;
}

/// Durable CRUD over the saved-template list. The whole collection is
/// rewritten on every mutation; the list is human-curated and stays small.
pub struct TemplateStore<S: SlotStorage> {
    storage: S,
    clock: Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>,
}

impl<S: SlotStorage> TemplateStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_clock(storage, Arc::new(Utc::now))
    }

    pub fn with_clock(storage: S, clock: Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>) -> Self {
        Self { storage, clock }
    }

    /// All stored templates in insertion order. An absent, unreadable or
    /// unparseable slot lists as empty; availability wins over surfacing
    /// corruption here.
    pub fn list(&self) -> Vec<Template> {
        let raw = match self.storage.read() {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                scrape_warn!("template slot unreadable, listing none: {err}");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Template>>(&raw) {
            Ok(templates) => templates,
            Err(err) => {
                scrape_warn!("template slot unparseable, listing none: {err}");
                Vec::new()
            }
        }
    }

    /// Assigns a fresh id and timestamp, appends, and persists the whole
    /// collection. Returns the stored record.
    pub fn create(&self, draft: TemplateDraft) -> Result<Template, StoreError> {
        let mut templates = self.list();
        let template = Template {
            id: Uuid::new_v4(),
            name: draft.name,
            url: draft.url,
            job_title: draft.job_title,
            location: draft.location,
            source: draft.source,
            created_at: (self.clock)(),
        };
        templates.push(template.clone());
        self.persist(&templates)?;
        Ok(template)
    }

    /// Removes the matching entry if present; a missing id is a no-op, not
    /// an error.
    pub fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut templates = self.list();
        templates.retain(|t| t.id != id);
        self.persist(&templates)
    }

    fn persist(&self, templates: &[Template]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(templates)?;
        self.storage.write(&raw)
    }
}

/// Slot storage over a plain string, for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct InMemorySlot {
    raw: Mutex<Option<String>>,
}

impl InMemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot pre-filled with arbitrary content, parseable or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Mutex::new(Some(raw.into())),
        }
    }
}

impl SlotStorage for InMemorySlot {
    fn read(&self) -> Result<Option<String>, StoreError> {
        Ok(self.raw.lock().expect("slot lock").clone())
    }

    fn write(&self, raw: &str) -> Result<(), StoreError> {
        *self.raw.lock().expect("slot lock") = Some(raw.to_string());
        Ok(())
    }
}
