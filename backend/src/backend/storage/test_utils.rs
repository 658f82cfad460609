//! Test utilities shared by storage and domain tests
//!
//! Builds a fully wired `Backend` over in-memory stores so each test starts
//! from a clean, seeded catalog.
use anyhow::{anyhow, Result};
use std::sync::{Arc, Mutex};

use super::{ExternalSink, MemoryStore};
use crate::backend::domain::commands::{NewBooking, NewDesign};
use crate::backend::domain::StaticCredentials;
use crate::backend::{Backend, BackendDependencies};

pub const TEST_ADMIN_USERNAME: &str = "test-tailor";
pub const TEST_ADMIN_PASSWORD: &str = "measure-twice";

/// Sink that remembers every call
#[derive(Default)]
pub struct RecordingSink {
    calls: Mutex<Vec<(String, serde_json::Value)>>,
}

impl RecordingSink {
    pub fn calls(&self) -> Vec<(String, serde_json::Value)> {
        self.calls.lock().unwrap().clone()
    }
}

impl ExternalSink for RecordingSink {
    fn insert_data(&self, collection: &str, record: &serde_json::Value) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push((collection.to_string(), record.clone()));
        Ok(())
    }
}

/// Sink whose capability always throws
pub struct FailingSink;

impl ExternalSink for FailingSink {
    fn insert_data(&self, _collection: &str, _record: &serde_json::Value) -> Result<()> {
        Err(anyhow!("insertData is not a function"))
    }
}

/// In-memory test environment; clones of the stores stay inspectable
pub struct TestEnvironment {
    pub local_store: MemoryStore,
    pub session_store: MemoryStore,
    pub backend: Backend,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self::with_sink(None)
    }

    pub fn with_sink(sink: Option<Arc<dyn ExternalSink>>) -> Self {
        let local_store = MemoryStore::new();
        let session_store = MemoryStore::new();
        let backend = Backend::new(BackendDependencies {
            local_store: Arc::new(local_store.clone()),
            session_store: Arc::new(session_store.clone()),
            sink,
            verifier: Arc::new(StaticCredentials::new(TEST_ADMIN_USERNAME, TEST_ADMIN_PASSWORD)),
            default_completion_days: 14,
        })
        .expect("Failed to build test backend");

        Self {
            local_store,
            session_store,
            backend,
        }
    }
}

pub fn new_design(title: &str, image_type: &str) -> NewDesign {
    NewDesign {
        title: title.to_string(),
        price: 300.0,
        days_to_complete: 7,
        category: "Jacket".to_string(),
        description: "Test design".to_string(),
        image_url: None,
        image_type: image_type.to_string(),
    }
}

pub fn new_booking(date: &str, time: &str, design_id: Option<i64>) -> NewBooking {
    NewBooking {
        design_id,
        customer_name: "Test Customer".to_string(),
        customer_mobile: "555-0100".to_string(),
        booking_date: date.to_string(),
        booking_time: time.to_string(),
    }
}
