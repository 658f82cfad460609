//! # Backend Module
//!
//! All non-UI logic for the tailoring shop.
//!
//! - **Domain**: Catalog, booking, session and dashboard rules
//! - **Storage**: Key-value persistence and the typed repositories over it
//!
//! The backend is synchronous and free of platform APIs, so the same code
//! runs inside the browser pages (over `localStorage`) and inside the
//! `tailor` command-line tool (over a data directory).

pub mod domain;
pub mod storage;

use anyhow::{Context, Result};
use log::info;
use std::sync::Arc;

use crate::backend::domain::{
    BookingService, CatalogService, CredentialVerifier, DashboardService, SessionGate,
};
use crate::backend::storage::{
    initialize_store, BookingRepository, BookingStorage, DesignRepository, DesignStorage,
    ExternalSink, IdGenerator, KeyValueStore,
};

/// Everything the backend needs from its host
pub struct BackendDependencies {
    /// Persistent store for the design and booking collections
    pub local_store: Arc<dyn KeyValueStore>,
    /// Store whose contents end with the session; holds the admin flag
    pub session_store: Arc<dyn KeyValueStore>,
    /// Optional lead-capture mirror for new designs and bookings
    pub sink: Option<Arc<dyn ExternalSink>>,
    pub verifier: Arc<dyn CredentialVerifier>,
    pub default_completion_days: u32,
}

/// Main application state that holds all services
#[derive(Clone)]
pub struct Backend {
    pub design_storage: Arc<dyn DesignStorage>,
    pub booking_storage: Arc<dyn BookingStorage>,
    pub catalog_service: CatalogService,
    pub booking_service: BookingService,
    pub session_gate: SessionGate,
    pub dashboard_service: DashboardService,
}

impl Backend {
    /// Seed the local store if needed and wire up all services
    pub fn new(deps: BackendDependencies) -> Result<Self> {
        info!("Initializing local store");
        initialize_store(deps.local_store.as_ref()).context("Failed to initialize local store")?;

        // One generator for both collections keeps ids unique across them
        let ids = Arc::new(IdGenerator::new());

        info!("Setting up domain model");
        let design_storage: Arc<dyn DesignStorage> = Arc::new(DesignRepository::new(
            deps.local_store.clone(),
            deps.sink.clone(),
            ids.clone(),
        ));
        let booking_storage: Arc<dyn BookingStorage> = Arc::new(BookingRepository::new(
            deps.local_store.clone(),
            deps.sink.clone(),
            ids,
        ));

        let catalog_service = CatalogService::new(design_storage.clone());
        let booking_service = BookingService::new(
            booking_storage.clone(),
            design_storage.clone(),
            deps.default_completion_days,
        );
        let session_gate = SessionGate::new(deps.session_store, deps.verifier);
        let dashboard_service = DashboardService::new(booking_storage.clone(), design_storage.clone());

        Ok(Self {
            design_storage,
            booking_storage,
            catalog_service,
            booking_service,
            session_gate,
            dashboard_service,
        })
    }
}
