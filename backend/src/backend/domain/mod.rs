//! # Domain Module
//!
//! Business logic for the tailoring shop.
//!
//! Services here never touch a concrete store: they are handed
//! `DesignStorage` / `BookingStorage` (or a raw `KeyValueStore` for the
//! session flag) and return view models from the `shared` crate, so the
//! same logic drives the browser pages and the command-line tool.
//!
//! ## Module Organization
//!
//! - **catalog_service**: Public design cards, admin catalog, add/delete designs
//! - **booking_service**: Slot availability, booking submission, delivery estimate
//! - **session_gate**: Admin login flag and dashboard access check
//! - **dashboard_service**: Admin bookings table and stat counters
//! - **page_router**: Maps the current page path to its initializer
//! - **commands**: Already-validated inputs for the storage layer
//!
//! ## Business Rules
//!
//! - The daily schedule is seven hourly slots, 10:00 AM to 05:00 PM
//! - At most one booking per (date, slot), checked against storage at submit time
//! - Delivery is the booking date plus the design's completion days (14 if unknown)
//! - Deleting a design leaves its bookings in place as "Consultation Only"
//! - The dashboard is only reachable while the session flag is `"true"`

pub mod booking_service;
pub mod catalog_service;
pub mod commands;
pub mod dashboard_service;
pub mod page_router;
pub mod session_gate;

pub use booking_service::{BookingError, BookingService, DEFAULT_COMPLETION_DAYS};
pub use catalog_service::{format_price, CatalogError, CatalogService};
pub use commands::{NewBooking, NewDesign};
pub use dashboard_service::{DashboardService, CONSULTATION_ONLY};
pub use page_router::{Page, PageInitializer, PageRouter};
pub use session_gate::{
    CredentialVerifier, DashboardAccess, LoginOutcome, NoCredentials, SessionError, SessionGate,
    StaticCredentials,
};
