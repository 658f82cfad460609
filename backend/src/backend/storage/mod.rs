//! # Storage Module
//!
//! Handles all data persistence for the tailoring shop.
//!
//! Everything persistent lives in a `KeyValueStore` with browser
//! `localStorage` semantics: two JSON array collections plus a
//! session-scoped login flag. The domain layer only sees the typed
//! `DesignStorage` / `BookingStorage` traits, so the backing store can be
//! swapped (browser storage, data directory, in-memory) without touching
//! business logic.
//!
//! ## Keys
//!
//! - `tailor_designs`: JSON array of `Design`
//! - `tailor_bookings`: JSON array of `Booking`
//! - `isTailorLoggedIn`: `"true"` while an admin session is open (session store)
//!
//! There is no locking and no transaction support. Every write is a full
//! read-modify-write of one collection.

pub mod booking_repository;
pub mod collection;
pub mod design_repository;
pub mod file_store;
pub mod id_generator;
pub mod memory;
pub mod seed;
pub mod sink;
pub mod traits;

#[cfg(test)]
pub mod test_utils;

pub use booking_repository::BookingRepository;
pub use design_repository::DesignRepository;
pub use file_store::FileStore;
pub use id_generator::IdGenerator;
pub use memory::MemoryStore;
pub use seed::initialize_store;
pub use sink::{mirror_to_sink, JsonLinesSink};
pub use traits::{BookingStorage, DesignStorage, ExternalSink, KeyValueStore};

/// Local storage key holding the design catalog
pub const DESIGNS_KEY: &str = "tailor_designs";

/// Local storage key holding all bookings
pub const BOOKINGS_KEY: &str = "tailor_bookings";

/// Session storage key for the admin login flag
pub const SESSION_KEY: &str = "isTailorLoggedIn";
