//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.
//!
//! There are two levels:
//! - `KeyValueStore` is the raw string store (browser `localStorage`,
//!   a data directory of JSON files, or an in-memory map)
//! - `DesignStorage` / `BookingStorage` are the typed collections the
//!   domain services talk to

use anyhow::Result;
use shared::{Booking, Design};

use crate::backend::domain::commands::{NewBooking, NewDesign};

/// Trait defining a string key-value store with `localStorage` semantics
///
/// Implementations must be safe to share between services; all operations
/// are synchronous and run to completion.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` if the key is absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing an absent key is not an error
    fn remove(&self, key: &str) -> Result<()>;
}

/// Trait defining the interface for design storage operations
pub trait DesignStorage: Send + Sync {
    /// List all designs in insertion order
    ///
    /// Never fails: missing or corrupt storage reads as an empty list.
    fn list_designs(&self) -> Vec<Design>;

    /// Find a single design by ID
    fn get_design(&self, design_id: i64) -> Option<Design> {
        self.list_designs().into_iter().find(|d| d.id == design_id)
    }

    /// Assign an ID, fill the default image path, append and persist
    fn create_design(&self, design: NewDesign) -> Result<Design>;

    /// Delete a design by ID
    /// Returns true if the design was found and deleted, false otherwise
    fn delete_design(&self, design_id: i64) -> Result<bool>;
}

/// Trait defining the interface for booking storage operations
///
/// The store itself does not check for slot conflicts; the booking
/// service re-checks availability before calling `create_booking`.
pub trait BookingStorage: Send + Sync {
    /// List all bookings in insertion order
    ///
    /// Never fails: missing or corrupt storage reads as an empty list.
    fn list_bookings(&self) -> Vec<Booking>;

    /// Times already taken on `date`, including stored records that are
    /// too incomplete to list
    fn booked_times(&self, date: &str) -> Vec<String> {
        self.list_bookings()
            .into_iter()
            .filter(|b| b.booking_date == date)
            .map(|b| b.booking_time)
            .collect()
    }

    /// Assign an ID and creation time, mark confirmed, append and persist
    fn create_booking(&self, booking: NewBooking) -> Result<Booking>;
}

/// A host-provided write target that mirrors created records
///
/// Mirroring is best-effort: callers log and swallow any error.
pub trait ExternalSink: Send + Sync {
    fn insert_data(&self, collection: &str, record: &serde_json::Value) -> Result<()>;
}
