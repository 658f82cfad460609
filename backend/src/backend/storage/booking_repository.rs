//! # Booking Repository
//!
//! Stores fitting appointments as a JSON array under the `tailor_bookings` key.
//! Records are append-only; this repository never updates or deletes.
//! Stored entries that no longer parse as `Booking` are kept on every write
//! and still hold their slot.

use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use log::info;
use shared::{Booking, BookingStatus};
use std::sync::Arc;

use super::collection::{append_record, load_collection, load_raw, max_raw_id, raw_str};
use super::id_generator::IdGenerator;
use super::sink::mirror_to_sink;
use super::traits::{BookingStorage, ExternalSink, KeyValueStore};
use super::BOOKINGS_KEY;
use crate::backend::domain::commands::NewBooking;

#[derive(Clone)]
pub struct BookingRepository {
    store: Arc<dyn KeyValueStore>,
    sink: Option<Arc<dyn ExternalSink>>,
    ids: Arc<IdGenerator>,
}

impl BookingRepository {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        sink: Option<Arc<dyn ExternalSink>>,
        ids: Arc<IdGenerator>,
    ) -> Self {
        Self { store, sink, ids }
    }
}

impl BookingStorage for BookingRepository {
    fn list_bookings(&self) -> Vec<Booking> {
        load_collection(self.store.as_ref(), BOOKINGS_KEY)
    }

    fn booked_times(&self, date: &str) -> Vec<String> {
        load_raw(self.store.as_ref(), BOOKINGS_KEY)
            .iter()
            .filter(|value| raw_str(value, "booking_date").map(str::trim) == Some(date))
            .filter_map(|value| raw_str(value, "booking_time"))
            .map(|time| time.trim().to_string())
            .collect()
    }

    fn create_booking(&self, booking: NewBooking) -> Result<Booking> {
        let mut stored = load_raw(self.store.as_ref(), BOOKINGS_KEY);

        let created = Booking {
            id: self.ids.next_id(max_raw_id(&stored)),
            design_id: booking.design_id,
            customer_name: booking.customer_name,
            customer_mobile: booking.customer_mobile,
            booking_date: booking.booking_date,
            booking_time: booking.booking_time,
            status: BookingStatus::Confirmed,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };

        append_record(self.store.as_ref(), BOOKINGS_KEY, &mut stored, &created)?;
        info!(
            "Stored booking {} for {} at {}",
            created.id, created.booking_date, created.booking_time
        );

        mirror_to_sink(self.sink.as_ref(), "bookings", &created);
        Ok(created)
    }
}
