//! Admin dashboard read models: the bookings table and its counters.

use chrono::NaiveDate;
use shared::{BookingRow, DashboardStats};
use std::collections::HashMap;
use std::sync::Arc;

use crate::backend::storage::{BookingStorage, DesignStorage};

/// Shown in place of a design title when the booking has no live design
pub const CONSULTATION_ONLY: &str = "Consultation Only";

#[derive(Clone)]
pub struct DashboardService {
    booking_storage: Arc<dyn BookingStorage>,
    design_storage: Arc<dyn DesignStorage>,
}

impl DashboardService {
    pub fn new(booking_storage: Arc<dyn BookingStorage>, design_storage: Arc<dyn DesignStorage>) -> Self {
        Self {
            booking_storage,
            design_storage,
        }
    }

    /// One row per booking in stored order, with the design resolved by id
    pub fn bookings_table(&self) -> Vec<BookingRow> {
        let titles: HashMap<i64, String> = self
            .design_storage
            .list_designs()
            .into_iter()
            .map(|d| (d.id, d.title))
            .collect();

        self.booking_storage
            .list_bookings()
            .into_iter()
            .map(|b| BookingRow {
                design_name: b
                    .design_id
                    .and_then(|id| titles.get(&id).cloned())
                    .unwrap_or_else(|| CONSULTATION_ONLY.to_string()),
                booking_id: b.id,
                booking_date: b.booking_date,
                booking_time: b.booking_time,
                customer_name: b.customer_name,
                customer_mobile: b.customer_mobile,
                status: b.status,
            })
            .collect()
    }

    /// Totals for the stat tiles; "upcoming" counts bookings on or after `today`
    pub fn stats(&self, today: NaiveDate) -> DashboardStats {
        let bookings = self.booking_storage.list_bookings();
        let upcoming_bookings = bookings
            .iter()
            .filter(|b| {
                NaiveDate::parse_from_str(&b.booking_date, "%Y-%m-%d")
                    .map(|date| date >= today)
                    .unwrap_or(false)
            })
            .count();

        DashboardStats {
            total_bookings: bookings.len(),
            upcoming_bookings,
        }
    }
}
