//! Fitting-slot booking logic.
//!
//! Availability is always computed from the stored bookings at call time,
//! and re-checked at submission, so two tabs sharing one store cannot both
//! confirm the same slot through this service.

use chrono::{Days, NaiveDate};
use log::{info, warn};
use shared::{BookingConfirmation, CreateBookingRequest, SlotOption, TimeSlot};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

use super::commands::NewBooking;
use crate::backend::storage::{BookingStorage, DesignStorage};

/// Completion time assumed when the booked design no longer exists
pub const DEFAULT_COMPLETION_DAYS: u32 = 14;

#[derive(Debug, Error)]
pub enum BookingError {
    /// The slot was taken after the form was rendered; `refreshed_slots`
    /// is the current availability for the chosen date
    #[error("Sorry, that slot was just booked! Please choose another.")]
    SlotTaken {
        booking_date: String,
        booking_time: String,
        refreshed_slots: Vec<SlotOption>,
    },
    /// A non-blank time that is not one of the daily slot labels
    #[error("Unknown time slot '{0}'. Please choose one of the listed times.")]
    UnknownSlot(String),
    #[error("Failed to save booking: {0}")]
    Storage(#[from] anyhow::Error),
}

/// Service for slot availability and booking submission
#[derive(Clone)]
pub struct BookingService {
    booking_storage: Arc<dyn BookingStorage>,
    design_storage: Arc<dyn DesignStorage>,
    default_completion_days: u32,
}

impl BookingService {
    pub fn new(
        booking_storage: Arc<dyn BookingStorage>,
        design_storage: Arc<dyn DesignStorage>,
        default_completion_days: u32,
    ) -> Self {
        Self {
            booking_storage,
            design_storage,
            default_completion_days,
        }
    }

    /// The full daily schedule for `date`, with booked slots disabled
    pub fn list_available_slots(&self, date: &str) -> Vec<SlotOption> {
        let booked = self.booking_storage.booked_times(date.trim());
        let taken: HashSet<&str> = booked.iter().map(String::as_str).collect();

        TimeSlot::ALL
            .iter()
            .map(|slot| {
                let available = !taken.contains(slot.label());
                SlotOption {
                    slot: *slot,
                    display: if available {
                        slot.label().to_string()
                    } else {
                        format!("{} (Booked)", slot.label())
                    },
                    available,
                }
            })
            .collect()
    }

    /// Re-validate the slot against current storage and persist the booking
    pub fn submit_booking(&self, request: CreateBookingRequest) -> Result<BookingConfirmation, BookingError> {
        let booking_date = request.booking_date.trim().to_string();
        let booking_time = normalize_slot_label(&request.booking_time)?;

        let booked = self.booking_storage.booked_times(&booking_date);
        if is_slot_taken(&booked, &booking_date, &booking_time) {
            warn!("Rejected booking: {} {} is already taken", booking_date, booking_time);
            return Err(BookingError::SlotTaken {
                refreshed_slots: self.list_available_slots(&booking_date),
                booking_date,
                booking_time,
            });
        }

        let design_id = request
            .design_id
            .as_deref()
            .and_then(|id| id.trim().parse::<i64>().ok());

        let booking = self.booking_storage.create_booking(NewBooking {
            design_id,
            customer_name: request.customer_name.trim().to_string(),
            customer_mobile: request.customer_mobile.trim().to_string(),
            booking_date: booking_date.clone(),
            booking_time: booking_time.clone(),
        })?;

        let delivery_date = self.estimate_delivery_date(&booking_date, design_id);
        info!(
            "Confirmed booking {} on {} at {} (delivery {:?})",
            booking.id, booking_date, booking_time, delivery_date
        );

        Ok(BookingConfirmation {
            booking,
            booking_date,
            booking_time,
            delivery_date,
        })
    }

    /// Booking date plus the design's completion time, as YYYY-MM-DD
    ///
    /// Falls back to the default completion time when the design is
    /// missing; returns `None` only when the booking date is unreadable.
    pub fn estimate_delivery_date(&self, booking_date: &str, design_id: Option<i64>) -> Option<String> {
        let date = match NaiveDate::parse_from_str(booking_date.trim(), "%Y-%m-%d") {
            Ok(date) => date,
            Err(e) => {
                warn!("Cannot estimate delivery for booking date '{}': {}", booking_date, e);
                return None;
            }
        };

        let days = self.completion_days(design_id);
        date.checked_add_days(Days::new(u64::from(days)))
            .map(|delivery| delivery.format("%Y-%m-%d").to_string())
    }

    /// Hint shown under the design dropdown
    pub fn completion_estimate(&self, design_id: Option<i64>) -> Option<String> {
        let design = self.design_storage.get_design(design_id?)?;
        Some(format!(
            "Estimated completion: {} days from fitting.",
            design.days_to_complete
        ))
    }

    fn completion_days(&self, design_id: Option<i64>) -> u32 {
        design_id
            .and_then(|id| self.design_storage.get_design(id))
            .map(|design| design.days_to_complete)
            .unwrap_or(self.default_completion_days)
    }
}

/// Canonical slot label for `time`; blank passes through unchanged
fn normalize_slot_label(time: &str) -> Result<String, BookingError> {
    let time = time.trim();
    if time.is_empty() {
        return Ok(String::new());
    }
    TimeSlot::from_label(time)
        .map(|slot| slot.label().to_string())
        .map_err(|_| {
            warn!("Rejected booking: '{}' is not a slot label", time);
            BookingError::UnknownSlot(time.to_string())
        })
}

/// A blank date or time never conflicts; the submission goes through and
/// the gap shows up in the admin table instead.
fn is_slot_taken(booked_times: &[String], date: &str, time: &str) -> bool {
    if date.is_empty() || time.is_empty() {
        return false;
    }
    booked_times.iter().any(|booked| booked == time)
}
