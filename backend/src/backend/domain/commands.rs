// backend/src/backend/domain/commands.rs

//! Domain-level command types
//! These structs carry already-coerced input into the storage layer. Front
//! ends submit the raw form DTOs from the `shared` crate; the services are
//! responsible for turning them into these types.

/// Input for creating a new design (ID and default image are filled by the store).
#[derive(Debug, Clone, PartialEq)]
pub struct NewDesign {
    pub title: String,
    pub price: f64,
    pub days_to_complete: u32,
    pub category: String,
    pub description: String,
    pub image_url: Option<String>,
    pub image_type: String,
}

/// Input for creating a new booking (ID, status and timestamp are filled by the store).
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub design_id: Option<i64>,
    pub customer_name: String,
    pub customer_mobile: String,
    pub booking_date: String,
    pub booking_time: String,
}
