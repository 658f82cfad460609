use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A garment design offered in the catalog.
///
/// Field names match the JSON records kept under the `tailor_designs` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Design {
    pub id: i64,
    pub title: String,
    /// Price in dollars (non-negative)
    pub price: f64,
    /// Calendar days from fitting until the garment is ready
    pub days_to_complete: u32,
    pub category: String,
    pub description: String,
    pub image_url: String,
    /// Image family used to derive a default image path (suit, dress, fabric, ...)
    #[serde(default)]
    pub image_type: String,
}

/// A confirmed fitting appointment.
///
/// Field names match the JSON records kept under the `tailor_bookings` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    /// Weak reference to `Design::id`; `None` for a consultation-only booking
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub design_id: Option<i64>,
    pub customer_name: String,
    pub customer_mobile: String,
    /// ISO calendar date (YYYY-MM-DD)
    pub booking_date: String,
    /// One of the `TimeSlot` labels, e.g. "10:00 AM"
    pub booking_time: String,
    pub status: BookingStatus,
    /// Submission timestamp (RFC 3339)
    pub created_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingStatus::Confirmed => write!(f, "confirmed"),
        }
    }
}

/// Booking forms submit the design reference as text, and a blank option
/// means "consultation only". Accept numbers, numeric strings, blanks and null.
fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Float(f64),
        Text(String),
    }

    let raw = Option::<RawId>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawId::Number(id)) => Some(id),
        Some(RawId::Float(id)) if id.fract() == 0.0 => Some(id as i64),
        Some(RawId::Float(_)) => None,
        Some(RawId::Text(text)) => text.trim().parse::<i64>().ok(),
        None => None,
    })
}

/// The fixed daily fitting schedule. Every calendar date offers the same
/// seven one-hour slots, each bookable once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
    #[serde(rename = "10:00 AM")]
    TenAm,
    #[serde(rename = "11:00 AM")]
    ElevenAm,
    #[serde(rename = "12:00 PM")]
    Noon,
    #[serde(rename = "02:00 PM")]
    TwoPm,
    #[serde(rename = "03:00 PM")]
    ThreePm,
    #[serde(rename = "04:00 PM")]
    FourPm,
    #[serde(rename = "05:00 PM")]
    FivePm,
}

impl TimeSlot {
    /// All slots in schedule order
    pub const ALL: [TimeSlot; 7] = [
        TimeSlot::TenAm,
        TimeSlot::ElevenAm,
        TimeSlot::Noon,
        TimeSlot::TwoPm,
        TimeSlot::ThreePm,
        TimeSlot::FourPm,
        TimeSlot::FivePm,
    ];

    /// The 12-hour display label stored in `Booking::booking_time`
    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::TenAm => "10:00 AM",
            TimeSlot::ElevenAm => "11:00 AM",
            TimeSlot::Noon => "12:00 PM",
            TimeSlot::TwoPm => "02:00 PM",
            TimeSlot::ThreePm => "03:00 PM",
            TimeSlot::FourPm => "04:00 PM",
            TimeSlot::FivePm => "05:00 PM",
        }
    }

    /// Parse a label; surrounding whitespace and AM/PM case are ignored
    pub fn from_label(label: &str) -> Result<Self, TimeSlotParseError> {
        let trimmed = label.trim();
        TimeSlot::ALL
            .iter()
            .copied()
            .find(|slot| slot.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| TimeSlotParseError(trimmed.to_string()))
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeSlotParseError(pub String);

impl fmt::Display for TimeSlotParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown time slot: '{}'", self.0)
    }
}

impl std::error::Error for TimeSlotParseError {}

/// One entry of the time dropdown on the booking form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotOption {
    pub slot: TimeSlot,
    /// Option text, e.g. "10:00 AM" or "10:00 AM (Booked)"
    pub display: String,
    pub available: bool,
}

/// Public catalog card for a single design
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignCard {
    pub id: i64,
    pub title: String,
    pub image_url: String,
    pub formatted_price: String, // e.g., "$1200"
    pub wait_time: String,       // e.g., "Wait time: 14 days • Suit"
    pub description: String,
    /// Deep link to the booking page with this design pre-selected
    pub booking_link: String,
}

/// What the public catalog page shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CatalogView {
    Cards(Vec<DesignCard>),
    /// No designs stored; show the placeholder instead of an empty grid
    Empty { message: String },
}

/// Admin catalog card with a delete action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminDesignCard {
    pub id: i64,
    pub title: String,
    pub image_url: String,
    pub summary: String, // e.g., "$1200 • Suit"
}

/// Entry in the booking form's design dropdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignOption {
    pub id: i64,
    pub label: String, // e.g., "Evening Silk Gown ($850)"
}

/// Admin "add design" form, exactly as typed (numbers still text)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateDesignRequest {
    pub title: String,
    pub price: String,
    pub days_to_complete: String,
    pub category: String,
    pub description: String,
    pub image_url: Option<String>,
    pub image_type: String,
}

/// Customer booking form, exactly as submitted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    /// Selected design id as text; blank for consultation only
    pub design_id: Option<String>,
    pub customer_name: String,
    pub customer_mobile: String,
    pub booking_date: String,
    pub booking_time: String,
}

/// Shown after a booking is persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub booking: Booking,
    pub booking_date: String,
    pub booking_time: String,
    /// Estimated delivery date (YYYY-MM-DD); `None` when the booking date is unreadable
    pub delivery_date: Option<String>,
}

/// Row in the admin bookings table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRow {
    pub booking_id: i64,
    pub booking_date: String,
    pub booking_time: String,
    pub customer_name: String,
    pub customer_mobile: String,
    /// Design title, or "Consultation Only" when the reference is missing
    pub design_name: String,
    pub status: BookingStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_bookings: usize,
    pub upcoming_bookings: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_slot_labels_in_schedule_order() {
        let labels: Vec<&str> = TimeSlot::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            vec!["10:00 AM", "11:00 AM", "12:00 PM", "02:00 PM", "03:00 PM", "04:00 PM", "05:00 PM"]
        );
    }

    #[test]
    fn test_time_slot_from_label() {
        assert_eq!(TimeSlot::from_label("12:00 PM").unwrap(), TimeSlot::Noon);
        assert_eq!(TimeSlot::from_label(" 05:00 PM ").unwrap(), TimeSlot::FivePm);
        assert_eq!(TimeSlot::from_label("10:00 am").unwrap(), TimeSlot::TenAm);
        assert!(TimeSlot::from_label("01:00 PM").is_err());
        assert!(TimeSlot::from_label("10:00").is_err());
        assert!(TimeSlot::from_label("").is_err());
    }

    #[test]
    fn test_time_slot_serializes_as_label() {
        let json = serde_json::to_string(&TimeSlot::TwoPm).unwrap();
        assert_eq!(json, "\"02:00 PM\"");
    }

    #[test]
    fn test_booking_accepts_browser_records() {
        // Bookings saved straight from a form carry the design id as text
        let json = r#"{
            "design_id": "2",
            "customer_name": "Asha",
            "customer_mobile": "555-0101",
            "booking_date": "2025-06-01",
            "booking_time": "10:00 AM",
            "id": 1717000000000,
            "created_at": "2025-05-29T10:00:00.000Z",
            "status": "confirmed"
        }"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.design_id, Some(2));
        assert_eq!(booking.status, BookingStatus::Confirmed);
    }

    #[test]
    fn test_booking_blank_design_is_consultation() {
        let json = r#"{
            "id": 5,
            "design_id": "",
            "customer_name": "Ben",
            "customer_mobile": "555-0102",
            "booking_date": "2025-06-01",
            "booking_time": "11:00 AM",
            "status": "confirmed",
            "created_at": "2025-05-29T10:00:00Z"
        }"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.design_id, None);

        let missing = json.replace("\"design_id\": \"\",", "");
        let booking: Booking = serde_json::from_str(&missing).unwrap();
        assert_eq!(booking.design_id, None);
    }

    #[test]
    fn test_design_round_trips_field_names() {
        let design = Design {
            id: 1,
            title: "Classic Navy Bespoke Suit".to_string(),
            price: 1200.0,
            days_to_complete: 14,
            category: "Suit".to_string(),
            description: "Italian wool".to_string(),
            image_url: "images/suit1.jpg".to_string(),
            image_type: "suit".to_string(),
        };
        let value = serde_json::to_value(&design).unwrap();
        assert_eq!(value["days_to_complete"], 14);
        assert_eq!(value["image_url"], "images/suit1.jpg");
    }
}
