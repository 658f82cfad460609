//! Design catalog domain logic.
//!
//! Read side projects stored designs into public and admin cards; write side
//! coerces the admin form's text fields and delegates to `DesignStorage`.

use log::info;
use shared::{AdminDesignCard, CatalogView, CreateDesignRequest, Design, DesignCard, DesignOption};
use std::sync::Arc;
use thiserror::Error;

use super::commands::NewDesign;
use super::page_router::Page;
use crate::backend::storage::DesignStorage;

pub const EMPTY_CATALOG_MESSAGE: &str = "No designs available yet. Please check back later.";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Price must be a non-negative number, got '{0}'")]
    InvalidPrice(String),
    #[error("Days to complete must be a whole number of at least 1, got '{0}'")]
    InvalidDays(String),
    #[error("Failed to save design: {0}")]
    Storage(#[from] anyhow::Error),
}

/// Service for browsing and managing the design catalog
#[derive(Clone)]
pub struct CatalogService {
    design_storage: Arc<dyn DesignStorage>,
}

impl CatalogService {
    pub fn new(design_storage: Arc<dyn DesignStorage>) -> Self {
        Self { design_storage }
    }

    /// Public catalog: one card per design, or the "no data" placeholder
    pub fn catalog_view(&self) -> CatalogView {
        let designs = self.design_storage.list_designs();
        if designs.is_empty() {
            return CatalogView::Empty {
                message: EMPTY_CATALOG_MESSAGE.to_string(),
            };
        }
        CatalogView::Cards(designs.iter().map(Self::to_card).collect())
    }

    /// Admin catalog cards (rendered with a delete button)
    pub fn admin_catalog(&self) -> Vec<AdminDesignCard> {
        self.design_storage
            .list_designs()
            .into_iter()
            .map(|d| AdminDesignCard {
                summary: format!("{} • {}", format_price(d.price), d.category),
                id: d.id,
                title: d.title,
                image_url: d.image_url,
            })
            .collect()
    }

    /// Entries for the booking form's design dropdown
    pub fn design_options(&self) -> Vec<DesignOption> {
        self.design_storage
            .list_designs()
            .into_iter()
            .map(|d| DesignOption {
                id: d.id,
                label: format!("{} ({})", d.title, format_price(d.price)),
            })
            .collect()
    }

    /// Coerce the admin form and store the new design
    pub fn submit_design(&self, request: CreateDesignRequest) -> Result<Design, CatalogError> {
        let price = clean_and_parse_price(&request.price)
            .ok_or_else(|| CatalogError::InvalidPrice(request.price.clone()))?;
        let days_to_complete = parse_leading_integer(&request.days_to_complete)
            .filter(|days| *days >= 1)
            .and_then(|days| u32::try_from(days).ok())
            .ok_or_else(|| CatalogError::InvalidDays(request.days_to_complete.clone()))?;

        let design = self.design_storage.create_design(NewDesign {
            title: request.title.trim().to_string(),
            price,
            days_to_complete,
            category: request.category.trim().to_string(),
            description: request.description.trim().to_string(),
            image_url: request.image_url,
            image_type: request.image_type.trim().to_string(),
        })?;

        info!("Design '{}' added to catalog with id {}", design.title, design.id);
        Ok(design)
    }

    /// Delete a design; deleting an unknown id is a no-op returning false
    ///
    /// Bookings that reference the design are left alone and show as
    /// "Consultation Only" from then on.
    pub fn delete_design(&self, design_id: i64) -> Result<bool, CatalogError> {
        Ok(self.design_storage.delete_design(design_id)?)
    }

    fn to_card(design: &Design) -> DesignCard {
        DesignCard {
            id: design.id,
            title: design.title.clone(),
            image_url: design.image_url.clone(),
            formatted_price: format_price(design.price),
            wait_time: format!(
                "Wait time: {} days • {}",
                design.days_to_complete, design.category
            ),
            description: design.description.clone(),
            booking_link: format!("{}?design={}", Page::Booking.path(), design.id),
        }
    }
}

/// "$1200", "$99.5"
pub fn format_price(price: f64) -> String {
    format!("${}", price)
}

/// Parse a price the way a browser number field is read: surrounding
/// whitespace, a leading `$` and thousands separators are tolerated, then the
/// longest leading decimal number is taken ("100", "100.50", "120abc" → 120).
fn clean_and_parse_price(input: &str) -> Option<f64> {
    let cleaned = input.trim().trim_start_matches('$').replace(',', "");
    parse_leading_decimal(&cleaned)
        .filter(|price| price.is_finite() && *price >= 0.0)
        // -0 becomes 0
        .map(|price| price + 0.0)
}

fn parse_leading_decimal(input: &str) -> Option<f64> {
    let bytes = input.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    let number = &input[digits_start..end];
    if number.is_empty() || number == "." {
        return None;
    }
    input[..end].parse::<f64>().ok()
}

/// Longest leading integer ("5", " 7 days", "10.5" → 10)
fn parse_leading_integer(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digit_len = trimmed[sign_len..]
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digit_len == 0 {
        return None;
    }
    trimmed[..sign_len + digit_len].parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::test_utils::TestEnvironment;

    fn form(title: &str, price: &str, days: &str, image_type: &str) -> CreateDesignRequest {
        CreateDesignRequest {
            title: title.to_string(),
            price: price.to_string(),
            days_to_complete: days.to_string(),
            category: "Suit".to_string(),
            description: "Made to measure".to_string(),
            image_url: None,
            image_type: image_type.to_string(),
        }
    }

    #[test]
    fn test_string_fields_are_coerced() {
        let env = TestEnvironment::new();
        let catalog = &env.backend.catalog_service;

        let design = catalog.submit_design(form("X", "100", "5", "fabric")).unwrap();
        assert_eq!(design.price, 100.0);
        assert_eq!(design.days_to_complete, 5);
        assert_eq!(design.image_url, "images/fabric1.jpg");

        let stored = env.backend.design_storage.get_design(design.id).unwrap();
        assert_eq!(stored, design);

        let raw = serde_json::to_value(&stored).unwrap();
        assert!(raw["price"].is_number());
        assert!(raw["days_to_complete"].is_u64());
    }

    #[test]
    fn test_price_parsing_is_lenient_like_a_number_field() {
        assert_eq!(clean_and_parse_price("100"), Some(100.0));
        assert_eq!(clean_and_parse_price(" $1,250.75 "), Some(1250.75));
        assert_eq!(clean_and_parse_price("120abc"), Some(120.0));
        assert_eq!(clean_and_parse_price(".5"), Some(0.5));
        assert_eq!(clean_and_parse_price("0"), Some(0.0));
        assert_eq!(clean_and_parse_price("abc"), None);
        assert_eq!(clean_and_parse_price(""), None);
        assert_eq!(clean_and_parse_price("-10"), None);
    }

    #[test]
    fn test_days_parsing() {
        assert_eq!(parse_leading_integer("5"), Some(5));
        assert_eq!(parse_leading_integer(" 7 days"), Some(7));
        assert_eq!(parse_leading_integer("10.5"), Some(10));
        assert_eq!(parse_leading_integer("days"), None);
        assert_eq!(parse_leading_integer("-3"), Some(-3));
    }

    #[test]
    fn test_invalid_fields_are_rejected_without_writing() {
        let env = TestEnvironment::new();
        let catalog = &env.backend.catalog_service;
        let before = env.backend.design_storage.list_designs().len();

        assert!(matches!(
            catalog.submit_design(form("X", "cheap", "5", "suit")),
            Err(CatalogError::InvalidPrice(_))
        ));
        assert!(matches!(
            catalog.submit_design(form("X", "100", "0", "suit")),
            Err(CatalogError::InvalidDays(_))
        ));
        assert!(matches!(
            catalog.submit_design(form("X", "100", "soon", "suit")),
            Err(CatalogError::InvalidDays(_))
        ));
        assert_eq!(env.backend.design_storage.list_designs().len(), before);
    }

    #[test]
    fn test_catalog_cards_for_seeded_designs() {
        let env = TestEnvironment::new();
        let CatalogView::Cards(cards) = env.backend.catalog_service.catalog_view() else {
            panic!("seeded catalog should not be empty");
        };

        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].formatted_price, "$1200");
        assert_eq!(cards[0].wait_time, "Wait time: 14 days • Suit");
        assert_eq!(cards[0].booking_link, "booking.html?design=1");
        assert_eq!(cards[1].title, "Evening Silk Gown");
    }

    #[test]
    fn test_empty_catalog_shows_placeholder() {
        let env = TestEnvironment::new();
        let catalog = &env.backend.catalog_service;
        for id in [1, 2, 3] {
            assert!(catalog.delete_design(id).unwrap());
        }

        assert_eq!(
            catalog.catalog_view(),
            CatalogView::Empty {
                message: EMPTY_CATALOG_MESSAGE.to_string()
            }
        );
        assert!(catalog.admin_catalog().is_empty());
    }

    #[test]
    fn test_delete_missing_design_is_noop() {
        let env = TestEnvironment::new();
        let catalog = &env.backend.catalog_service;
        let before = env.backend.design_storage.list_designs();

        assert!(!catalog.delete_design(999).unwrap());
        assert_eq!(env.backend.design_storage.list_designs(), before);
    }

    #[test]
    fn test_admin_cards_and_options() {
        let env = TestEnvironment::new();
        let catalog = &env.backend.catalog_service;

        let admin = catalog.admin_catalog();
        assert_eq!(admin[1].summary, "$850 • Dress");

        let options = catalog.design_options();
        assert_eq!(options[2].label, "Summer Linen Ensemble ($450)");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1200.0), "$1200");
        assert_eq!(format_price(99.5), "$99.5");
    }

    #[test]
    fn test_negative_zero_price_is_stored_as_zero() {
        let price = clean_and_parse_price("-0").unwrap();
        assert!(price.is_sign_positive());
        assert_eq!(format_price(price), "$0");

        let env = TestEnvironment::new();
        let design = env
            .backend
            .catalog_service
            .submit_design(form("Alteration", "-0.00", "3", "fabric"))
            .unwrap();
        assert!(design.price.is_sign_positive());
        assert_eq!(CatalogService::to_card(&design).formatted_price, "$0");
    }
}
