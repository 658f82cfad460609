//! First-run seeding of the local collections.

use anyhow::{Context, Result};
use log::info;
use shared::{Booking, Design};

use super::collection::save_collection;
use super::traits::KeyValueStore;
use super::{BOOKINGS_KEY, DESIGNS_KEY};

/// The sample catalog written the first time the store is opened
pub fn sample_designs() -> Vec<Design> {
    vec![
        Design {
            id: 1,
            title: "Classic Navy Bespoke Suit".to_string(),
            price: 1200.0,
            days_to_complete: 14,
            category: "Suit".to_string(),
            description: "Italian wool, hand-stitched lapels, and a perfect custom fit.".to_string(),
            image_url: "images/suit1.jpg".to_string(),
            image_type: "suit".to_string(),
        },
        Design {
            id: 2,
            title: "Evening Silk Gown".to_string(),
            price: 850.0,
            days_to_complete: 21,
            category: "Dress".to_string(),
            description: "Elegant floor-length silk gown with delicate embroidery.".to_string(),
            image_url: "images/dress1.jpg".to_string(),
            image_type: "dress".to_string(),
        },
        Design {
            id: 3,
            title: "Summer Linen Ensemble".to_string(),
            price: 450.0,
            days_to_complete: 10,
            category: "Casual".to_string(),
            description: "Breathable linen fabric perfect for summer events.".to_string(),
            image_url: "images/fabric1.jpg".to_string(),
            image_type: "fabric".to_string(),
        },
    ]
}

/// Seed designs and initialize bookings when their keys are absent.
///
/// Present keys are left untouched, even if they hold an empty array.
pub fn initialize_store(store: &dyn KeyValueStore) -> Result<()> {
    if store
        .get(DESIGNS_KEY)
        .context("Failed to check design collection")?
        .is_none()
    {
        save_collection(store, DESIGNS_KEY, &sample_designs())?;
        info!("Seeded design catalog with sample designs");
    }

    if store
        .get(BOOKINGS_KEY)
        .context("Failed to check booking collection")?
        .is_none()
    {
        save_collection::<Booking>(store, BOOKINGS_KEY, &[])?;
        info!("Initialized empty booking collection");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::collection::load_collection;
    use crate::backend::storage::MemoryStore;

    #[test]
    fn test_first_run_seeds_both_collections() {
        let store = MemoryStore::new();
        initialize_store(&store).unwrap();

        let designs: Vec<Design> = load_collection(&store, DESIGNS_KEY);
        assert_eq!(designs.len(), 3);
        assert_eq!(designs[0].title, "Classic Navy Bespoke Suit");
        assert_eq!(store.get(BOOKINGS_KEY).unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn test_existing_data_is_not_reseeded() {
        let store = MemoryStore::new();
        store.set(DESIGNS_KEY, "[]").unwrap();
        store
            .set(
                BOOKINGS_KEY,
                r#"[{"id":9,"design_id":1,"customer_name":"A","customer_mobile":"1","booking_date":"2025-06-01","booking_time":"10:00 AM","status":"confirmed","created_at":"2025-05-01T00:00:00Z"}]"#,
            )
            .unwrap();

        initialize_store(&store).unwrap();
        initialize_store(&store).unwrap();

        assert_eq!(store.get(DESIGNS_KEY).unwrap(), Some("[]".to_string()));
        let bookings: Vec<Booking> = load_collection(&store, BOOKINGS_KEY);
        assert_eq!(bookings.len(), 1);
    }
}
