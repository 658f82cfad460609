//! # Design Repository
//!
//! Stores the design catalog as a JSON array under the `tailor_designs` key.
//!
//! ```json
//! [{"id":1,"title":"Classic Navy Bespoke Suit","price":1200,"days_to_complete":14,
//!   "category":"Suit","description":"...","image_url":"images/suit1.jpg","image_type":"suit"}]
//! ```

use anyhow::Result;
use log::{debug, info};
use shared::Design;
use std::sync::Arc;

use super::collection::{append_record, load_collection, load_raw, max_raw_id, raw_id, remove_records};
use super::id_generator::IdGenerator;
use super::sink::mirror_to_sink;
use super::traits::{DesignStorage, ExternalSink, KeyValueStore};
use super::DESIGNS_KEY;
use crate::backend::domain::commands::NewDesign;

/// Image family used when a design has neither an image URL nor a type
const DEFAULT_IMAGE_TYPE: &str = "suit";

#[derive(Clone)]
pub struct DesignRepository {
    store: Arc<dyn KeyValueStore>,
    sink: Option<Arc<dyn ExternalSink>>,
    ids: Arc<IdGenerator>,
}

impl DesignRepository {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        sink: Option<Arc<dyn ExternalSink>>,
        ids: Arc<IdGenerator>,
    ) -> Self {
        Self { store, sink, ids }
    }

    /// Placeholder image path derived from the image type
    pub fn default_image_url(image_type: &str) -> String {
        let image_type = image_type.trim();
        let image_type = if image_type.is_empty() {
            DEFAULT_IMAGE_TYPE
        } else {
            image_type
        };
        format!("images/{}1.jpg", image_type)
    }
}

impl DesignStorage for DesignRepository {
    fn list_designs(&self) -> Vec<Design> {
        load_collection(self.store.as_ref(), DESIGNS_KEY)
    }

    fn create_design(&self, design: NewDesign) -> Result<Design> {
        let mut stored = load_raw(self.store.as_ref(), DESIGNS_KEY);

        let id = self.ids.next_id(max_raw_id(&stored));
        let image_url = match design.image_url {
            Some(url) if !url.trim().is_empty() => url,
            _ => Self::default_image_url(&design.image_type),
        };

        let created = Design {
            id,
            title: design.title,
            price: design.price,
            days_to_complete: design.days_to_complete,
            category: design.category,
            description: design.description,
            image_url,
            image_type: design.image_type,
        };

        append_record(self.store.as_ref(), DESIGNS_KEY, &mut stored, &created)?;
        info!("Stored design {} '{}'", created.id, created.title);

        mirror_to_sink(self.sink.as_ref(), "designs", &created);
        Ok(created)
    }

    fn delete_design(&self, design_id: i64) -> Result<bool> {
        let removed = remove_records(self.store.as_ref(), DESIGNS_KEY, |value| {
            raw_id(value) == Some(design_id)
        })?;

        if removed == 0 {
            debug!("Design {} not found, nothing to delete", design_id);
            return Ok(false);
        }

        info!("Deleted design {}", design_id);
        Ok(true)
    }
}
