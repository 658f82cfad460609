//! Lead-capture mirror through the host page's `window.LeadGenRuntime`.

use anyhow::{anyhow, Result};
use js_sys::{Function, Reflect, JSON};
use master_tailor_backend::backend::storage::ExternalSink;
use wasm_bindgen::{JsCast, JsValue};

use super::logging::Logger;

const RUNTIME_PROPERTY: &str = "LeadGenRuntime";
const INSERT_METHOD: &str = "insertData";

/// Calls `window.LeadGenRuntime.insertData(collection, record)` when the
/// host provides it. The runtime is looked up on every call since the host
/// may inject it after the page has loaded.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeadGenSink;

impl LeadGenSink {
    fn insert_function() -> Option<(JsValue, Function)> {
        let window: JsValue = gloo::utils::window().into();
        let runtime = Reflect::get(&window, &JsValue::from_str(RUNTIME_PROPERTY)).ok()?;
        if runtime.is_undefined() || runtime.is_null() {
            return None;
        }
        let insert = Reflect::get(&runtime, &JsValue::from_str(INSERT_METHOD)).ok()?;
        let insert = insert.dyn_into::<Function>().ok()?;
        Some((runtime, insert))
    }
}

impl ExternalSink for LeadGenSink {
    fn insert_data(&self, collection: &str, record: &serde_json::Value) -> Result<()> {
        let Some((runtime, insert)) = Self::insert_function() else {
            Logger::debug_with_component("sink", "Platform DB not available, using localStorage");
            return Ok(());
        };

        let record = JSON::parse(&record.to_string())
            .map_err(|e| anyhow!("Failed to convert {} record for the host runtime: {:?}", collection, e))?;
        insert
            .call2(&runtime, &JsValue::from_str(collection), &record)
            .map_err(|e| anyhow!("LeadGenRuntime.insertData('{}') threw: {:?}", collection, e))?;
        Ok(())
    }
}
