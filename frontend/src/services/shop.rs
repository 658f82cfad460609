//! Wiring between the browser and the backend services.

use anyhow::Result;
use master_tailor_backend::backend::domain::{
    CredentialVerifier, NoCredentials, Page, StaticCredentials, DEFAULT_COMPLETION_DAYS,
};
use master_tailor_backend::{Backend, BackendDependencies};
use std::rc::Rc;
use std::sync::Arc;
use yew::Properties;

use super::logging::Logger;
use super::sink::LeadGenSink;
use super::storage::BrowserStorage;

/// Admin credentials baked in at build time; with either missing, every
/// login is rejected
fn credential_verifier() -> Arc<dyn CredentialVerifier> {
    match (
        option_env!("TAILOR_ADMIN_USERNAME"),
        option_env!("TAILOR_ADMIN_PASSWORD"),
    ) {
        (Some(username), Some(password)) => Arc::new(StaticCredentials::new(username, password)),
        _ => {
            Logger::warn_with_component("shop", "No admin credentials were configured at build time");
            Arc::new(NoCredentials)
        }
    }
}

/// Build the backend over this browser profile's storage
pub fn open_shop() -> Result<ShopHandle> {
    let backend = Backend::new(BackendDependencies {
        local_store: Arc::new(BrowserStorage::local()),
        session_store: Arc::new(BrowserStorage::session()),
        sink: Some(Arc::new(LeadGenSink)),
        verifier: credential_verifier(),
        default_completion_days: DEFAULT_COMPLETION_DAYS,
    })?;
    Ok(ShopHandle(Rc::new(backend)))
}

/// Shared backend handed to every page component
#[derive(Clone)]
pub struct ShopHandle(pub Rc<Backend>);

impl PartialEq for ShopHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::ops::Deref for ShopHandle {
    type Target = Backend;

    fn deref(&self) -> &Backend {
        &self.0
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct PageProps {
    pub shop: ShopHandle,
}

/// Full page load of `page`
pub fn navigate(page: Page) {
    if let Err(e) = gloo::utils::window().location().set_href(page.path()) {
        Logger::error_with_component("router", &format!("Failed to navigate to {}: {:?}", page.path(), e));
    }
}

/// A query string parameter of the current URL
pub fn query_param(name: &str) -> Option<String> {
    let search = gloo::utils::window().location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(name).filter(|value| !value.is_empty())
}
