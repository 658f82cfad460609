//! Page identity and one-shot initializer dispatch.
//!
//! Each page load picks exactly one initializer from the current path.
//! There is no client-side navigation: moving between pages is a full load.

use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Page {
    /// Public landing page; also the target after logout
    Home,
    Designs,
    Booking,
    TailorLogin,
    TailorDashboard,
}

impl Page {
    /// Pages with an initializer, in the order their path markers are tested
    const ROUTED: [(Page, &'static str); 4] = [
        (Page::Designs, "designs"),
        (Page::Booking, "booking"),
        (Page::TailorLogin, "tailor-login"),
        (Page::TailorDashboard, "tailor-dashboard"),
    ];

    /// Identify the routed page from a location path; `None` for pages
    /// without an initializer (including the home page)
    pub fn from_path(path: &str) -> Option<Page> {
        Self::ROUTED
            .iter()
            .find(|(_, marker)| path.contains(marker))
            .map(|(page, _)| *page)
    }

    /// Relative URL of the page
    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "index.html",
            Page::Designs => "designs.html",
            Page::Booking => "booking.html",
            Page::TailorLogin => "tailor-login.html",
            Page::TailorDashboard => "tailor-dashboard.html",
        }
    }
}

/// Per-page setup invoked by the router
pub trait PageInitializer {
    fn init_designs(&mut self);
    fn init_booking(&mut self);
    fn init_login(&mut self);
    fn init_dashboard(&mut self);
}

pub struct PageRouter;

impl PageRouter {
    /// Invoke the single initializer matching `path`; returns the page routed to
    pub fn route<I: PageInitializer + ?Sized>(path: &str, initializer: &mut I) -> Option<Page> {
        let page = Page::from_path(path);
        debug!("Routing '{}' to {:?}", path, page);

        match page {
            Some(Page::Designs) => initializer.init_designs(),
            Some(Page::Booking) => initializer.init_booking(),
            Some(Page::TailorLogin) => initializer.init_login(),
            Some(Page::TailorDashboard) => initializer.init_dashboard(),
            Some(Page::Home) | None => {}
        }
        page
    }
}
