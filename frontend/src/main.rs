mod components;
mod pages;
mod services;

use log::LevelFilter;
use master_tailor_backend::backend::domain::{PageInitializer, PageRouter};
use yew::html::BaseComponent;

use pages::booking::BookingPage;
use pages::dashboard::DashboardPage;
use pages::designs::DesignsPage;
use pages::login::LoginPage;
use services::logging::{self, Logger};
use services::shop::{open_shop, PageProps, ShopHandle};

/// Element each page renders into; falls back to `<body>`
const ROOT_ELEMENT_ID: &str = "app";

/// Mounts the Yew component for the routed page
struct PageMounter {
    shop: ShopHandle,
}

impl PageMounter {
    fn mount<C>(&self)
    where
        C: BaseComponent<Properties = PageProps>,
    {
        let props = PageProps {
            shop: self.shop.clone(),
        };
        match gloo::utils::document().get_element_by_id(ROOT_ELEMENT_ID) {
            Some(root) => yew::Renderer::<C>::with_root_and_props(root, props).render(),
            None => yew::Renderer::<C>::with_props(props).render(),
        };
    }
}

impl PageInitializer for PageMounter {
    fn init_designs(&mut self) {
        self.mount::<DesignsPage>();
    }

    fn init_booking(&mut self) {
        self.mount::<BookingPage>();
    }

    fn init_login(&mut self) {
        self.mount::<LoginPage>();
    }

    fn init_dashboard(&mut self) {
        self.mount::<DashboardPage>();
    }
}

fn main() {
    logging::init(LevelFilter::Info);

    // Opening the shop seeds storage on first visit, on every page
    let shop = match open_shop() {
        Ok(shop) => shop,
        Err(e) => {
            Logger::error_with_component("app", &format!("Failed to open local storage: {:#}", e));
            return;
        }
    };

    let path = gloo::utils::window().location().pathname().unwrap_or_default();
    let mut mounter = PageMounter { shop };
    if PageRouter::route(&path, &mut mounter).is_none() {
        Logger::debug_with_component("app", &format!("No page logic for {}", path));
    }
}
