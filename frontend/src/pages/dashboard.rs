use chrono::Local;
use master_tailor_backend::backend::domain::DashboardAccess;
use shared::CreateDesignRequest;
use yew::prelude::*;

use crate::components::bookings_table::BookingsTable;
use crate::components::design_card::AdminDesignCardView;
use crate::components::forms::add_design_form::AddDesignForm;
use crate::services::logging::Logger;
use crate::services::shop::{navigate, PageProps};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Tab {
    Bookings,
    Designs,
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &PageProps) -> Html {
    let shop = props.shop.clone();
    let active_tab = use_state(|| Tab::Bookings);
    let show_form = use_state(|| false);
    let form_error = use_state(|| Option::<String>::None);
    // Bumped after every write so the lists below are re-read
    let revision = use_state(|| 0u32);

    let access = shop.session_gate.enter_dashboard();
    use_effect_with(access, |access| {
        if let DashboardAccess::Redirect(page) = access {
            navigate(*page);
        }
    });
    if access != DashboardAccess::Granted {
        return html! {};
    }

    let on_logout = {
        let shop = shop.clone();
        Callback::from(move |_: MouseEvent| match shop.session_gate.logout() {
            Ok(page) => navigate(page),
            Err(e) => Logger::error_with_component("dashboard", &format!("Logout failed: {}", e)),
        })
    };

    let select_tab = |tab: Tab| {
        let active_tab = active_tab.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            active_tab.set(tab);
        })
    };

    let on_delete = {
        let shop = shop.clone();
        let revision = revision.clone();
        Callback::from(move |design_id: i64| {
            if !gloo::dialogs::confirm("Delete this design?") {
                return;
            }
            match shop.catalog_service.delete_design(design_id) {
                Ok(_) => revision.set(*revision + 1),
                Err(e) => Logger::error_with_component("dashboard", &e.to_string()),
            }
        })
    };

    let on_add_design = {
        let shop = shop.clone();
        let show_form = show_form.clone();
        let form_error = form_error.clone();
        let revision = revision.clone();
        Callback::from(move |request: CreateDesignRequest| {
            match shop.catalog_service.submit_design(request) {
                Ok(_) => {
                    form_error.set(None);
                    show_form.set(false);
                    revision.set(*revision + 1);
                    gloo::dialogs::alert("Design Added Successfully!");
                }
                Err(e) => form_error.set(Some(e.to_string())),
            }
        })
    };

    let on_open_form = {
        let show_form = show_form.clone();
        Callback::from(move |_: MouseEvent| show_form.set(true))
    };
    let on_cancel_form = {
        let show_form = show_form.clone();
        let form_error = form_error.clone();
        Callback::from(move |_: ()| {
            form_error.set(None);
            show_form.set(false);
        })
    };

    let tab_class = |tab: Tab| {
        if *active_tab == tab {
            "tab-link active"
        } else {
            "tab-link"
        }
    };

    let content = match *active_tab {
        Tab::Bookings => {
            let rows = shop.dashboard_service.bookings_table();
            let stats = shop.dashboard_service.stats(Local::now().date_naive());
            html! { <BookingsTable {rows} {stats} /> }
        }
        Tab::Designs => {
            let cards = shop.catalog_service.admin_catalog();
            html! {
                <section id="designs-tab" class="tab-content active">
                    {if *show_form {
                        html! {
                            <AddDesignForm
                                form_error={(*form_error).clone()}
                                on_submit={on_add_design}
                                on_cancel={on_cancel_form}
                            />
                        }
                    } else {
                        html! {
                            <button id="add-design-btn" class="btn btn-primary" onclick={on_open_form}>
                                {"+ Add Design"}
                            </button>
                        }
                    }}
                    <div id="admin-designs-list" class="designs-grid">
                        {for cards.into_iter().map(|card| html! {
                            <AdminDesignCardView key={card.id} card={card.clone()} on_delete={on_delete.clone()} />
                        })}
                    </div>
                </section>
            }
        }
    };

    html! {
        <div class="dashboard" data-revision={revision.to_string()}>
            <nav class="dashboard-nav">
                <a href="#" class={tab_class(Tab::Bookings)} onclick={select_tab(Tab::Bookings)}>{"Bookings"}</a>
                <a href="#" class={tab_class(Tab::Designs)} onclick={select_tab(Tab::Designs)}>{"Designs"}</a>
                <button id="logoutBtn" class="btn btn-outline" onclick={on_logout}>{"Logout"}</button>
            </nav>
            {content}
        </div>
    }
}
