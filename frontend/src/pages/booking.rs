use master_tailor_backend::backend::domain::BookingError;
use shared::{BookingConfirmation, CreateBookingRequest, SlotOption};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::services::logging::Logger;
use crate::services::shop::{query_param, PageProps};

fn parse_design_id(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

#[function_component(BookingPage)]
pub fn booking_page(props: &PageProps) -> Html {
    let shop = props.shop.clone();

    let design_options = {
        let shop = shop.clone();
        use_memo((), move |_| shop.catalog_service.design_options())
    };

    // Pre-selected from designs.html?design=<id>
    let design_id = use_state(|| query_param("design").unwrap_or_default());
    let booking_date = use_state(String::new);
    let booking_time = use_state(String::new);
    let customer_name = use_state(String::new);
    let customer_mobile = use_state(String::new);
    let slots = use_state(Vec::<SlotOption>::new);
    let confirmation = use_state(|| Option::<BookingConfirmation>::None);

    let estimate = shop
        .booking_service
        .completion_estimate(parse_design_id(&design_id))
        .unwrap_or_default();

    let on_design = {
        let design_id = design_id.clone();
        Callback::from(move |e: Event| design_id.set(e.target_unchecked_into::<HtmlSelectElement>().value()))
    };

    let on_date = {
        let shop = shop.clone();
        let booking_date = booking_date.clone();
        let booking_time = booking_time.clone();
        let slots = slots.clone();
        Callback::from(move |e: Event| {
            let date = e.target_unchecked_into::<HtmlInputElement>().value();
            if date.is_empty() {
                return;
            }
            slots.set(shop.booking_service.list_available_slots(&date));
            booking_time.set(String::new());
            booking_date.set(date);
        })
    };

    let on_time = {
        let booking_time = booking_time.clone();
        Callback::from(move |e: Event| booking_time.set(e.target_unchecked_into::<HtmlSelectElement>().value()))
    };
    let on_name = {
        let customer_name = customer_name.clone();
        Callback::from(move |e: Event| customer_name.set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_mobile = {
        let customer_mobile = customer_mobile.clone();
        Callback::from(move |e: Event| customer_mobile.set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };

    let on_submit = {
        let shop = shop.clone();
        let design_id = design_id.clone();
        let booking_date = booking_date.clone();
        let booking_time = booking_time.clone();
        let customer_name = customer_name.clone();
        let customer_mobile = customer_mobile.clone();
        let slots = slots.clone();
        let confirmation = confirmation.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = CreateBookingRequest {
                design_id: Some((*design_id).clone()).filter(|id| !id.is_empty()),
                customer_name: (*customer_name).clone(),
                customer_mobile: (*customer_mobile).clone(),
                booking_date: (*booking_date).clone(),
                booking_time: (*booking_time).clone(),
            };

            match shop.booking_service.submit_booking(request) {
                Ok(confirmed) => confirmation.set(Some(confirmed)),
                Err(e) => {
                    gloo::dialogs::alert(&e.to_string());
                    match e {
                        BookingError::SlotTaken { refreshed_slots, .. } => {
                            slots.set(refreshed_slots);
                            booking_time.set(String::new());
                        }
                        other => Logger::error_with_component("booking", &other.to_string()),
                    }
                }
            }
        })
    };

    let on_new_booking = Callback::from(|_: MouseEvent| {
        if let Err(e) = gloo::utils::window().location().reload() {
            Logger::error_with_component("booking", &format!("Failed to reload: {:?}", e));
        }
    });

    if let Some(confirmed) = confirmation.as_ref() {
        return html! {
            <section id="booking-success" class="booking-success">
                <h2>{"Booking Confirmed!"}</h2>
                <p>{"Date: "}<strong id="summary-date">{&confirmed.booking_date}</strong></p>
                <p>{"Time: "}<strong id="summary-time">{&confirmed.booking_time}</strong></p>
                <p>{"Estimated delivery: "}
                    <strong id="summary-delivery">
                        {confirmed.delivery_date.clone().unwrap_or_else(|| "To be confirmed".to_string())}
                    </strong>
                </p>
                <button id="new-booking-btn" class="btn btn-outline" onclick={on_new_booking}>{"Book Another"}</button>
            </section>
        };
    }

    html! {
        <form id="bookingForm" class="booking-form" onsubmit={on_submit}>
            <div class="form-group">
                <label for="design_select">{"Design"}</label>
                <select id="design_select" onchange={on_design}>
                    <option value="" selected={design_id.is_empty()}>{"Consultation Only"}</option>
                    {for design_options.iter().map(|option| {
                        let value = option.id.to_string();
                        html! {
                            <option key={option.id} selected={*design_id == value} value={value.clone()}>
                                {&option.label}
                            </option>
                        }
                    })}
                </select>
                <small id="completion-estimate">{estimate}</small>
            </div>

            <div class="form-group">
                <label for="booking_date">{"Fitting Date"}</label>
                <input type="date" id="booking_date" required=true value={(*booking_date).clone()} onchange={on_date} />
            </div>

            <div class="form-group">
                <label for="booking_time">{"Time"}</label>
                <select id="booking_time" required=true disabled={booking_date.is_empty()} onchange={on_time}>
                    <option value="" selected={booking_time.is_empty()}>{"Select Time"}</option>
                    {for slots.iter().map(|slot| {
                        let label = slot.slot.label();
                        html! {
                            <option key={label} value={label} disabled={!slot.available}
                                selected={*booking_time == label}>
                                {&slot.display}
                            </option>
                        }
                    })}
                </select>
            </div>

            <div class="form-group">
                <label for="customer_name">{"Your Name"}</label>
                <input type="text" id="customer_name" required=true value={(*customer_name).clone()} onchange={on_name} />
            </div>
            <div class="form-group">
                <label for="customer_mobile">{"Mobile Number"}</label>
                <input type="tel" id="customer_mobile" required=true value={(*customer_mobile).clone()} onchange={on_mobile} />
            </div>

            <button type="submit" class="btn btn-primary btn-block">{"Confirm Booking"}</button>
        </form>
    }
}
