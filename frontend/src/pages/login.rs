use master_tailor_backend::backend::domain::LoginOutcome;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::logging::Logger;
use crate::services::shop::{navigate, PageProps};

#[function_component(LoginPage)]
pub fn login_page(props: &PageProps) -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let login_error = use_state(|| Option::<String>::None);

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: Event| username.set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: Event| password.set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };

    let on_submit = {
        let shop = props.shop.clone();
        let username = username.clone();
        let password = password.clone();
        let login_error = login_error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match shop.session_gate.login(&username, &password) {
                Ok(LoginOutcome::Authenticated { redirect }) => navigate(redirect),
                Ok(LoginOutcome::Rejected { message }) => login_error.set(Some(message)),
                Err(e) => {
                    Logger::error_with_component("login", &e.to_string());
                    login_error.set(Some(e.to_string()));
                }
            }
        })
    };

    html! {
        <section class="login-section">
            <h2>{"Tailor Login"}</h2>
            <form id="loginForm" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="username">{"Username"}</label>
                    <input type="text" id="username" required=true value={(*username).clone()} onchange={on_username} />
                </div>
                <div class="form-group">
                    <label for="password">{"Password"}</label>
                    <input type="password" id="password" required=true value={(*password).clone()} onchange={on_password} />
                </div>
                {if let Some(error) = login_error.as_ref() {
                    html! { <p id="login-error" class="form-message error">{error}</p> }
                } else { html! {} }}
                <button type="submit" class="btn btn-primary btn-block">{"Login"}</button>
            </form>
        </section>
    }
}
