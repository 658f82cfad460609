use shared::CreateDesignRequest;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AddDesignFormProps {
    pub form_error: Option<String>,
    pub on_submit: Callback<CreateDesignRequest>,
    pub on_cancel: Callback<()>,
}

fn input_value(e: &Event) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

/// Admin panel for adding a design; fields are kept as typed text and
/// coerced by the catalog service
#[function_component(AddDesignForm)]
pub fn add_design_form(props: &AddDesignFormProps) -> Html {
    let form = use_state(|| CreateDesignRequest {
        image_type: "suit".to_string(),
        ..CreateDesignRequest::default()
    });

    let update = |apply: fn(&mut CreateDesignRequest, String)| {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let mut next = (*form).clone();
            apply(&mut next, input_value(&e));
            form.set(next);
        })
    };

    let on_image_type = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let mut next = (*form).clone();
            next.image_type = e.target_unchecked_into::<HtmlSelectElement>().value();
            form.set(next);
        })
    };

    let on_description = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let mut next = (*form).clone();
            next.description = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit((*form).clone());
        })
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    html! {
        <section id="add-design-panel" class="panel">
            <h3>{"Add New Design"}</h3>

            {if let Some(error) = props.form_error.as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}

            <form id="addDesignForm" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="title">{"Title"}</label>
                    <input type="text" id="title" required=true value={form.title.clone()}
                        onchange={update(|f, v| f.title = v)} />
                </div>
                <div class="form-group">
                    <label for="price">{"Price ($)"}</label>
                    <input type="number" id="price" min="0" step="0.01" required=true value={form.price.clone()}
                        onchange={update(|f, v| f.price = v)} />
                </div>
                <div class="form-group">
                    <label for="days_to_complete">{"Days to Complete"}</label>
                    <input type="number" id="days_to_complete" min="1" required=true value={form.days_to_complete.clone()}
                        onchange={update(|f, v| f.days_to_complete = v)} />
                </div>
                <div class="form-group">
                    <label for="category">{"Category"}</label>
                    <input type="text" id="category" value={form.category.clone()}
                        onchange={update(|f, v| f.category = v)} />
                </div>
                <div class="form-group">
                    <label for="image_type">{"Image"}</label>
                    <select id="image_type" onchange={on_image_type}>
                        <option value="suit" selected={form.image_type == "suit"}>{"Suit"}</option>
                        <option value="dress" selected={form.image_type == "dress"}>{"Dress"}</option>
                        <option value="fabric" selected={form.image_type == "fabric"}>{"Fabric"}</option>
                    </select>
                </div>
                <div class="form-group">
                    <label for="description">{"Description"}</label>
                    <textarea id="description" value={form.description.clone()} onchange={on_description} />
                </div>

                <div class="form-actions">
                    <button type="submit" class="btn btn-primary">{"Save Design"}</button>
                    <button type="button" class="btn btn-outline" onclick={on_cancel}>{"Cancel"}</button>
                </div>
            </form>
        </section>
    }
}
