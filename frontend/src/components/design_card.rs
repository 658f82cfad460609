use shared::{AdminDesignCard, DesignCard};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DesignCardProps {
    pub card: DesignCard,
}

#[function_component(DesignCardView)]
pub fn design_card_view(props: &DesignCardProps) -> Html {
    let card = &props.card;
    html! {
        <div class="design-card">
            <img src={card.image_url.clone()} alt={card.title.clone()} class="design-image" />
            <div class="design-details">
                <div class="design-price">{&card.formatted_price}</div>
                <h3>{&card.title}</h3>
                <p class="design-meta">{&card.wait_time}</p>
                <p>{&card.description}</p>
                <a href={card.booking_link.clone()} class="btn btn-primary btn-block">{"Book Fitting"}</a>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AdminDesignCardProps {
    pub card: AdminDesignCard,
    pub on_delete: Callback<i64>,
}

/// Catalog card on the dashboard, with a delete button
#[function_component(AdminDesignCardView)]
pub fn admin_design_card_view(props: &AdminDesignCardProps) -> Html {
    let card = &props.card;
    let on_click = {
        let on_delete = props.on_delete.clone();
        let id = card.id;
        Callback::from(move |_: MouseEvent| on_delete.emit(id))
    };

    html! {
        <div class="design-card">
            <div class="design-thumb">
                <img src={card.image_url.clone()} alt={card.title.clone()} />
            </div>
            <div class="design-details">
                <h4>{&card.title}</h4>
                <p>{&card.summary}</p>
                <button onclick={on_click} class="btn btn-outline btn-danger">{"Delete"}</button>
            </div>
        </div>
    }
}
