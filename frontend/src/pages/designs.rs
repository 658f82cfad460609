use shared::CatalogView;
use yew::prelude::*;

use crate::components::design_card::DesignCardView;
use crate::services::shop::PageProps;

#[function_component(DesignsPage)]
pub fn designs_page(props: &PageProps) -> Html {
    let view = {
        let shop = props.shop.clone();
        use_memo((), move |_| shop.catalog_service.catalog_view())
    };

    match &*view {
        CatalogView::Empty { message } => html! {
            <div id="designs-grid">
                <p class="no-data">{message}</p>
            </div>
        },
        CatalogView::Cards(cards) => html! {
            <div id="designs-grid" class="designs-grid">
                {for cards.iter().map(|card| html! {
                    <DesignCardView key={card.id} card={card.clone()} />
                })}
            </div>
        },
    }
}
