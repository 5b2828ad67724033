use yew::prelude::*;

use super::donor_card::{DonorCard, SkeletonCard};
use crate::hooks::use_donor_search::SearchView;

#[derive(Properties, PartialEq)]
pub struct DonorGridProps {
    pub view: SearchView,
    pub skeleton_cards: usize,
}

#[function_component(DonorGrid)]
pub fn donor_grid(props: &DonorGridProps) -> Html {
    let grid = match &props.view {
        SearchView::Pending => html! {
            <>{for (0..props.skeleton_cards).map(|_| html! { <SkeletonCard /> })}</>
        },
        SearchView::Found(cards) => html! {
            <>{for cards.iter().map(|card| html! {
                <DonorCard key={card.id.to_string()} card={card.clone()} />
            })}</>
        },
        SearchView::NoResults | SearchView::Failed(_) => html! {},
    };

    html! {
        <>
            <div id="donorsGrid" class="donors-grid">{grid}</div>

            {if props.view == SearchView::NoResults {
                html! {
                    <div id="noResults" class="no-results">
                        <h3>{"No donors found"}</h3>
                        <p>{"Try another blood group or city."}</p>
                    </div>
                }
            } else { html! {} }}

            {if let SearchView::Failed(message) = &props.view {
                html! { <div class="form-message error">{message}</div> }
            } else { html! {} }}
        </>
    }
}
