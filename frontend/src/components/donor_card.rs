use shared::views::DonorCardView;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DonorCardProps {
    pub card: DonorCardView,
}

#[function_component(DonorCard)]
pub fn donor_card(props: &DonorCardProps) -> Html {
    let card = &props.card;

    html! {
        <div class="donor-card">
            <div class="donor-header">
                <div class="donor-info">
                    <h3>{&card.name}</h3>
                    <div class="donor-location">{format!("📍 {}", card.city)}</div>
                </div>
                <div class="blood-group-badge">{&card.blood_group}</div>
            </div>
            <div class="status-badge status-active">{&card.status_label}</div>
            <p class="last-donation">{format!("Last Donation: {}", card.last_donation)}</p>
            <a href={card.contact_url.clone()} target="_blank" rel="noopener" class="btn btn-whatsapp">
                {"Contact via WhatsApp"}
            </a>
        </div>
    }
}

/// Grey placeholder shown while a search is pending
#[function_component(SkeletonCard)]
pub fn skeleton_card() -> Html {
    html! {
        <div class="donor-card skeleton-card">
            <div class="skeleton-header"></div>
            <div class="skeleton-body"></div>
            <div class="skeleton-btn"></div>
        </div>
    }
}
