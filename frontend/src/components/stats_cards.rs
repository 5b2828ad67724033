use shared::DonorStats;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatsCardsProps {
    pub stats: DonorStats,
}

#[function_component(StatsCards)]
pub fn stats_cards(props: &StatsCardsProps) -> Html {
    let stats = &props.stats;

    html! {
        <div class="stats-grid">
            <div class="stat-card">
                <h3>{stats.total}</h3>
                <p>{"Total Donors"}</p>
            </div>
            <div class="stat-card">
                <h3>{&stats.most_common_blood_group}</h3>
                <p>{"Most Common Type"}</p>
            </div>
            <div class="stat-card">
                <h3>{&stats.status_label}</h3>
                <p>{"System Status"}</p>
            </div>
        </div>
    }
}
