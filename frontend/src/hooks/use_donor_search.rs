use shared::search::{SearchOutcome, SearchQuery};
use shared::views::DonorCardView;
use shared::{DirectoryConfig, Donor, Debouncer};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::services::delay::TimerDelay;
use crate::services::directory::DirectoryClient;
use crate::services::logging::Logger;

/// What the donor grid currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum SearchView {
    /// A search is in flight; the grid shows skeleton cards
    Pending,
    Found(Vec<DonorCardView>),
    NoResults,
    Failed(String),
}

impl SearchView {
    fn cards(donors: &[Donor], config: &DirectoryConfig) -> Vec<DonorCardView> {
        donors.iter().map(|d| DonorCardView::new(d, config)).collect()
    }

    pub fn from_outcome(outcome: &SearchOutcome, config: &DirectoryConfig) -> Self {
        match outcome {
            SearchOutcome::Found(donors) => SearchView::Found(Self::cards(donors, config)),
            SearchOutcome::NoResults => SearchView::NoResults,
        }
    }

    /// The unfiltered listing shown on page load; empty is not "no results"
    pub fn listing(donors: &[Donor], config: &DirectoryConfig) -> Self {
        SearchView::Found(Self::cards(donors, config))
    }
}

/// Latest values of the search controls, read when a search starts
#[derive(Default)]
struct SearchInputs {
    blood_group: String,
    city: String,
}

pub struct UseDonorSearchResult {
    pub view: SearchView,
    pub skeleton_cards: usize,
    pub on_blood_group_change: Callback<Event>,
    pub on_city_input: Callback<InputEvent>,
}

#[hook]
pub fn use_donor_search(client: &DirectoryClient) -> UseDonorSearchResult {
    let view = use_state(|| SearchView::Pending);
    let inputs = use_mut_ref(SearchInputs::default);
    let debouncer = use_memo((), |_| Debouncer::new());

    // Initial listing straight from the store, no simulated latency
    {
        let client = client.clone();
        let view = view.clone();
        use_effect_with((), move |_| {
            match client.list_donors() {
                Ok(donors) => view.set(SearchView::listing(&donors, client.config())),
                Err(message) => view.set(SearchView::Failed(message)),
            }
            || ()
        });
    }

    let search = {
        let client = client.clone();
        let view = view.clone();
        let inputs = inputs.clone();

        use_callback((), move |_: (), _| {
            let query = {
                let inputs = inputs.borrow();
                SearchQuery::from_inputs(&inputs.blood_group, &inputs.city)
            };
            view.set(SearchView::Pending);

            let client = client.clone();
            let view = view.clone();
            spawn_local(async move {
                let next = match client.search(query).await {
                    Ok(outcome) => SearchView::from_outcome(&outcome, client.config()),
                    Err(message) => SearchView::Failed(message),
                };
                view.set(next);
            });
        })
    };

    // The dropdown searches right away
    let on_blood_group_change = {
        let inputs = inputs.clone();
        let search = search.clone();
        use_callback((), move |e: Event, _| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            inputs.borrow_mut().blood_group = select.value();
            search.emit(());
        })
    };

    // Typing only searches once the input has been quiet for a while
    let on_city_input = {
        let inputs = inputs.clone();
        let search = search.clone();
        let debouncer = debouncer.clone();
        let quiet_ms = client.config().city_debounce_ms;

        use_callback((), move |e: InputEvent, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            inputs.borrow_mut().city = input.value();

            let search = search.clone();
            let debouncer = debouncer.clone();
            spawn_local(async move {
                if debouncer.settle(&TimerDelay, quiet_ms).await {
                    search.emit(());
                } else {
                    Logger::debug_with_component("donor-search", "Superseded city keystroke skipped");
                }
            });
        })
    };

    UseDonorSearchResult {
        view: (*view).clone(),
        skeleton_cards: client.config().skeleton_cards,
        on_blood_group_change,
        on_city_input,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::seed_donors;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_no_results_is_distinct_from_empty_listing() {
        let config = DirectoryConfig::default();

        assert_eq!(
            SearchView::from_outcome(&SearchOutcome::NoResults, &config),
            SearchView::NoResults
        );
        assert_eq!(SearchView::listing(&[], &config), SearchView::Found(Vec::new()));
    }

    #[wasm_bindgen_test]
    fn test_found_outcome_becomes_cards() {
        let config = DirectoryConfig::default();
        let outcome = SearchOutcome::Found(seed_donors());

        match SearchView::from_outcome(&outcome, &config) {
            SearchView::Found(cards) => {
                assert_eq!(cards.len(), 5);
                assert_eq!(cards[0].last_donation, "October 15, 2023");
            }
            other => panic!("expected donor cards, got {:?}", other),
        }
    }
}
