use gloo::events::EventListener;
use shared::chrome::{AlertFollowUp, ChromeAction, ChromeState, Theme};
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::directory::DirectoryClient;
use crate::services::dom;
use crate::services::logging::Logger;

/// Reducer wrapper so the shared chrome transitions can drive `use_reducer`
#[derive(Clone, PartialEq)]
pub struct ChromeStore(pub ChromeState);

impl Reducible for ChromeStore {
    type Action = ChromeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(ChromeStore(self.0.apply(action)))
    }
}

pub struct UseChromeResult {
    pub state: ChromeState,
    pub actions: UseChromeActions,
}

#[derive(Clone, PartialEq)]
pub struct UseChromeActions {
    pub on_theme_switch: Callback<Event>,
    pub toggle_menu: Callback<MouseEvent>,
    pub scroll_to_top: Callback<MouseEvent>,
    /// Raw access for pages that raise alerts
    pub dispatch: Callback<ChromeAction>,
    pub dismiss_alert: Callback<()>,
}

#[hook]
pub fn use_chrome(client: &DirectoryClient) -> UseChromeResult {
    let store = {
        let client = client.clone();
        use_reducer_eq(move || {
            ChromeStore(ChromeState::new(
                client.load_theme(),
                client.config().scroll_top_threshold_px,
            ))
        })
    };

    // Reflect the theme in the DOM whenever it changes
    use_effect_with(store.0.theme, |theme| {
        if let Err(e) = dom::apply_theme(*theme) {
            Logger::warn_with_component("theme", &format!("Failed to apply theme: {:#}", e));
        }
        || ()
    });

    {
        let dispatcher = store.dispatcher();
        use_effect_with((), move |_| {
            dispatcher.dispatch(ChromeAction::Scrolled(dom::scroll_offset()));
            let listener = EventListener::new(&gloo::utils::window(), "scroll", move |_| {
                dispatcher.dispatch(ChromeAction::Scrolled(dom::scroll_offset()));
            });
            move || drop(listener)
        });
    }

    let on_theme_switch = {
        let client = client.clone();
        let dispatcher = store.dispatcher();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let theme = Theme::from_switch(input.checked());
            client.save_theme(theme);
            dispatcher.dispatch(ChromeAction::SetTheme(theme));
        })
    };

    let toggle_menu = {
        let dispatcher = store.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ChromeAction::ToggleMenu))
    };

    let scroll_to_top = Callback::from(|_: MouseEvent| dom::scroll_to_top());

    let dispatch = {
        let dispatcher = store.dispatcher();
        Callback::from(move |action: ChromeAction| dispatcher.dispatch(action))
    };

    let dismiss_alert = {
        let store = store.clone();
        Callback::from(move |_| {
            let follow_up = store.0.alert.as_ref().and_then(|alert| alert.follow_up.clone());
            store.dispatch(ChromeAction::DismissAlert);

            if let Some(AlertFollowUp::NavigateTo(url)) = follow_up {
                if let Err(e) = dom::navigate(&url) {
                    Logger::error_with_component("alert", &format!("{:#}", e));
                }
            }
        })
    };

    UseChromeResult {
        state: store.0.clone(),
        actions: UseChromeActions {
            on_theme_switch,
            toggle_menu,
            scroll_to_top,
            dispatch,
            dismiss_alert,
        },
    }
}
