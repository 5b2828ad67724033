use shared::chrome::Theme;
use shared::pages::Page;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub current_page: Page,
    pub theme: Theme,
    pub menu_open: bool,
    pub on_theme_switch: Callback<Event>,
    pub on_toggle_menu: Callback<MouseEvent>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let active = |open: bool| if open { Some("active") } else { None };

    html! {
        <header class="header">
            <nav class="navbar container">
                <a href={Page::Home.href()} class="logo">{"🩸 BloodDonorFinder"}</a>

                <div
                    id="mobile-menu"
                    class={classes!("menu-toggle", active(props.menu_open))}
                    onclick={props.on_toggle_menu.clone()}
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </div>

                <ul id="nav-list" class={classes!("nav-list", active(props.menu_open))}>
                    {for Page::NAV.iter().map(|page| {
                        let link_class = if *page == props.current_page { "nav-link current" } else { "nav-link" };
                        html! {
                            <li><a href={page.href()} class={link_class}>{page.title()}</a></li>
                        }
                    })}
                    <li>
                        <label class="theme-switch" title="Toggle dark mode">
                            <input
                                type="checkbox"
                                checked={props.theme.is_dark()}
                                onchange={props.on_theme_switch.clone()}
                            />
                            <span class="slider round"></span>
                        </label>
                    </li>
                </ul>
            </nav>
        </header>
    }
}
