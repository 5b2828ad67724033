use log::LevelFilter;
use shared::chrome::ChromeAction;
use shared::pages::Page;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::forms::{ContactForm, RegisterForm};
use components::{AdminTable, CustomAlert, DonorGrid, Header, ScrollTopButton, SearchBar, StatsCards};
use hooks::use_admin_donors::use_admin_donors;
use hooks::use_chrome::use_chrome;
use hooks::use_donor_search::use_donor_search;
use hooks::use_registration::use_registration;
use services::directory::DirectoryClient;
use services::logging::{self, Logger};
use services::dom;

#[derive(Properties, PartialEq)]
struct PageProps {
    client: DirectoryClient,
    notify: Callback<ChromeAction>,
}

#[function_component(HomePage)]
fn home_page(props: &PageProps) -> Html {
    let search = use_donor_search(&props.client);

    html! {
        <>
            <section class="hero">
                <div class="container">
                    <h1>{"Find Blood Donors Near You"}</h1>
                    <p>{"Search by blood group and city, then reach donors directly on WhatsApp."}</p>
                </div>
            </section>
            <section class="container">
                <SearchBar
                    on_blood_group_change={search.on_blood_group_change}
                    on_city_input={search.on_city_input}
                />
                <DonorGrid view={search.view} skeleton_cards={search.skeleton_cards} />
            </section>
        </>
    }
}

#[function_component(RegisterPage)]
fn register_page(props: &PageProps) -> Html {
    let registration = use_registration(&props.client, props.notify.clone());

    html! {
        <section class="container">
            <RegisterForm
                state={registration.state}
                on_field_change={registration.on_field_change}
                on_submit={registration.on_submit}
            />
        </section>
    }
}

#[function_component(AdminPage)]
fn admin_page(props: &PageProps) -> Html {
    let admin = use_admin_donors(&props.client, props.notify.clone());

    html! {
        <section class="container admin">
            <h2>{"Admin Dashboard"}</h2>
            <StatsCards stats={admin.state.stats.clone()} />
            {if let Some(error) = admin.state.error.as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}
            <AdminTable rows={admin.state.rows.clone()} on_delete={admin.on_delete} />
        </section>
    }
}

#[function_component(ContactPage)]
fn contact_page(props: &PageProps) -> Html {
    html! {
        <section class="container">
            <ContactForm notify={props.notify.clone()} />
        </section>
    }
}

#[function_component(App)]
fn app() -> Html {
    let client = use_memo((), |_| DirectoryClient::new());
    let chrome = use_chrome(&client);
    let page = use_memo((), |_| match dom::current_path() {
        Ok(path) => Page::from_path(&path),
        Err(e) => {
            Logger::warn_with_component("app", &format!("{:#}", e));
            Page::Home
        }
    });

    let client = (*client).clone();
    let notify = chrome.actions.dispatch.clone();

    let content = match *page {
        Page::Home => html! { <HomePage client={client.clone()} notify={notify.clone()} /> },
        Page::Register => html! { <RegisterPage client={client.clone()} notify={notify.clone()} /> },
        Page::Admin => html! { <AdminPage client={client.clone()} notify={notify.clone()} /> },
        Page::Contact => html! { <ContactPage client={client.clone()} notify={notify.clone()} /> },
    };

    html! {
        <>
            <Header
                current_page={*page}
                theme={chrome.state.theme}
                menu_open={chrome.state.menu_open}
                on_theme_switch={chrome.actions.on_theme_switch.clone()}
                on_toggle_menu={chrome.actions.toggle_menu.clone()}
            />
            <main>{content}</main>
            <footer class="footer">
                <p>{format!("© {}. Every drop counts.", client.config().site_name)}</p>
            </footer>
            <CustomAlert
                mounted={chrome.state.alert_mounted}
                alert={chrome.state.alert.clone()}
                on_dismiss={chrome.actions.dismiss_alert.clone()}
            />
            <ScrollTopButton
                visible={chrome.state.scroll_top_visible}
                on_click={chrome.actions.scroll_to_top.clone()}
            />
        </>
    }
}

fn main() {
    logging::init(LevelFilter::Debug);
    log::info!(target: "app", "Starting donor directory");
    yew::Renderer::<App>::new().render();
}
