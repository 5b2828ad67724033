use shared::chrome::AlertState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CustomAlertProps {
    /// False until the first alert; the overlay is then kept in the DOM
    pub mounted: bool,
    pub alert: Option<AlertState>,
    pub on_dismiss: Callback<()>,
}

#[function_component(CustomAlert)]
pub fn custom_alert(props: &CustomAlertProps) -> Html {
    if !props.mounted {
        return html! {};
    }

    let on_ok = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    let message = props
        .alert
        .as_ref()
        .map(|alert| alert.message.clone())
        .unwrap_or_default();

    html! {
        <div class={classes!("custom-alert-overlay", props.alert.is_some().then_some("active"))}>
            <div class="custom-alert-box">
                <div class="custom-alert-icon">{"✔"}</div>
                <div class="custom-alert-message">{message}</div>
                <button class="custom-alert-btn" onclick={on_ok}>{"OK"}</button>
            </div>
        </div>
    }
}
