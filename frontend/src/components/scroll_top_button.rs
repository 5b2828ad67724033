use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ScrollTopButtonProps {
    pub visible: bool,
    pub on_click: Callback<MouseEvent>,
}

#[function_component(ScrollTopButton)]
pub fn scroll_top_button(props: &ScrollTopButtonProps) -> Html {
    let display = if props.visible { "display: flex;" } else { "display: none;" };

    html! {
        <button
            id="scrollTopBtn"
            class="scroll-top-btn"
            style={display}
            title="Back to top"
            onclick={props.on_click.clone()}
        >
            {"↑"}
        </button>
    }
}
