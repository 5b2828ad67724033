use shared::BloodGroup;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub on_blood_group_change: Callback<Event>,
    pub on_city_input: Callback<InputEvent>,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    html! {
        <section class="search-section">
            <div class="search-box">
                <div class="form-group">
                    <label for="bloodGroup">{"Blood Group"}</label>
                    <select id="bloodGroup" onchange={props.on_blood_group_change.clone()}>
                        <option value="">{"All Groups"}</option>
                        {for BloodGroup::ALL.iter().map(|group| html! {
                            <option value={group.as_str().to_string()}>{group.as_str()}</option>
                        })}
                    </select>
                </div>
                <div class="form-group">
                    <label for="city">{"City"}</label>
                    <input
                        type="text"
                        id="city"
                        placeholder="e.g. Madinah"
                        oninput={props.on_city_input.clone()}
                    />
                </div>
            </div>
        </section>
    }
}
