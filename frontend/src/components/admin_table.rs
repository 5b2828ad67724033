use shared::views::DonorRowView;
use shared::DonorId;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AdminTableProps {
    pub rows: Vec<DonorRowView>,
    pub on_delete: Callback<DonorId>,
}

#[function_component(AdminTable)]
pub fn admin_table(props: &AdminTableProps) -> Html {
    html! {
        <div class="table-container">
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>{"ID"}</th>
                        <th>{"Name"}</th>
                        <th>{"Blood Group"}</th>
                        <th>{"City"}</th>
                        <th>{"Phone"}</th>
                        <th>{"Status"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody id="adminDonorsList">
                    {for props.rows.iter().map(|row| {
                        let on_click = {
                            let on_delete = props.on_delete.clone();
                            let id = row.id;
                            Callback::from(move |_: MouseEvent| on_delete.emit(id))
                        };

                        html! {
                            <tr key={row.id.to_string()}>
                                <td data-label="ID">{row.id}</td>
                                <td data-label="Name">{&row.name}</td>
                                <td data-label="Blood Group">
                                    <span class="blood-group-pill">{&row.blood_group}</span>
                                </td>
                                <td data-label="City">{&row.city}</td>
                                <td data-label="Phone">{&row.phone}</td>
                                <td data-label="Status">{&row.status}</td>
                                <td data-label="Actions">
                                    <button class="action-btn btn-delete" onclick={on_click}>{"Delete"}</button>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}
