//! Two-column table shared by every key/value panel.

use leptos::prelude::*;

use crate::session::view::DisplayRow;

#[component]
pub fn KeyValueTable(key_header: &'static str, rows: Vec<DisplayRow>) -> impl IntoView {
    view! {
        <table class="kv-table">
            <thead>
                <tr>
                    <th>{key_header}</th>
                    <th>"Value"</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| {
                        view! {
                            <tr>
                                <td class="kv-table__key">{row.key}</td>
                                <td class="kv-table__value">{row.value}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}
