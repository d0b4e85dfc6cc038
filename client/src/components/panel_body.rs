//! Renders a [`PanelView`]: loading text, error text, login button, empty
//! indicator or table.

use leptos::prelude::*;

use super::key_value_table::KeyValueTable;
use crate::session::view::PanelView;

#[component]
pub fn PanelBody(
    panel: PanelView,
    key_header: &'static str,
    empty_label: &'static str,
    #[prop(optional)] on_login: Option<Callback<()>>,
) -> impl IntoView {
    match panel {
        PanelView::Loading => view! { <p class="panel__loading">"Loading..."</p> }.into_any(),
        PanelView::Error(message) => view! { <p class="panel__error">"Error: " {message}</p> }.into_any(),
        PanelView::LoginAction => view! {
            <button
                type="button"
                class="login-button"
                on:click=move |_| {
                    if let Some(on_login) = on_login {
                        on_login.run(());
                    }
                }
            >
                "Login"
            </button>
        }
        .into_any(),
        PanelView::Empty => view! { <p class="panel__empty">{empty_label}</p> }.into_any(),
        PanelView::Table(rows) => view! { <KeyValueTable key_header=key_header rows=rows/> }.into_any(),
    }
}
