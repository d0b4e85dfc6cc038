//! Fetch-then-render panel for `/api/info` and `/api/cookies`.

use leptos::prelude::*;

use super::panel_body::PanelBody;
use crate::net::resource::PanelSpec;
use crate::session::sink::Liveness;
use crate::session::view::project_resource;
use crate::state::entries::KeyValues;
use crate::state::resource::ResourceState;

/// Loads `spec.endpoint` once on mount and renders the mapping.
#[component]
pub fn ResourcePanel(spec: PanelSpec, timeout_ms: u32) -> impl IntoView {
    let state = RwSignal::new(ResourceState::<KeyValues>::Loading);
    let alive = Liveness::new();

    #[cfg(feature = "csr")]
    {
        use crate::net::browser::BrowserHttpClient;
        use crate::net::endpoint::Endpoint;
        use crate::net::resource::load_resource;
        use crate::session::location::BrowserLocation;

        let alive_task = alive.clone();
        let endpoint = Endpoint::api(spec.endpoint);
        let options = spec.request_options();
        leptos::task::spawn_local(async move {
            let client = BrowserHttpClient::new(BrowserLocation, timeout_ms);
            let loaded = load_resource::<_, KeyValues>(&client, &endpoint, options).await;
            if let Some(message) = loaded.error() {
                log::warn!("{} failed: {message}", endpoint.path());
            }
            if alive_task.is_alive() {
                state.set(loaded);
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = timeout_ms;

    on_cleanup(move || alive.end());

    let PanelSpec { title, key_header, value_mode, empty_label, .. } = spec;
    view! {
        <section class="panel">
            <h2>{title}</h2>
            {move || {
                let panel = state.with(|s| project_resource(s, value_mode));
                view! { <PanelBody panel=panel key_header=key_header empty_label=empty_label/> }
            }}
        </section>
    }
}
