//! Root application component.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::resource_panel::ResourcePanel;
use crate::components::session_panel::SessionPanel;
use crate::config::ClientConfig;
use crate::net::resource::PanelSpec;

/// Root application component.
///
/// The three panels resolve independently; none waits on another.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let config = ClientConfig::load();
    let timeout_ms = config.request_timeout_ms;

    view! {
        <Title text="J26 Infra test and demo"/>
        <main class="app">
            <h1>"J26 Infra test and demo"</h1>
            <ResourcePanel spec=PanelSpec::info() timeout_ms=timeout_ms/>
            <ResourcePanel spec=PanelSpec::cookies() timeout_ms=timeout_ms/>
            <SessionPanel config=config/>
        </main>
    }
}
