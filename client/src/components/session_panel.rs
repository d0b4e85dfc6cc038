//! Session panel: resolves the session on mount, then shows the profile,
//! a login button, or an error.

use leptos::prelude::*;

use super::panel_body::PanelBody;
use crate::config::ClientConfig;
use crate::session::sink::Liveness;
use crate::session::view::project_session;
use crate::state::session::SessionState;

#[component]
pub fn SessionPanel(config: ClientConfig) -> impl IntoView {
    let state = RwSignal::new(SessionState::Idle);
    let alive = Liveness::new();

    #[cfg(feature = "csr")]
    {
        use crate::net::browser::BrowserHttpClient;
        use crate::session::location::BrowserLocation;
        use crate::session::resolver::{SessionEndpoints, SessionResolver};
        use crate::session::sink::SignalSink;

        let sink = SignalSink::new(state, alive.clone());
        let endpoints = SessionEndpoints::new(config.refresh_path.clone());
        let client = BrowserHttpClient::new(BrowserLocation, config.request_timeout_ms);
        leptos::task::spawn_local(async move {
            SessionResolver::new(client, endpoints).resolve(&sink).await;
        });
    }

    on_cleanup(move || alive.end());

    let login_path = config.login_path;
    let on_login = Callback::new(move |()| {
        #[cfg(feature = "csr")]
        {
            use crate::session::location::{BrowserLocation, BrowserNavigator};
            use crate::session::redirect::LoginRedirector;

            LoginRedirector::new(login_path.clone(), BrowserLocation, BrowserNavigator).redirect();
        }
        #[cfg(not(feature = "csr"))]
        let _ = &login_path;
    });

    view! {
        <section class="panel">
            <h2>"Call /api/user"</h2>
            {move || {
                let panel = state.with(project_session);
                view! { <PanelBody panel=panel key_header="Key" empty_label="No profile fields" on_login=on_login/> }
            }}
        </section>
    }
}
