#[cfg(feature = "csr")]
pub fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }
    leptos::mount::mount_to_body(infra_demo_client::app::App);
}

#[cfg(not(feature = "csr"))]
pub fn main() {}
