use leptos::*;
use leptos_router::*;

mod api;
mod components;
pub mod config;
pub mod error;
mod pages;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

use pages::AdminPanelPage;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Starting forum admin frontend (wasm)");

    // window.__FORUM_ADMIN_ENV (env.js) takes precedence over ./config.json.
    leptos::spawn_local(async move {
        config::init().await;
        log::debug!("Runtime config initialized");
    });

    mount_to_body(App);
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <crate::state::auth::AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=AdminPanelPage/>
                    <Route path="/admin" view=AdminPanelPage/>
                </Routes>
            </Router>
        </crate::state::auth::AuthProvider>
    }
}
