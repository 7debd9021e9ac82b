use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

mod chat;
mod components;
mod config;
mod error;
mod pages;
mod utils {
    pub mod lead_form;
    pub mod storage;
    pub mod theme;
    pub mod validation;
}

use chat::knowledge::softsell_table;
use chat::responder::ResponderTable;
use config::SiteConfig;
use pages::landing::Landing;
use pages::not_found::NotFound;
use utils::storage::BrowserStorage;
use utils::theme::DisplayPreference;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: SiteConfig,
    pub table: Option<Rc<ResponderTable>>,
    /// Where the display preference is persisted.
    pub store: BrowserStorage,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let preference = {
        let store = props.store;
        let key = props.config.dark_mode_key;
        use_mut_ref(move || DisplayPreference::open(store, key))
    };
    let dark = {
        let preference = preference.clone();
        use_state(move || preference.borrow().is_dark())
    };

    let on_toggle_theme = {
        let preference = preference.clone();
        let dark = dark.clone();
        Callback::from(move |_: ()| {
            let now_dark = preference.borrow_mut().toggle();
            dark.set(now_dark);
        })
    };

    let render = {
        let config = props.config.clone();
        let table = props.table.clone();
        let dark = *dark;
        Callback::from(move |route: Route| match route {
            Route::Home => html! {
                <Landing
                    config={config.clone()}
                    dark={dark}
                    on_toggle_theme={on_toggle_theme.clone()}
                    table={table.clone()}
                />
            },
            Route::NotFound => html! { <NotFound /> },
        })
    };

    let theme = preference.borrow().theme_name();

    html! {
        <BrowserRouter>
            <div class="app-root" data-theme={theme}>
                <style>{THEME_CSS}</style>
                <Switch<Route> render={render} />
            </div>
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    console_error_panic_hook::set_once();

    let table = match softsell_table() {
        Ok(table) => {
            log::info!("FAQ assistant loaded with {} rules", table.rules().len());
            Some(Rc::new(table))
        }
        Err(e) => {
            log::error!("FAQ table is invalid, chat disabled: {}", e);
            None
        }
    };

    yew::Renderer::<App>::with_props(AppProps {
        config: SiteConfig::default(),
        table,
        store: BrowserStorage,
    })
    .render();
}

const THEME_CSS: &str = r#"
body {
    margin: 0;
    font-family: system-ui, -apple-system, "Segoe UI", Roboto, Arial, sans-serif;
}
.app-root {
    min-height: 100vh;
    background: var(--surface);
    color: var(--text);
    transition: background 0.3s ease, color 0.3s ease;
}
.app-root[data-theme="light"] {
    --surface: #ffffff;
    --muted-surface: #f3f4f6;
    --text: #111827;
    --muted-text: #4b5563;
    --border: #d1d5db;
    --accent: #2563eb;
    --accent-strong: #1d4ed8;
}
.app-root[data-theme="dark"] {
    --surface: #111827;
    --muted-surface: #1f2937;
    --text: #f9fafb;
    --muted-text: #9ca3af;
    --border: #374151;
    --accent: #3b82f6;
    --accent-strong: #2563eb;
}
.not-found {
    padding: 8rem 1rem;
    text-align: center;
}
"#;
