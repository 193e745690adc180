//! Application shell: context wiring, routing, and the wasm entry point.
//!
//! # Design
//! - Contexts nest outermost-first: translations, then the API client, then
//!   the session, then the router.
//! - Authenticated routes are wrapped in the session guard at the switch so
//!   no page enforces access on its own.

mod api;
mod config;
pub(crate) mod routes;
pub(crate) mod session;

pub(crate) use api::use_api;

use crate::components::guard::RequireSession;
use crate::features::doctors::view::{DoctorDetailPage, DoctorsPage};
use crate::features::login::view::LoginPage;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use api::ApiCtx;
use routes::Route;
use session::SessionProvider;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFoundPage)]
fn not_found_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    html! {
        <div class="not-found">
            <h1>{ bundle.text("app.not_found", "Page introuvable") }</h1>
            <Link<Route> to={Route::Home}>{ bundle.text("app.title", "Cabinet Médical") }</Link<Route>>
        </div>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Login => html! { <LoginPage /> },
        Route::Doctors => html! {
            <RequireSession>
                <DoctorsPage />
            </RequireSession>
        },
        Route::DoctorDetail { id } => html! {
            <RequireSession>
                <DoctorDetailPage {id} />
            </RequireSession>
        },
        Route::Home => html! { <Redirect<Route> to={Route::Doctors} /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

/// Root component assembling the context providers and the router.
#[function_component(CabinetApp)]
pub(crate) fn cabinet_app() -> Html {
    let bundle = use_memo(|_| TranslationBundle::new(config::load_locale()), ());
    let api_ctx = use_memo(|_| ApiCtx::new(config::api_base_url()), ());

    html! {
        <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
            <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
                <SessionProvider>
                    <BrowserRouter>
                        <Switch<Route> render={switch} />
                    </BrowserRouter>
                </SessionProvider>
            </ContextProvider<ApiCtx>>
        </ContextProvider<TranslationBundle>>
    }
}

/// Mount the application onto the document body.
pub fn run_app() {
    console_error_panic_hook::set_once();
    yew::Renderer::<CabinetApp>::new().render();
}
