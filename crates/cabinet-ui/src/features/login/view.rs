//! Login page view.
//!
//! # Design
//! - Presence validation short-circuits before any network traffic.
//! - On success the session handle persists the user and the router moves to
//!   the directory; on failure the translated message renders in place.
//! - The submit button is disabled while a round-trip is in flight.

use super::state::{LoginForm, error_message_key};
use crate::app::routes::Route;
use crate::app::session::use_session;
use crate::app::use_api;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use cabinet_api_models::LoginRequest;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

/// Patient sign-in page.
#[function_component(LoginPage)]
pub(crate) fn login_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let session = use_session();
    let api = use_api();
    let navigator = use_navigator().expect("login page rendered outside a router");
    let form = use_state(LoginForm::default);

    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*form).clone();
                next.email = input.value();
                form.set(next);
            }
        })
    };
    let on_telephone = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*form).clone();
                next.telephone = input.value();
                form.set(next);
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let bundle = bundle.clone();
        let session = session.clone();
        let api = api.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.submitting {
                return;
            }
            let mut next = (*form).clone();
            if !next.is_complete() {
                next.fail(bundle.text(
                    "login.error_required",
                    "Veuillez renseigner votre email et votre téléphone",
                ));
                form.set(next);
                return;
            }
            next.begin_submit();
            let request = LoginRequest {
                email: next.email.trim().to_string(),
                telephone: next.telephone.trim().to_string(),
            };
            form.set(next.clone());

            let form = form.clone();
            let bundle = bundle.clone();
            let session = session.clone();
            let api = api.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match api.login(&request).await {
                    Ok(user) => {
                        next.settle();
                        form.set(next);
                        session.login(user);
                        navigator.push(&Route::Doctors);
                    }
                    Err(err) => {
                        let key = error_message_key(&err);
                        next.fail(bundle.text(key, "Erreur lors de la connexion."));
                        form.set(next);
                    }
                }
            });
        })
    };

    let error_banner = match form.error.as_deref() {
        Some(message) => html! { <div class="error-message">{ message }</div> },
        None => html! {},
    };
    let submit_label = if form.submitting {
        bundle.text("login.submitting", "Connexion...")
    } else {
        bundle.text("login.submit", "Se connecter")
    };

    html! {
        <div class="login-page">
            <div class="login-card">
                <h1>{ bundle.text("login.title", "Cabinet Médical") }</h1>
                <h2>{ bundle.text("login.subtitle", "Connexion Patient") }</h2>
                { error_banner }
                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{ bundle.text("login.email_label", "Email") }</label>
                        <input
                            id="email"
                            type="email"
                            value={form.email.clone()}
                            oninput={on_email}
                            placeholder={bundle.text("login.email_placeholder", "votre.email@exemple.com")}
                        />
                    </div>
                    <div class="form-group">
                        <label for="telephone">{ bundle.text("login.phone_label", "Téléphone (mot de passe)") }</label>
                        <input
                            id="telephone"
                            type="password"
                            value={form.telephone.clone()}
                            oninput={on_telephone}
                            placeholder={bundle.text("login.phone_placeholder", "0601020304")}
                        />
                    </div>
                    <button type="submit" class="btn-primary" disabled={form.submitting}>
                        { submit_label }
                    </button>
                </form>
                <p class="login-footer">{ bundle.text("login.footer", "") }</p>
            </div>
        </div>
    }
}
