//! Route guard gating authenticated pages.
//!
//! # Design
//! - While the session restore is pending, render a holding state instead of
//!   deciding; redirecting before restore would bounce returning users.
//! - Unauthenticated visitors are redirected to the login route.

use crate::app::routes::Route;
use crate::app::session::use_session;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;
use yew_router::prelude::*;

/// Properties for [`RequireSession`].
#[derive(Properties, PartialEq)]
pub(crate) struct RequireSessionProps {
    /// Content rendered only for an authenticated session.
    #[prop_or_default]
    pub children: Children,
}

/// Render children only when a user is signed in.
#[function_component(RequireSession)]
pub(crate) fn require_session(props: &RequireSessionProps) -> Html {
    let session = use_session();
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));

    if session.loading() {
        return html! {
            <div class="loading">{ bundle.text("guard.loading", "Chargement...") }</div>
        };
    }

    if session.is_authenticated() {
        html! { <>{ props.children.clone() }</> }
    } else {
        html! { <Redirect<Route> to={Route::Login} /> }
    }
}
