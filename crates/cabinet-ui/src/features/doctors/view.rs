//! Doctor directory views.
//!
//! # Design
//! - The reducer owns the committed `(page, search, speciality)` snapshot;
//!   the fetch effect is keyed on that snapshot and issues exactly one fetch
//!   per commit.
//! - Sequence numbers minted by the view pair each response with its fetch;
//!   the state layer drops anything superseded.
//! - Specialty options load once on mount; a failure there degrades the
//!   dropdown and is only logged.

use super::state::DoctorsState;
use crate::app::routes::Route;
use crate::app::session::use_session;
use crate::app::use_api;
use crate::components::doctor_card::DoctorCard;
use crate::components::pagination::Pagination;
use crate::core::logic::{DoctorQuery, doctor_title};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::services::error::ApiError;
use cabinet_api_models::{Doctor, Page, Speciality};
use gloo::console;
use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

/// Messages applied to [`DoctorsState`].
pub(crate) enum DoctorsMsg {
    /// Search input changed.
    SearchInput(String),
    /// Search form submitted.
    SubmitSearch,
    /// Specialty dropdown changed, carrying the raw select value.
    ChangeSpeciality(String),
    /// Pagination requested the given zero-based page.
    ChangePage(u32),
    /// Specialty options arrived.
    SpecialitiesLoaded(Vec<Speciality>),
    /// A fetch with this sequence number left the station.
    FetchStarted(u64),
    /// A fetch settled, successfully or not.
    FetchSettled(u64, Result<Page<Doctor>, String>),
}

impl Reducible for DoctorsState {
    type Action = DoctorsMsg;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            DoctorsMsg::SearchInput(text) => next.set_search(text),
            DoctorsMsg::SubmitSearch => next.submit_search(),
            DoctorsMsg::ChangeSpeciality(raw) => next.change_speciality(&raw),
            DoctorsMsg::ChangePage(page) => {
                next.change_page(page);
            }
            DoctorsMsg::SpecialitiesLoaded(list) => next.set_specialities(list),
            DoctorsMsg::FetchStarted(seq) => next.begin_fetch(seq),
            DoctorsMsg::FetchSettled(seq, Ok(response)) => {
                next.apply_page(seq, response);
            }
            DoctorsMsg::FetchSettled(seq, Err(message)) => {
                next.apply_error(seq, message);
            }
        }
        Rc::new(next)
    }
}

/// Searchable, filterable, paginated doctor directory.
#[function_component(DoctorsPage)]
pub(crate) fn doctors_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let session = use_session();
    let api = use_api();
    let navigator = use_navigator().expect("doctors page rendered outside a router");
    let state = use_reducer(DoctorsState::default);
    let fetch_seq = use_mut_ref(|| 0_u64);

    {
        let api = api.clone();
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api.fetch_specialities().await {
                        Ok(list) => state.dispatch(DoctorsMsg::SpecialitiesLoaded(list)),
                        Err(err) => {
                            console::error!("failed to load specialities", err.to_string());
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    {
        let api = api.clone();
        let state = state.clone();
        let deps = (
            state.page,
            state.search_term.clone(),
            state.selected_speciality,
        );
        let message = bundle.text("doctors.error_loading", "Erreur lors du chargement des médecins");
        use_effect_with_deps(
            move |(page, search, speciality_id): &(u32, String, Option<i64>)| {
                let seq = {
                    let mut counter = fetch_seq.borrow_mut();
                    *counter += 1;
                    *counter
                };
                let query = DoctorQuery {
                    page: *page,
                    search: if search.is_empty() {
                        None
                    } else {
                        Some(search.clone())
                    },
                    speciality_id: *speciality_id,
                };
                state.dispatch(DoctorsMsg::FetchStarted(seq));
                spawn_local(async move {
                    let outcome = api.fetch_doctors(&query).await.map_err(|err| {
                        console::error!("doctor fetch failed", err.to_string());
                        message
                    });
                    state.dispatch(DoctorsMsg::FetchSettled(seq, outcome));
                });
                || ()
            },
            deps,
        );
    }

    let on_search_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                state.dispatch(DoctorsMsg::SearchInput(input.value()));
            }
        })
    };
    let on_search_submit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            state.dispatch(DoctorsMsg::SubmitSearch);
        })
    };
    let on_speciality_change = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                state.dispatch(DoctorsMsg::ChangeSpeciality(select.value()));
            }
        })
    };
    let on_page_change = {
        let state = state.clone();
        Callback::from(move |page: u32| {
            state.dispatch(DoctorsMsg::ChangePage(page));
        })
    };
    let on_logout = {
        let session = session.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            session.logout();
            navigator.push(&Route::Login);
        })
    };

    let welcome = session
        .current_user()
        .map(|user| format!("{} {}", bundle.text("doctors.welcome", "Bienvenue"), user.email))
        .unwrap_or_default();

    let options = state
        .specialities
        .iter()
        .map(|speciality| {
            let selected = state.selected_speciality == Some(speciality.id);
            html! {
                <option value={speciality.id.to_string()} selected={selected}>
                    { speciality.nom.clone() }
                </option>
            }
        })
        .collect::<Html>();

    let error_banner = match state.error.as_deref() {
        Some(message) => html! { <div class="error-message">{ message }</div> },
        None => html! {},
    };

    let body = if state.loading {
        html! { <div class="loading">{ bundle.text("doctors.loading", "Chargement des médecins...") }</div> }
    } else if state.doctors.is_empty() && state.error.is_none() {
        html! { <div class="empty-state">{ bundle.text("doctors.empty", "Aucun médecin trouvé") }</div> }
    } else {
        let cards = state
            .doctors
            .iter()
            .map(|doctor| {
                html! { <DoctorCard key={doctor.id} doctor={doctor.clone()} /> }
            })
            .collect::<Html>();
        html! { <div class="doctors-grid">{ cards }</div> }
    };

    let pagination = if state.total_pages > 1 {
        html! {
            <Pagination
                page={state.page}
                total_pages={state.total_pages}
                on_change={on_page_change}
            />
        }
    } else {
        html! {}
    };

    html! {
        <div class="doctors-page">
            <header class="page-header">
                <h1>{ bundle.text("doctors.title", "Liste des Médecins") }</h1>
                <div class="user-info">
                    <span class="welcome">{ welcome }</span>
                    <button class="btn-logout" onclick={on_logout}>
                        { bundle.text("doctors.logout", "Déconnexion") }
                    </button>
                </div>
            </header>
            <div class="filters">
                <form class="search-form" onsubmit={on_search_submit}>
                    <input
                        type="text"
                        value={state.search_term.clone()}
                        oninput={on_search_input}
                        placeholder={bundle.text("doctors.search_placeholder", "Rechercher un médecin...")}
                    />
                    <button type="submit" class="btn-search">
                        { bundle.text("doctors.search_button", "Rechercher") }
                    </button>
                </form>
                <select class="speciality-filter" onchange={on_speciality_change}>
                    <option value="" selected={state.selected_speciality.is_none()}>
                        { bundle.text("doctors.all_specialities", "Toutes les spécialités") }
                    </option>
                    { options }
                </select>
            </div>
            { error_banner }
            { body }
            { pagination }
        </div>
    }
}

enum DetailState {
    Loading,
    Ready(Box<Doctor>),
    Failed(String),
}

/// Properties for [`DoctorDetailPage`].
#[derive(Properties, PartialEq)]
pub(crate) struct DoctorDetailProps {
    /// Identifier of the doctor to display.
    pub id: i64,
}

/// Single-doctor detail page reachable from a direct link.
#[function_component(DoctorDetailPage)]
pub(crate) fn doctor_detail_page(props: &DoctorDetailProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let api = use_api();
    let detail = use_state(|| DetailState::Loading);

    {
        let api = api.clone();
        let detail = detail.clone();
        let missing = bundle.text("doctors.detail_missing", "Médecin introuvable");
        let failed = bundle.text("doctors.error_loading", "Erreur lors du chargement des médecins");
        use_effect_with_deps(
            move |id: &i64| {
                let id = *id;
                detail.set(DetailState::Loading);
                spawn_local(async move {
                    let next = match api.fetch_doctor(id).await {
                        Ok(doctor) => DetailState::Ready(Box::new(doctor)),
                        Err(ApiError::NotFound) => DetailState::Failed(missing),
                        Err(err) => {
                            console::error!("doctor detail fetch failed", err.to_string());
                            DetailState::Failed(failed)
                        }
                    };
                    detail.set(next);
                });
                || ()
            },
            props.id,
        );
    }

    let body = match &*detail {
        DetailState::Loading => {
            html! { <div class="loading">{ bundle.text("guard.loading", "Chargement...") }</div> }
        }
        DetailState::Ready(doctor) => html! {
            <>
                <h1>{ doctor_title(doctor) }</h1>
                <DoctorCard doctor={(**doctor).clone()} />
            </>
        },
        DetailState::Failed(message) => {
            html! { <div class="error-message">{ message }</div> }
        }
    };

    html! {
        <div class="doctor-detail-page">
            <Link<Route> to={Route::Doctors} classes="back-link">
                { bundle.text("doctors.title", "Liste des Médecins") }
            </Link<Route>>
            { body }
        </div>
    }
}
