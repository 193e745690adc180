//! Routing definitions for the Cabinet Médical UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/login")]
    Login,
    #[at("/doctors")]
    Doctors,
    #[at("/doctors/:id")]
    DoctorDetail { id: i64 },
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}
