//! Session context: explicit provider wiring for the authenticated user.
//!
//! # Design
//! - The session is an explicit handle injected through a context provider,
//!   never ambient global state.
//! - Local storage is the single persistence point; the reducer state is the
//!   single in-memory truth.
//! - A corrupt stored entry is logged and treated as signed-out.

use crate::core::session::{SESSION_STORAGE_KEY, SessionState};
use cabinet_api_models::User;
use gloo::console;
use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};
use std::rc::Rc;
use yew::prelude::*;

/// Actions applied to the shared session state.
pub(crate) enum SessionAction {
    /// Initial restore from local storage, authenticated or not.
    Restore(Option<User>),
    /// A login round-trip succeeded for this user.
    Login(User),
    /// The user signed out.
    Logout,
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SessionAction::Restore(stored) => next.restore(stored),
            SessionAction::Login(user) => next.login(user),
            SessionAction::Logout => next.logout(),
        }
        Rc::new(next)
    }
}

/// Handle to the shared session, exposed through context.
#[derive(Clone, PartialEq)]
pub(crate) struct SessionHandle {
    inner: UseReducerHandle<SessionState>,
}

impl SessionHandle {
    /// Whether the initial restore has not completed yet.
    pub(crate) fn loading(&self) -> bool {
        self.inner.loading
    }

    /// Whether a user is currently signed in.
    pub(crate) fn is_authenticated(&self) -> bool {
        self.inner.is_authenticated()
    }

    /// The signed-in user, if any.
    pub(crate) fn current_user(&self) -> Option<User> {
        self.inner.current_user().cloned()
    }

    /// Persist the user and mark the session authenticated.
    pub(crate) fn login(&self, user: User) {
        if let Err(err) = LocalStorage::set(SESSION_STORAGE_KEY, &user) {
            console::error!("failed to persist session", err.to_string());
        }
        self.inner.dispatch(SessionAction::Login(user));
    }

    /// Clear the stored user and mark the session signed out.
    pub(crate) fn logout(&self) {
        LocalStorage::delete(SESSION_STORAGE_KEY);
        self.inner.dispatch(SessionAction::Logout);
    }
}

fn load_stored_user() -> Option<User> {
    match LocalStorage::get::<User>(SESSION_STORAGE_KEY) {
        Ok(user) => Some(user),
        Err(StorageError::KeyNotFound(_)) => None,
        Err(err) => {
            console::warn!("discarding unreadable session entry", err.to_string());
            LocalStorage::delete(SESSION_STORAGE_KEY);
            None
        }
    }
}

/// Properties for [`SessionProvider`].
#[derive(Properties, PartialEq)]
pub(crate) struct SessionProviderProps {
    /// Subtree with access to the session handle.
    #[prop_or_default]
    pub children: Children,
}

/// Provide the session handle to the component subtree.
#[function_component(SessionProvider)]
pub(crate) fn session_provider(props: &SessionProviderProps) -> Html {
    let state = use_reducer(SessionState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                state.dispatch(SessionAction::Restore(load_stored_user()));
                || ()
            },
            (),
        );
    }

    let handle = SessionHandle { inner: state };
    html! {
        <ContextProvider<SessionHandle> context={handle}>
            { props.children.clone() }
        </ContextProvider<SessionHandle>>
    }
}

/// Read the session handle from context.
#[hook]
pub(crate) fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().expect("use_session must be called inside SessionProvider")
}
