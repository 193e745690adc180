//! Client-side session state.
//!
//! # Design
//! - One owner: the provider at the application root holds the only copy.
//! - Absence of a user means "not authenticated"; no sentinel values.
//! - `loading` is true only while the persisted entry is being restored on
//!   startup and never becomes true again afterwards.

use cabinet_api_models::User;

/// Local-storage key holding the serialized session user.
pub const SESSION_STORAGE_KEY: &str = "cabinet.user";

/// In-memory session snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    /// Currently authenticated user, when any.
    pub user: Option<User>,
    /// True only during the one-time startup restore.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl SessionState {
    /// Adopt the persisted user (or none) read at startup and leave the
    /// loading phase. A corrupt or absent entry restores to unauthenticated.
    pub fn restore(&mut self, stored: Option<User>) {
        self.user = stored;
        self.loading = false;
    }

    /// Unconditionally replace the held user. The caller has already
    /// validated the value against the backend.
    pub fn login(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
    }

    /// Clear the held user. Idempotent: a logout with no active session is a
    /// no-op, never an error.
    pub fn logout(&mut self) {
        self.user = None;
    }

    /// Whether a user is currently held.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Read the current user, if any.
    #[must_use]
    pub const fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::SessionState;
    use cabinet_api_models::{Role, User};

    fn user(id: i64) -> User {
        User {
            id,
            nom: "Durand".to_string(),
            prenom: "Alice".to_string(),
            email: format!("user{id}@exemple.fr"),
            role: Role::Patient,
        }
    }

    #[test]
    fn starts_loading_and_unauthenticated() {
        let state = SessionState::default();
        assert!(state.loading);
        assert!(!state.is_authenticated());
        assert!(state.current_user().is_none());
    }

    #[test]
    fn login_replaces_the_most_recent_user() {
        let mut state = SessionState::default();
        state.login(user(1));
        state.login(user(2));
        assert_eq!(state.current_user().map(|u| u.id), Some(2));
    }

    #[test]
    fn logout_is_idempotent() {
        let mut state = SessionState::default();
        state.logout();
        assert!(state.current_user().is_none());
        state.login(user(1));
        state.logout();
        state.logout();
        assert!(!state.is_authenticated());
    }

    #[test]
    fn restore_adopts_stored_user_without_login() {
        let mut state = SessionState::default();
        state.restore(Some(user(7)));
        assert!(!state.loading);
        assert_eq!(state.current_user().map(|u| u.id), Some(7));
    }

    #[test]
    fn stored_user_round_trips_and_rejects_garbage() {
        let original = user(3);
        let stored = serde_json::to_string(&original).expect("serializable");
        let restored: User = serde_json::from_str(&stored).expect("stored entry decodes");
        assert_eq!(restored, original);

        let corrupt: Result<User, _> = serde_json::from_str("{\"id\":3}");
        assert!(corrupt.is_err(), "a corrupt entry must restore to signed-out");
    }

    #[test]
    fn restore_of_nothing_leaves_loading_phase() {
        let mut state = SessionState::default();
        state.restore(None);
        assert!(!state.loading);
        assert!(!state.is_authenticated());
    }
}
