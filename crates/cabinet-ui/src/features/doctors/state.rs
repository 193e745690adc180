//! Doctor directory controller state and pure transitions.
//!
//! # Design
//! - Setters commit a new `(page, search, speciality)` snapshot; the view
//!   issues exactly one fetch per committed snapshot.
//! - Every fetch carries a monotonically increasing sequence number; a
//!   response is applied only when it matches the most recently issued
//!   fetch, so a slow stale response can never overwrite newer results.
//! - A failed fetch keeps the previous rows visible instead of blanking the
//!   page.

use crate::core::logic::{DoctorQuery, parse_speciality_choice};
use cabinet_api_models::{Doctor, Page, Speciality};

/// Doctor directory page state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DoctorsState {
    /// Free-text search committed to the next fetch.
    pub search_term: String,
    /// Selected specialty filter, when any.
    pub selected_speciality: Option<i64>,
    /// Zero-based page index.
    pub page: u32,
    /// Rows of the current page.
    pub doctors: Vec<Doctor>,
    /// Total number of pages reported by the backend.
    pub total_pages: u32,
    /// Specialties backing the filter dropdown.
    pub specialities: Vec<Speciality>,
    /// Whether a fetch is in flight.
    pub loading: bool,
    /// Display message for the last failed fetch, cleared on retry.
    pub error: Option<String>,
    /// Sequence number of the most recently issued fetch.
    pub issued_seq: u64,
}

impl Default for DoctorsState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            selected_speciality: None,
            page: 0,
            doctors: Vec::new(),
            total_pages: 0,
            specialities: Vec::new(),
            loading: true,
            error: None,
            issued_seq: 0,
        }
    }
}

impl DoctorsState {
    /// Snapshot the committed filters for the next fetch.
    #[must_use]
    pub fn query(&self) -> DoctorQuery {
        DoctorQuery {
            page: self.page,
            search: if self.search_term.is_empty() {
                None
            } else {
                Some(self.search_term.clone())
            },
            speciality_id: self.selected_speciality,
        }
    }

    /// Record a newly issued fetch: mark loading, clear the prior error.
    pub fn begin_fetch(&mut self, seq: u64) {
        self.issued_seq = seq;
        self.loading = true;
        self.error = None;
    }

    /// Apply a successful response. Returns false (and changes nothing) when
    /// the response belongs to a superseded fetch.
    pub fn apply_page(&mut self, seq: u64, response: Page<Doctor>) -> bool {
        if seq != self.issued_seq {
            return false;
        }
        self.doctors = response.content;
        self.total_pages = response.total_pages;
        self.loading = false;
        true
    }

    /// Apply a failed fetch. Stale rows stay visible; only the error banner
    /// changes. Returns false for superseded fetches.
    pub fn apply_error(&mut self, seq: u64, message: String) -> bool {
        if seq != self.issued_seq {
            return false;
        }
        self.error = Some(message);
        self.loading = false;
        true
    }

    /// Update the search text; each committed change re-fetches from the
    /// current page.
    pub fn set_search(&mut self, text: String) {
        self.search_term = text;
    }

    /// Explicit search submission returns to the first page; the page reset
    /// is the sole fetch trigger.
    pub fn submit_search(&mut self) {
        self.page = 0;
    }

    /// Select a specialty from its raw select value and return to the first
    /// page. An out-of-range page index is never preserved across a filter
    /// change.
    pub fn change_speciality(&mut self, raw: &str) {
        self.selected_speciality = parse_speciality_choice(raw);
        self.page = 0;
    }

    /// Move to another page. Out-of-bounds requests are a silent no-op; the
    /// presentation layer disables the controls at the boundaries. Returns
    /// whether the page index changed.
    pub fn change_page(&mut self, new_page: u32) -> bool {
        if new_page >= self.total_pages || new_page == self.page {
            return false;
        }
        self.page = new_page;
        true
    }

    /// Adopt the dropdown specialties fetched once on mount.
    pub fn set_specialities(&mut self, specialities: Vec<Speciality>) {
        self.specialities = specialities;
    }

    /// Whether a previous page exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 0
    }

    /// Whether a next page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::DoctorsState;
    use cabinet_api_models::{Doctor, Page};

    fn doctor(id: i64) -> Doctor {
        Doctor {
            id,
            nom: format!("Nom{id}"),
            prenom: "Prenom".to_string(),
            email: format!("d{id}@exemple.fr"),
            telephone: "0601020304".to_string(),
            numero_ordre: format!("ORD-{id}"),
            specialite: None,
            adresse: None,
        }
    }

    fn page_of(ids: &[i64], page_number: u32, total_pages: u32) -> Page<Doctor> {
        let content: Vec<Doctor> = ids.iter().copied().map(doctor).collect();
        let len = u64::try_from(content.len()).expect("len fits");
        Page {
            empty: content.is_empty(),
            content,
            page_number,
            page_size: 9,
            total_elements: len,
            total_pages,
            first: page_number == 0,
            last: page_number + 1 >= total_pages,
        }
    }

    #[test]
    fn successful_fetch_replaces_rows_and_enables_next_only() {
        let mut state = DoctorsState::default();
        state.begin_fetch(1);
        assert!(state.apply_page(1, page_of(&[1, 2], 0, 3)));
        assert_eq!(state.doctors.len(), 2);
        assert_eq!(state.total_pages, 3);
        assert!(!state.loading);
        assert!(state.has_next());
        assert!(!state.has_previous());
    }

    #[test]
    fn out_of_range_page_change_is_a_no_op() {
        let mut state = DoctorsState::default();
        state.begin_fetch(1);
        assert!(state.apply_page(1, page_of(&[1], 0, 3)));
        assert!(!state.change_page(5));
        assert_eq!(state.page, 0);
        assert!(state.change_page(1));
        assert_eq!(state.page, 1);
    }

    #[test]
    fn speciality_change_resets_page_and_shapes_next_query() {
        let mut state = DoctorsState::default();
        state.total_pages = 5;
        state.page = 2;
        state.change_speciality("2");
        assert_eq!(state.page, 0);
        let query = state.query();
        assert_eq!(query.speciality_id, Some(2));
        assert_eq!(query.page, 0);
    }

    #[test]
    fn clearing_the_speciality_drops_the_filter() {
        let mut state = DoctorsState::default();
        state.change_speciality("2");
        state.change_speciality("");
        assert_eq!(state.selected_speciality, None);
    }

    #[test]
    fn search_submission_returns_to_first_page() {
        let mut state = DoctorsState::default();
        state.total_pages = 4;
        state.page = 3;
        state.set_search("mar".to_string());
        state.submit_search();
        assert_eq!(state.page, 0);
        assert_eq!(state.query().search.as_deref(), Some("mar"));
    }

    #[test]
    fn stale_response_never_overwrites_newer_results() {
        let mut state = DoctorsState::default();
        state.begin_fetch(1);
        state.begin_fetch(2);
        assert!(!state.apply_page(1, page_of(&[1], 0, 1)));
        assert!(state.doctors.is_empty(), "stale rows must be discarded");
        assert!(state.loading, "superseded response must not settle the page");
        assert!(state.apply_page(2, page_of(&[2, 3], 0, 2)));
        assert_eq!(
            state.doctors.iter().map(|d| d.id).collect::<Vec<_>>(),
            vec![2, 3]
        );
    }

    #[test]
    fn stale_error_is_discarded_too() {
        let mut state = DoctorsState::default();
        state.begin_fetch(1);
        state.begin_fetch(2);
        assert!(!state.apply_error(1, "boom".to_string()));
        assert!(state.error.is_none());
        assert!(state.apply_error(2, "boom".to_string()));
        assert_eq!(state.error.as_deref(), Some("boom"));
    }

    #[test]
    fn failed_fetch_keeps_stale_rows_visible() {
        let mut state = DoctorsState::default();
        state.begin_fetch(1);
        assert!(state.apply_page(1, page_of(&[1, 2], 0, 3)));
        state.begin_fetch(2);
        assert!(state.error.is_none(), "retry clears the prior error");
        assert!(state.apply_error(2, "réseau indisponible".to_string()));
        assert_eq!(state.doctors.len(), 2);
        assert_eq!(state.total_pages, 3);
        assert!(!state.loading);
    }
}
