//! Pure UI helpers extracted from components for non-wasm testing.

use cabinet_api_models::Doctor;
use std::fmt::Write;

/// Default sort column for the doctor listing.
const SORT_BY: &str = "nom";
/// Default sort direction for the doctor listing.
const SORT_DIRECTION: &str = "asc";

/// Committed filter/pagination snapshot for one doctor-list fetch.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct DoctorQuery {
    /// Zero-based page index; always sent.
    pub page: u32,
    /// Free-text search; sent only when non-empty.
    pub search: Option<String>,
    /// Specialty filter; sent only when selected.
    pub speciality_id: Option<i64>,
}

/// Build the doctor-list request path from a committed query snapshot.
#[must_use]
pub fn build_doctors_path(query: &DoctorQuery) -> String {
    let mut path = format!(
        "/doctor/allDoctors?page={}&sortBy={SORT_BY}&sortDirection={SORT_DIRECTION}",
        query.page
    );
    if let Some(search) = query.search.as_deref().filter(|s| !s.is_empty()) {
        let _ = write!(path, "&search={}", urlencoding::encode(search));
    }
    if let Some(id) = query.speciality_id {
        let _ = write!(path, "&specialityId={id}");
    }
    path
}

/// Parse a specialty select value into an optional identifier.
///
/// The empty selection ("all specialties") and any non-numeric value map to
/// `None`.
#[must_use]
pub fn parse_speciality_choice(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok()
}

/// Card heading for a practitioner.
#[must_use]
pub fn doctor_title(doctor: &Doctor) -> String {
    format!("Dr. {} {}", doctor.nom, doctor.prenom)
}

/// Specialty badge label, omitted entirely when the doctor has none.
#[must_use]
pub fn speciality_badge(doctor: &Doctor) -> Option<&str> {
    doctor
        .specialite
        .as_ref()
        .map(|specialty| specialty.nom.as_str())
}

#[cfg(test)]
mod tests {
    use super::{DoctorQuery, build_doctors_path, doctor_title, parse_speciality_choice, speciality_badge};
    use cabinet_api_models::{Doctor, Speciality};

    fn doctor(specialite: Option<Speciality>) -> Doctor {
        Doctor {
            id: 7,
            nom: "Martin".to_string(),
            prenom: "Paul".to_string(),
            email: "p@exemple.fr".to_string(),
            telephone: "0601020304".to_string(),
            numero_ordre: "ORD-7".to_string(),
            specialite,
            adresse: None,
        }
    }

    #[test]
    fn default_query_sends_page_and_sort_only() {
        assert_eq!(
            build_doctors_path(&DoctorQuery::default()),
            "/doctor/allDoctors?page=0&sortBy=nom&sortDirection=asc"
        );
    }

    #[test]
    fn search_is_encoded_and_speciality_id_appended() {
        let query = DoctorQuery {
            page: 2,
            search: Some("du pont".to_string()),
            speciality_id: Some(2),
        };
        assert_eq!(
            build_doctors_path(&query),
            "/doctor/allDoctors?page=2&sortBy=nom&sortDirection=asc&search=du%20pont&specialityId=2"
        );
    }

    #[test]
    fn empty_search_is_not_sent() {
        let query = DoctorQuery {
            page: 1,
            search: Some(String::new()),
            speciality_id: None,
        };
        assert_eq!(
            build_doctors_path(&query),
            "/doctor/allDoctors?page=1&sortBy=nom&sortDirection=asc"
        );
    }

    #[test]
    fn speciality_choice_parses_ids_and_blanks() {
        assert_eq!(parse_speciality_choice(""), None);
        assert_eq!(parse_speciality_choice("  "), None);
        assert_eq!(parse_speciality_choice("abc"), None);
        assert_eq!(parse_speciality_choice("2"), Some(2));
    }

    #[test]
    fn badge_is_omitted_without_speciality() {
        assert_eq!(speciality_badge(&doctor(None)), None);
        let with = doctor(Some(Speciality {
            id: 2,
            nom: "Cardiologie".to_string(),
            description: "Cœur et vaisseaux".to_string(),
        }));
        assert_eq!(speciality_badge(&with), Some("Cardiologie"));
    }

    #[test]
    fn title_prefixes_family_name() {
        assert_eq!(doctor_title(&doctor(None)), "Dr. Martin Paul");
    }
}
