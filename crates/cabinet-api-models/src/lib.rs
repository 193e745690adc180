#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Cabinet Médical public API.
//!
//! These types mirror the backend wire contract (French field names,
//! `camelCase` for compound fields) so the UI decodes responses strictly: a
//! required field missing from a payload is a decode error, never a silent
//! default. Only `specialite` and `adresse` are genuinely optional on the
//! wire.
use serde::{Deserialize, Serialize};

/// Role attached to an authenticated account.
///
/// Unknown role strings are rejected at decode time; an account role is
/// always one of the enumerated values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Regular patient account.
    Patient,
    /// Practice administrator account.
    Admin,
}

impl Role {
    /// Wire label for the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Patient => "PATIENT",
            Self::Admin => "ADMIN",
        }
    }
}

/// Authenticated account returned by `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Stable account identifier.
    pub id: i64,
    /// Family name.
    pub nom: String,
    /// Given name.
    pub prenom: String,
    /// Contact email (also the login identifier).
    pub email: String,
    /// Account role.
    pub role: Role,
}

/// Medical specialty category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Speciality {
    /// Stable specialty identifier.
    pub id: i64,
    /// Display name.
    pub nom: String,
    /// Longer description shown in tooltips/detail views.
    pub description: String,
}

/// Practitioner record returned by the doctor endpoints.
///
/// A doctor either embeds a fully populated [`Speciality`] or carries none;
/// there is no partially populated specialty state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    /// Stable practitioner identifier.
    pub id: i64,
    /// Family name.
    pub nom: String,
    /// Given name.
    pub prenom: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub telephone: String,
    /// Professional license/registration number.
    pub numero_ordre: String,
    /// Embedded specialty, absent or null when unassigned.
    #[serde(default)]
    pub specialite: Option<Speciality>,
    /// Practice address, when published.
    #[serde(default)]
    pub adresse: Option<String>,
}

/// Pagination envelope wrapping one bounded slice of a result set.
///
/// `page_number` is zero-based and lies in `[0, total_pages)` whenever
/// `total_pages > 0`; `content.len() <= page_size`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Elements of the current page.
    pub content: Vec<T>,
    /// Zero-based index of this page.
    pub page_number: u32,
    /// Requested page size.
    pub page_size: u32,
    /// Total number of elements across all pages.
    pub total_elements: u64,
    /// Total number of pages.
    pub total_pages: u32,
    /// Whether this is the first page.
    pub first: bool,
    /// Whether this is the last page.
    pub last: bool,
    /// Whether the page holds no elements.
    pub empty: bool,
}

/// Credential pair sent as the `POST /auth/login` body.
///
/// Transient by design: this value is never persisted client-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Login email.
    pub email: String,
    /// Phone number used as the shared secret.
    pub telephone: String,
}

#[cfg(test)]
mod tests {
    use super::{Doctor, LoginRequest, Page, Role, User};

    #[test]
    fn user_decodes_known_roles() {
        let user: User = serde_json::from_str(
            r#"{"id":1,"nom":"Durand","prenom":"Alice","email":"a@ex.fr","role":"PATIENT"}"#,
        )
        .expect("valid user");
        assert_eq!(user.role, Role::Patient);
        assert_eq!(Role::Admin.as_str(), "ADMIN");
    }

    #[test]
    fn user_rejects_unknown_role() {
        let result: Result<User, _> = serde_json::from_str(
            r#"{"id":1,"nom":"Durand","prenom":"Alice","email":"a@ex.fr","role":"ROBOT"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn doctor_accepts_null_or_missing_speciality() {
        let with_null: Doctor = serde_json::from_str(
            r#"{"id":7,"nom":"Martin","prenom":"Paul","email":"p@ex.fr",
                "telephone":"0601020304","numeroOrdre":"ORD-7","specialite":null}"#,
        )
        .expect("null specialty");
        assert!(with_null.specialite.is_none());

        let missing: Doctor = serde_json::from_str(
            r#"{"id":7,"nom":"Martin","prenom":"Paul","email":"p@ex.fr",
                "telephone":"0601020304","numeroOrdre":"ORD-7"}"#,
        )
        .expect("missing specialty");
        assert!(missing.specialite.is_none());
        assert!(missing.adresse.is_none());
    }

    #[test]
    fn doctor_embeds_full_speciality() {
        let doctor: Doctor = serde_json::from_str(
            r#"{"id":7,"nom":"Martin","prenom":"Paul","email":"p@ex.fr",
                "telephone":"0601020304","numeroOrdre":"ORD-7",
                "specialite":{"id":2,"nom":"Cardiologie","description":"Cœur"},
                "adresse":"1 rue de la Paix"}"#,
        )
        .expect("full doctor");
        let specialty = doctor.specialite.expect("specialty present");
        assert_eq!(specialty.id, 2);
        assert_eq!(specialty.nom, "Cardiologie");
        assert_eq!(doctor.adresse.as_deref(), Some("1 rue de la Paix"));
    }

    #[test]
    fn page_requires_all_envelope_fields() {
        let page: Page<Doctor> = serde_json::from_str(
            r#"{"content":[],"pageNumber":0,"pageSize":9,"totalElements":0,
                "totalPages":0,"first":true,"last":true,"empty":true}"#,
        )
        .expect("valid envelope");
        assert!(page.empty);

        let truncated: Result<Page<Doctor>, _> =
            serde_json::from_str(r#"{"content":[],"pageNumber":0}"#);
        assert!(truncated.is_err(), "partial envelopes must not decode");
    }

    #[test]
    fn login_request_uses_wire_names() {
        let body = serde_json::to_string(&LoginRequest {
            email: "a@ex.fr".to_string(),
            telephone: "0601020304".to_string(),
        })
        .expect("serializable");
        assert_eq!(body, r#"{"email":"a@ex.fr","telephone":"0601020304"}"#);
    }
}
