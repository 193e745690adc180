//! HTTP client for the Cabinet Médical REST API (gloo-net).

use crate::core::logic::{DoctorQuery, build_doctors_path};
use crate::services::error::ApiError;
use cabinet_api_models::{Doctor, LoginRequest, Page, Speciality, User};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Shared REST client configured once per app boot.
#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if !response.ok() {
            return Err(ApiError::from_status(response.status()));
        }
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::get(&self.url(path))
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Self::decode(response).await
    }

    /// Authenticate a patient by email and phone number.
    pub(crate) async fn login(&self, credentials: &LoginRequest) -> Result<User, ApiError> {
        let response = Request::post(&self.url("/auth/login"))
            .header("Content-Type", "application/json")
            .json(credentials)
            .map_err(|err| ApiError::Network(err.to_string()))?
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Self::decode(response).await
    }

    /// Fetch one page of the doctor listing for a committed query snapshot.
    pub(crate) async fn fetch_doctors(
        &self,
        query: &DoctorQuery,
    ) -> Result<Page<Doctor>, ApiError> {
        self.get_json(&build_doctors_path(query)).await
    }

    /// Fetch a single practitioner by identifier.
    pub(crate) async fn fetch_doctor(&self, id: i64) -> Result<Doctor, ApiError> {
        self.get_json(&format!("/doctor/{id}")).await
    }

    /// Fetch all specialties for the filter dropdown.
    pub(crate) async fn fetch_specialities(&self) -> Result<Vec<Speciality>, ApiError> {
        self.get_json("/speciality/allSpecialities").await
    }
}
