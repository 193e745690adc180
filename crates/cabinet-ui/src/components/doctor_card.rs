//! Card presentation for a single doctor.

use crate::core::logic::{doctor_title, speciality_badge};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use cabinet_api_models::Doctor;
use yew::prelude::*;

/// Properties for [`DoctorCard`].
#[derive(Properties, PartialEq)]
pub(crate) struct DoctorCardProps {
    /// Doctor to display.
    pub doctor: Doctor,
}

/// Render one doctor as a directory card.
///
/// Missing contact fields collapse their row; a doctor without a speciality
/// renders no badge at all.
#[function_component(DoctorCard)]
pub(crate) fn doctor_card(props: &DoctorCardProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let doctor = &props.doctor;

    let badge = match speciality_badge(doctor) {
        Some(name) => html! { <span class="speciality-badge">{ name }</span> },
        None => html! {},
    };

    html! {
        <div class="doctor-card">
            <div class="doctor-header">
                <h3>{ doctor_title(doctor) }</h3>
                { badge }
            </div>
            <div class="doctor-info">
                { info_row(bundle.text("card.email", "Email :"), &doctor.email) }
                { info_row(bundle.text("card.phone", "Téléphone :"), &doctor.telephone) }
                { info_row(
                    bundle.text("card.address", "Adresse :"),
                    doctor.adresse.as_deref().unwrap_or_default(),
                ) }
            </div>
            <div class="doctor-actions">
                <button class="btn-primary">{ bundle.text("card.book", "Prendre rendez-vous") }</button>
            </div>
        </div>
    }
}

fn info_row(label: String, value: &str) -> Html {
    if value.is_empty() {
        return html! {};
    }
    html! {
        <div class="info-item">
            <span class="info-label">{ label }</span>
            <span class="info-value">{ value }</span>
        </div>
    }
}
