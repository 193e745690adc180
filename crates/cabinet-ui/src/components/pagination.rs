//! Zero-based pagination controls.

use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;

/// Properties for [`Pagination`].
#[derive(Properties, PartialEq)]
pub(crate) struct PaginationProps {
    /// Current zero-based page index.
    pub page: u32,
    /// Total page count reported by the server.
    pub total_pages: u32,
    /// Invoked with the requested zero-based page index.
    #[prop_or_default]
    pub on_change: Callback<u32>,
}

/// Previous/next controls with a human-readable page indicator.
///
/// The indicator is one-based; navigation callbacks stay zero-based to match
/// the server contract.
#[function_component(Pagination)]
pub(crate) fn pagination(props: &PaginationProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));

    let at_first = props.page == 0;
    let at_last = props.page.saturating_add(1) >= props.total_pages;

    let on_previous = {
        let on_change = props.on_change.clone();
        let page = props.page;
        Callback::from(move |_: MouseEvent| {
            if page > 0 {
                on_change.emit(page - 1);
            }
        })
    };
    let on_next = {
        let on_change = props.on_change.clone();
        let page = props.page;
        let total_pages = props.total_pages;
        Callback::from(move |_: MouseEvent| {
            if page.saturating_add(1) < total_pages {
                on_change.emit(page + 1);
            }
        })
    };

    let indicator = format!(
        "{} {} {} {}",
        bundle.text("pagination.page", "Page"),
        props.page.saturating_add(1),
        bundle.text("pagination.of", "sur"),
        props.total_pages.max(1),
    );

    html! {
        <div class="pagination">
            <button class="btn-page" disabled={at_first} onclick={on_previous}>
                { bundle.text("pagination.previous", "Précédent") }
            </button>
            <span class="page-indicator">{ indicator }</span>
            <button class="btn-page" disabled={at_last} onclick={on_next}>
                { bundle.text("pagination.next", "Suivant") }
            </button>
        </div>
    }
}
