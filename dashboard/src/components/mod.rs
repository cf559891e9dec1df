//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod header;
mod tabs;
mod general_query;
mod interaction;
mod response;

pub use header::Header;
pub use tabs::TabNav;
pub use general_query::GeneralQueryTab;
pub use interaction::InteractionTab;
pub use response::{ErrorBanner, ResponsePanel};

use advisor_shared::AdvisorResponse;
use leptos::prelude::*;

use crate::api;
use crate::state::AdvisorState;

// ==============================================================================
// submit actions shared by the forms
// ==============================================================================

/// Send the general query, if any, and write the outcome back
pub(crate) fn submit_general_query(set_state: WriteSignal<AdvisorState>) {
    let mut request = None;
    set_state.update(|s| request = s.begin_general_query());
    let Some(request) = request else {
        return;
    };

    leptos::task::spawn_local(async move {
        let result = api::submit_query(&request).await.map(AdvisorResponse::from);
        set_state.update(|s| s.settle(result));
    });
}

/// Send the interaction check, if both drugs are filled in
pub(crate) fn submit_interaction_check(set_state: WriteSignal<AdvisorState>) {
    let mut request = None;
    set_state.update(|s| request = s.begin_interaction_check());
    let Some(request) = request else {
        return;
    };

    leptos::task::spawn_local(async move {
        let result = api::check_interaction(&request)
            .await
            .map(AdvisorResponse::from);
        set_state.update(|s| s.settle(result));
    });
}
