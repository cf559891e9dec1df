//! ==============================================================================
//! lib.rs - Medicine & Drug Interaction Advisor
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm front end for the advisor api. the user either asks a
//!     free-text medication question or names two drugs to check for an
//!     interaction; the answer and its metadata are rendered below the form
//!     together with a medical disclaimer.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - one signal holding the page state (see state.rs)
//!     - calls the advisor api via fetch (see api.rs)
//!
//! ==============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use wasm_bindgen::prelude::*;

mod api;
mod components;
pub mod state;

use components::{ErrorBanner, GeneralQueryTab, Header, InteractionTab, ResponsePanel, TabNav};
use state::{AdvisorState, Tab};

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App() -> impl IntoView {
    provide_meta_context();

    // whole page state lives in one signal
    let (state, set_state) = signal(AdvisorState::default());

    view! {
        <Title text="Medicine & Drug Interaction Advisor" />
        <Header />
        <div class="container">
            <TabNav state=state set_state=set_state />

            <Show
                when=move || state.with(|s| s.tab == Tab::General)
                fallback=move || view! { <InteractionTab state=state set_state=set_state /> }
            >
                <GeneralQueryTab state=state set_state=set_state />
            </Show>

            <ErrorBanner state=state />
            <ResponsePanel state=state />
        </div>
    }
}
