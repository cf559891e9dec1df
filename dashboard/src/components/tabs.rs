//! Tab navigation component

use leptos::prelude::*;

use crate::state::{AdvisorState, Tab};

#[component]
pub fn TabNav(
    state: ReadSignal<AdvisorState>,
    set_state: WriteSignal<AdvisorState>,
) -> impl IntoView {
    view! {
        <div class="tabs">
            {Tab::ALL
                .into_iter()
                .map(|tab| view! {
                    <button
                        class=move || if state.with(|s| s.tab == tab) { "tab active" } else { "tab" }
                        on:click=move |_| set_state.update(|s| s.switch_tab(tab))
                    >
                        {tab.label()}
                    </button>
                })
                .collect_view()}
        </div>
    }
}
